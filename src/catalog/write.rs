// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to write out catalog snapshots.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use log::debug;

use super::{CatalogError, CatalogFileType, CatalogStore, TmpCatalog, TmpRecord};

/// Write a [`CatalogStore`] to a file. The format of the snapshot (yaml or
/// json) is determined by the file extension.
pub fn write_catalog_file<P: AsRef<Path>>(
    path: P,
    catalog: &CatalogStore,
) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let file_type = path
        .extension()
        .and_then(|os_str| os_str.to_str())
        .map(|s| s.to_lowercase())
        .and_then(|s| CatalogFileType::from_str(&s).ok())
        .ok_or_else(|| CatalogError::UnrecognisedExtension(path.to_path_buf()))?;

    debug!(
        "Writing {} calibrators to {} ({file_type})",
        catalog.len(),
        path.display()
    );
    let mut f = BufWriter::new(File::create(path)?);
    match file_type {
        CatalogFileType::Yaml => catalog_to_yaml(&mut f, catalog)?,
        CatalogFileType::Json => catalog_to_json(&mut f, catalog)?,
    }
    f.flush()?;
    Ok(())
}

/// Write a [`CatalogStore`] as yaml.
pub fn catalog_to_yaml<T: std::io::Write>(
    buf: &mut T,
    catalog: &CatalogStore,
) -> Result<(), CatalogError> {
    serde_yaml::to_writer(buf, &store_to_tmp(catalog))?;
    Ok(())
}

/// Write a [`CatalogStore`] as json.
pub fn catalog_to_json<T: std::io::Write>(
    buf: &mut T,
    catalog: &CatalogStore,
) -> Result<(), CatalogError> {
    serde_json::to_writer_pretty(buf, &store_to_tmp(catalog))?;
    Ok(())
}

fn store_to_tmp(catalog: &CatalogStore) -> TmpCatalog {
    catalog
        .iter()
        .map(|r| {
            (
                r.jname().to_string(),
                TmpRecord {
                    ra: r.radec.ra.to_degrees(),
                    dec: r.radec.dec.to_degrees(),
                    bname: r.bname.clone(),
                    cat3c: r.cat3c.clone(),
                    fluxes: r.fluxes.clone(),
                },
            )
        })
        .collect()
}
