// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read catalog snapshots.

use std::{fs::File, path::Path, str::FromStr};

use log::debug;
use marlu::RADec;

use super::{CalibratorRecord, CatalogError, CatalogFileType, CatalogStore, TmpCatalog};

/// Given the path to a catalog snapshot, return a [`CatalogStore`]. The format
/// of the snapshot (yaml or json) is determined by the file extension.
pub fn read_catalog_file<P: AsRef<Path>>(path: P) -> Result<CatalogStore, CatalogError> {
    fn inner(path: &Path) -> Result<CatalogStore, CatalogError> {
        debug!("Attempting to read catalog snapshot {}", path.display());
        let file_type = path
            .extension()
            .and_then(|os_str| os_str.to_str())
            .map(|s| s.to_lowercase())
            .and_then(|s| CatalogFileType::from_str(&s).ok())
            .ok_or_else(|| CatalogError::UnrecognisedExtension(path.to_path_buf()))?;

        let mut f = std::io::BufReader::new(File::open(path)?);
        match file_type {
            CatalogFileType::Yaml => catalog_from_yaml(&mut f),
            CatalogFileType::Json => catalog_from_json(&mut f),
        }
    }
    inner(path.as_ref())
}

/// Convert a yaml buffer to a [`CatalogStore`].
pub fn catalog_from_yaml<T: std::io::BufRead>(buf: &mut T) -> Result<CatalogStore, CatalogError> {
    let tmp: TmpCatalog = serde_yaml::from_reader(buf)?;
    tmp_to_store(tmp)
}

/// Convert a json buffer to a [`CatalogStore`].
pub fn catalog_from_json<T: std::io::BufRead>(buf: &mut T) -> Result<CatalogStore, CatalogError> {
    let tmp: TmpCatalog = serde_json::from_reader(buf)?;
    tmp_to_store(tmp)
}

fn tmp_to_store(tmp: TmpCatalog) -> Result<CatalogStore, CatalogError> {
    let mut records = Vec::with_capacity(tmp.len());
    for (jname, r) in tmp {
        // Complain if we spot something wrong.
        if !(0.0..360.0).contains(&r.ra) {
            return Err(CatalogError::InvalidRa { jname, ra: r.ra });
        }
        if !(-90.0..=90.0).contains(&r.dec) {
            return Err(CatalogError::InvalidDec { jname, dec: r.dec });
        }
        if let Some((band, _)) = r.fluxes.iter().find(|(_, fd)| !fd.is_finite()) {
            return Err(CatalogError::NonFiniteFlux {
                jname,
                band: band.to_string(),
            });
        }

        let mut record = CalibratorRecord::new(jname, RADec::from_degrees(r.ra, r.dec));
        record.bname = r.bname;
        record.cat3c = r.cat3c;
        record.fluxes = r.fluxes;
        records.push(record);
    }
    Ok(CatalogStore::new(records))
}
