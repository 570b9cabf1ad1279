// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Build and verify calibrator catalog snapshots.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use clap::Parser;
use log::{debug, info};

use super::common::{display_warnings, InfoPrinter};
use crate::{
    catalog::{
        parse_vla_listing, read_catalog_file, write_catalog_file, CatalogCounts, CatalogError,
    },
    timeseries::parse_umrao_table,
    CalfluxError,
};

/// Ingest a local copy of the VLA calibrator manual listing into a catalog
/// snapshot.
#[derive(Parser, Debug)]
pub struct CatalogIngestArgs {
    /// Path to the VLA calibrator listing (text or html).
    #[clap(name = "LISTING", parse(from_os_str))]
    listing: PathBuf,

    /// Path to the snapshot to write. The format (yaml or json) is decided by
    /// the extension.
    #[clap(name = "OUTPUT", parse(from_os_str))]
    output: PathBuf,
}

impl CatalogIngestArgs {
    pub fn run(&self, dry_run: bool) -> Result<(), CalfluxError> {
        debug!("Ingesting {}", self.listing.display());
        let mut buf = BufReader::new(File::open(&self.listing)?);
        let store = parse_vla_listing(&mut buf).map_err(|err| CatalogError::Ingest {
            path: self.listing.clone(),
            err,
        })?;
        display_warnings();

        let mut printer = InfoPrinter::new(format!("Ingested {}", self.listing.display()).into());
        printer.push_block(counts_lines(store.get_counts()));
        printer.display();

        if dry_run {
            info!("Dry run -- not writing {}", self.output.display());
            return Ok(());
        }
        write_catalog_file(&self.output, &store)?;
        info!(
            "Wrote {} calibrators to {}",
            store.len(),
            self.output.display()
        );
        Ok(())
    }
}

/// Verify that catalog snapshots (yaml or json) and UMRAO tables (txt) can be
/// read by calflux.
#[derive(Parser, Debug)]
pub struct CatalogVerifyArgs {
    /// Paths to the snapshots or tables to be verified.
    #[clap(name = "FILES", parse(from_os_str), required = true)]
    files: Vec<PathBuf>,
}

impl CatalogVerifyArgs {
    /// Read and print stats out for each file. If a file couldn't be read,
    /// print the error, and continue trying to read the other files. If any
    /// file failed, return an error after all files have been tried.
    pub fn run(&self) -> Result<(), CalfluxError> {
        let mut num_failed = 0;
        for file in &self.files {
            info!("{}:", file.display());
            match verify(file) {
                Ok(lines) => {
                    for line in lines {
                        info!("    {line}");
                    }
                }
                Err(e) => {
                    info!("    {e}");
                    num_failed += 1;
                }
            }
            info!("");
        }

        if num_failed > 0 {
            return Err(CalfluxError::Catalog(format!(
                "{num_failed} of {} files could not be read",
                self.files.len()
            )));
        }
        Ok(())
    }
}

fn verify(file: &Path) -> Result<Vec<String>, CatalogError> {
    let is_table = file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);
    if is_table {
        let mut buf = BufReader::new(File::open(file)?);
        let ts = parse_umrao_table(&mut buf).map_err(|err| CatalogError::Ingest {
            path: file.to_path_buf(),
            err,
        })?;
        let mut lines = vec![format!(
            "UMRAO table: {} channels, {} samples",
            ts.channels().len(),
            ts.num_samples()
        )];
        for channel in ts.channels() {
            let samples = channel.samples();
            lines.push(format!(
                "{} GHz: {} samples, MJD {} to {}",
                channel.freq_ghz(),
                samples.len(),
                samples[0].mjd,
                samples[samples.len() - 1].mjd
            ));
        }
        Ok(lines)
    } else {
        let store = read_catalog_file(file)?;
        Ok(counts_lines(store.get_counts())
            .into_iter()
            .map(|l| l.into_owned())
            .collect())
    }
}

fn counts_lines(counts: CatalogCounts) -> Vec<std::borrow::Cow<'static, str>> {
    let CatalogCounts {
        num_records,
        num_bnames,
        num_3c,
        num_flux_samples,
        num_without_fluxes,
    } = counts;
    vec![
        format!("{num_records} calibrators ({num_bnames} with B1950 names, {num_3c} with 3C designations)").into(),
        format!("{num_flux_samples} flux-density samples; {num_without_fluxes} calibrators without any").into(),
    ]
}
