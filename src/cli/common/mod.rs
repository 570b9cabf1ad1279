// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. e.g. the `flux` and
//! `name-resolve` subcommands both read a catalog snapshot, so the same
//! catalog arguments are shared between them.

mod printers;

pub(super) use printers::InfoPrinter;
pub(crate) use printers::{display_warnings, Warn};

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::Parser;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::CalfluxError;
use crate::{
    catalog::{read_catalog_file, CatalogError, CatalogStore, CATALOG_FILE_TYPES_COMMA_SEPARATED},
    resolve::CalibratorFluxResolver,
    timeseries::UmraoDirectory,
};

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    pub(super) static ref CATALOG_HELP: String =
        format!("Path to a calibrator catalog snapshot, as written by catalog-ingest. Supported formats: {}. Without a catalog, only planets can be resolved", *CATALOG_FILE_TYPES_COMMA_SEPARATED);
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

/// Read an arguments file into a deserialisable argument struct. The file type
/// is decided by its extension. Must be used inside a function returning
/// `Result<_, CalfluxError>`.
macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(CalfluxError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(CalfluxError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(CalfluxError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

/// Where calibrator catalogs come from.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct CatalogArgs {
    #[clap(short, long, help = CATALOG_HELP.as_str(), parse(from_os_str), help_heading = "CATALOGS")]
    pub(super) catalog: Option<PathBuf>,

    /// A directory of UMRAO monitoring tables, each named after its source's
    /// B1950 name (e.g. 1328+307.txt). Sources with a table use it instead of
    /// their catalog flux densities.
    #[clap(long, parse(from_os_str), help_heading = "CATALOGS")]
    pub(super) umrao_dir: Option<PathBuf>,
}

impl CatalogArgs {
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            catalog: self.catalog.or(other.catalog),
            umrao_dir: self.umrao_dir.or(other.umrao_dir),
        }
    }

    /// Read the catalog snapshot (if any) and build a resolver around it.
    pub(super) fn parse(self) -> Result<CalibratorFluxResolver, CalfluxError> {
        let catalog = match self.catalog {
            Some(path) => {
                debug!("Reading catalog snapshot {}", path.display());
                read_catalog(&path)?
            }
            None => {
                "No catalog was supplied; only planets can be resolved".warn();
                CatalogStore::default()
            }
        };

        let mut resolver = CalibratorFluxResolver::new(Arc::new(catalog));
        if let Some(dir) = self.umrao_dir {
            if !dir.is_dir() {
                return Err(CalfluxError::Catalog(format!(
                    "The UMRAO table directory '{}' doesn't exist",
                    dir.display()
                )));
            }
            resolver = resolver.with_timeseries(Box::new(UmraoDirectory::new(dir)));
        }
        Ok(resolver)
    }
}

/// Read a catalog snapshot. IO errors name the snapshot.
pub(super) fn read_catalog(path: &Path) -> Result<CatalogStore, CalfluxError> {
    read_catalog_file(path).map_err(|e| match e {
        CatalogError::IO(e) => CalfluxError::Catalog(format!(
            "The catalog '{}' is unavailable: {e}",
            path.display()
        )),
        e => CalfluxError::from(e),
    })
}
