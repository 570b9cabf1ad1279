// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Resolve source names against a catalog snapshot.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::{
    catalog::CatalogStore,
    names::{resolve_kind, SourceNameKind},
    CalfluxError,
};

/// Print the canonical (J2000) catalog key of each source name.
#[derive(Parser, Debug)]
pub struct NameResolveArgs {
    /// Path to the catalog snapshot.
    #[clap(short, long, parse(from_os_str))]
    catalog: PathBuf,

    /// The names to resolve, e.g. 3C286, J1331+305, B1328+307 or 1331+30.
    #[clap(name = "NAMES", required = true)]
    names: Vec<String>,
}

impl NameResolveArgs {
    pub fn run(&self) -> Result<(), CalfluxError> {
        let catalog = super::common::read_catalog(&self.catalog)?;
        let mut num_failed = 0;
        for name in &self.names {
            match describe(&catalog, name) {
                Ok(line) => info!("{line}"),
                Err(e) => {
                    info!("{name}: {e}");
                    num_failed += 1;
                }
            }
        }

        if num_failed > 0 {
            return Err(CalfluxError::Name(format!(
                "{num_failed} of {} names could not be resolved",
                self.names.len()
            )));
        }
        Ok(())
    }
}

fn describe(catalog: &CatalogStore, name: &str) -> Result<String, CalfluxError> {
    let kind = SourceNameKind::classify(name);
    if let SourceNameKind::Planet(planet) = kind {
        return Ok(format!("{name}: the planet {planet}"));
    }
    let resolved = resolve_kind(catalog, &kind)?;
    Ok(format!(
        "{name}: J{} (matched {})",
        resolved.jname,
        resolved.display_matched()
    ))
}
