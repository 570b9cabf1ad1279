// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calibrator catalogues.
//!
//! A [`CatalogStore`] is a read-only snapshot of [`CalibratorRecord`]s keyed by
//! their J2000 IAU names, along with cross references from B1950 IAU names and
//! 3C designations. Snapshots are built by ingesting a VLA calibrator listing
//! ([`parse_vla_listing`]) and persisted as yaml or json
//! ([`read_catalog_file`], [`write_catalog_file`]).

mod error;
mod read;
mod types;
mod vla;
mod write;

pub use error::{CatalogError, IngestError};
pub use read::{catalog_from_json, catalog_from_yaml, read_catalog_file};
pub use types::*;
pub use vla::parse_vla_listing;
pub use write::{catalog_to_json, catalog_to_yaml, write_catalog_file};

use itertools::Itertools;
use strum::IntoEnumIterator;

/// All of the possible file extensions that a catalog snapshot can have.
#[derive(
    Debug, Clone, Copy, strum_macros::Display, strum_macros::EnumIter, strum_macros::EnumString,
)]
pub(crate) enum CatalogFileType {
    #[strum(to_string = "yaml", serialize = "yml")]
    Yaml,

    #[strum(serialize = "json")]
    Json,
}

lazy_static::lazy_static! {
    pub(crate) static ref CATALOG_FILE_TYPES_COMMA_SEPARATED: String = CatalogFileType::iter().join(", ");
}

/// The on-disk representation of a catalog snapshot: records keyed by their
/// J2000 names.
pub(crate) type TmpCatalog = indexmap::IndexMap<String, TmpRecord>;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub(crate) struct TmpRecord {
    /// \[degrees\]
    pub(crate) ra: f64,
    /// \[degrees\]
    pub(crate) dec: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) bname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) cat3c: Option<String>,
    /// Flux densities \[Jy\] keyed by band labels like "mm7".
    #[serde(default)]
    pub(crate) fluxes: std::collections::BTreeMap<BandLabel, f64>,
}
