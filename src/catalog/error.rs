// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use super::CATALOG_FILE_TYPES_COMMA_SEPARATED;

/// Errors associated with reading or writing catalog snapshots and time-series
/// tables. When these reach the flux resolver, they are all reported as the
/// catalog being unavailable.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog file '{0}' doesn't have a recognised file extension! Valid extensions are: {}", *CATALOG_FILE_TYPES_COMMA_SEPARATED)]
    UnrecognisedExtension(PathBuf),

    #[error(
        "Calibrator {jname}: Attempted to use RA {ra}°, but this is out of range (0° <= RA < 360°)"
    )]
    InvalidRa { jname: String, ra: f64 },

    #[error("Calibrator {jname}: Attempted to use Dec {dec}°, but this is out of range (-90° <= Dec <= 90°)")]
    InvalidDec { jname: String, dec: f64 },

    #[error("Calibrator {jname}: The flux density in band {band} is not finite")]
    NonFiniteFlux { jname: String, band: String },

    #[error("Error when ingesting '{path}': {err}")]
    Ingest { path: PathBuf, err: IngestError },

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Errors associated with ingesting text listings (VLA calibrator manual
/// pages, UMRAO tables).
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Line {line_num}: Could not parse '{string}' as a right ascension")]
    ParseRa { line_num: u32, string: String },

    #[error("Line {line_num}: Could not parse '{string}' as a declination")]
    ParseDec { line_num: u32, string: String },

    #[error("Line {line_num}: Expected at least {expected} fields on a J2000 line, got {got}")]
    IncompleteJ2000Line {
        line_num: u32,
        expected: usize,
        got: usize,
    },

    #[error("Line {line_num}: Could not parse '{string}' as a float")]
    ParseFloat { line_num: u32, string: String },

    #[error("Line {line_num}: '{string}' is not a finite number")]
    NonFiniteValue { line_num: u32, string: String },

    #[error("The listing contained no calibrators")]
    NoSources,

    #[error("The table contained no flux-density samples")]
    NoSamples,

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
