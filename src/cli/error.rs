// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all calflux-related errors. This should be the *only* error
//! enum that is publicly visible from the command-line interface.

use thiserror::Error;

use super::{band::BandArgsError, flux::FluxArgsError};
use crate::{
    catalog::{CatalogError, IngestError},
    interp::InterpolationError,
    names::NameError,
    resolve::ResolveError,
};

/// Each message ends with a pointer to the help of the relevant subcommand,
/// unless it's "generic".
#[derive(Error, Debug)]
pub enum CalfluxError {
    /// An error related to estimating a flux density.
    #[error("{0}\n\nSee for more info: calflux flux --help")]
    Flux(String),

    /// An error related to catalog snapshots.
    #[error("{0}\n\nSee for more info: calflux catalog-verify --help")]
    Catalog(String),

    /// An error related to ingesting a VLA listing or UMRAO table.
    #[error("{0}\n\nSee for more info: calflux catalog-ingest --help")]
    Ingest(String),

    /// An error related to source names.
    #[error("{0}\n\nSee for more info: calflux name-resolve --help")]
    Name(String),

    /// An error related to band lookups.
    #[error("{0}\n\nSee for more info: calflux band --help")]
    Band(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are toml or json files with the same keys as the long command-line arguments")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<FluxArgsError> for CalfluxError {
    fn from(e: FluxArgsError) -> Self {
        Self::Flux(e.to_string())
    }
}

impl From<BandArgsError> for CalfluxError {
    fn from(e: BandArgsError) -> Self {
        Self::Band(e.to_string())
    }
}

impl From<CatalogError> for CalfluxError {
    fn from(e: CatalogError) -> Self {
        let s = e.to_string();
        match e {
            CatalogError::UnrecognisedExtension(_)
            | CatalogError::InvalidRa { .. }
            | CatalogError::InvalidDec { .. }
            | CatalogError::NonFiniteFlux { .. }
            | CatalogError::Yaml(_)
            | CatalogError::Json(_) => Self::Catalog(s),
            CatalogError::Ingest { .. } => Self::Ingest(s),
            CatalogError::IO(e) => Self::from(e),
        }
    }
}

impl From<IngestError> for CalfluxError {
    fn from(e: IngestError) -> Self {
        let s = e.to_string();
        match e {
            IngestError::ParseRa { .. }
            | IngestError::ParseDec { .. }
            | IngestError::IncompleteJ2000Line { .. }
            | IngestError::ParseFloat { .. }
            | IngestError::NonFiniteValue { .. }
            | IngestError::NoSources
            | IngestError::NoSamples => Self::Ingest(s),
            IngestError::IO(e) => Self::from(e),
        }
    }
}

impl From<NameError> for CalfluxError {
    fn from(e: NameError) -> Self {
        Self::Name(e.to_string())
    }
}

impl From<InterpolationError> for CalfluxError {
    fn from(e: InterpolationError) -> Self {
        Self::Flux(e.to_string())
    }
}

impl From<ResolveError> for CalfluxError {
    fn from(e: ResolveError) -> Self {
        let s = e.to_string();
        match e {
            ResolveError::UnresolvedSource(_) | ResolveError::MalformedName(_) => Self::Name(s),
            ResolveError::InsufficientData(_)
            | ResolveError::InvalidFrequency(_)
            | ResolveError::Interpolation { .. } => Self::Flux(s),
            ResolveError::CatalogUnavailable(e) => Self::from(e),
        }
    }
}

// Library code errors.

impl From<std::io::Error> for CalfluxError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
