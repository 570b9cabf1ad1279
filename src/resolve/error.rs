// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::{catalog::CatalogError, interp::InterpolationError, names::NameError};

/// Why a flux density could not be resolved. None of these are fatal; callers
/// may report them and carry on with other sources.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("'{0}' is not a known planet or catalogued source")]
    UnresolvedSource(String),

    #[error("Source {0} has no usable flux-density samples")]
    InsufficientData(String),

    #[error("{0}")]
    MalformedName(String),

    #[error("Frequency {0} GHz is not a positive number")]
    InvalidFrequency(f64),

    #[error("The calibrator catalog is unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),

    #[error("Could not estimate a flux density for {name}: {err}")]
    Interpolation {
        name: String,
        err: InterpolationError,
    },
}

impl From<NameError> for ResolveError {
    fn from(e: NameError) -> Self {
        match e {
            NameError::Malformed(_) => Self::MalformedName(e.to_string()),
            NameError::Unresolved(s) => Self::UnresolvedSource(s),
        }
    }
}

impl ResolveError {
    pub(super) fn from_interpolation(name: &str, err: InterpolationError) -> ResolveError {
        match err {
            InterpolationError::NoData => ResolveError::InsufficientData(name.to_string()),
            err => ResolveError::Interpolation {
                name: name.to_string(),
                err,
            },
        }
    }
}
