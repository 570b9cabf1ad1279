// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::math::FitError;

#[derive(Error, Debug)]
pub enum InterpolationError {
    #[error("No samples are available to estimate from")]
    NoData,

    #[error("The flux densities and their abscissae have different lengths ({xs} vs. {ys})")]
    LengthMismatch { xs: usize, ys: usize },

    #[error(transparent)]
    Fit(#[from] FitError),
}
