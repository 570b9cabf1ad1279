// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. `calflux` should do as many
calculations as possible in double precision.
 */

pub use std::f64::consts::{FRAC_PI_2, PI, TAU};

pub use marlu::constants::VEL_C;

/// Planck constant \[J s\]
pub const PLANCK_H: f64 = 6.626_070_15e-34;

/// Boltzmann constant \[J/K\]
pub const BOLTZMANN_K: f64 = 1.380_649e-23;

/// One jansky \[W m^-2 Hz^-1\]
pub const JANSKY: f64 = 1e-26;

/// One astronomical unit \[metres\]
pub const AU_M: f64 = 1.495_978_707e11;

/// The Julian date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// The length of a "complete" IAU source designation without its prefix,
/// e.g. "1331+305" (HHMM±DDd).
pub const IAU_NAME_LENGTH: usize = 8;

/// Two declinations whose rounded values differ by less than this are
/// considered to be the same source when matching truncated IAU names.
pub const IAU_DEC_TOLERANCE: i64 = 2;

/// When estimating a flux density inside a time series, this many samples
/// either side of the nearest sample are used in the fit.
pub const TIME_SERIES_HALF_WINDOW: usize = 4;

/// Conversion between frequency \[GHz\] and wavelength \[mm\] (c ≈ 300 mm GHz).
pub const MM_GHZ: f64 = 300.0;
