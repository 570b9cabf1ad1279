// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Radiometry formulae.

mod bands;

pub use bands::Band;

use crate::constants::{BOLTZMANN_K, JANSKY, PI, PLANCK_H, VEL_C};

/// The Planck specific intensity of a black body \[W m^-2 Hz^-1 sr^-1\] at a
/// frequency \[Hz\] and temperature \[K\].
pub fn planck_intensity(freq_hz: f64, temp_k: f64) -> f64 {
    let h_nu = PLANCK_H * freq_hz;
    2.0 * h_nu * freq_hz * freq_hz / (VEL_C * VEL_C) / (h_nu / (BOLTZMANN_K * temp_k)).exp_m1()
}

/// The solid angle \[sr\] of a uniform disk with an angular diameter
/// \[radians\]. Uses the small-angle approximation.
pub fn disk_solid_angle(angular_diameter_rad: f64) -> f64 {
    PI * angular_diameter_rad * angular_diameter_rad / 4.0
}

/// The angular diameter \[radians\] of a sphere with a radius \[metres\] at a
/// distance \[metres\].
pub fn angular_diameter(radius_m: f64, distance_m: f64) -> f64 {
    2.0 * (radius_m / distance_m).asin()
}

/// Convert the brightness temperature \[K\] of a disk with an angular diameter
/// \[radians\] to a flux density \[Jy\] at a frequency \[GHz\].
pub fn brightness_temperature_to_flux(
    temp_k: f64,
    freq_ghz: f64,
    angular_diameter_rad: f64,
) -> f64 {
    planck_intensity(freq_ghz * 1e9, temp_k) * disk_solid_angle(angular_diameter_rad) / JANSKY
}

/// Strong radio sources with flux-density expressions from E. P. Ekelman,
/// "Radio Star Flux Density Expressions for Accurate Antenna Gain
/// Measurements", IEEE (1999).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum StandardSource {
    #[strum(serialize = "Virgo")]
    VirgoA,

    Omega,

    Orion,
}

impl StandardSource {
    fn params(self) -> (f64, f64) {
        match self {
            StandardSource::VirgoA => (6.541, -1.289),
            StandardSource::Omega => (4.056, -0.378),
            StandardSource::Orion => (3.317, -0.204),
        }
    }

    /// The flux density \[Jy\] at a frequency \[GHz\].
    pub fn flux_density(self, freq_ghz: f64) -> f64 {
        let (p1, p2) = self.params();
        10_f64.powf(p1 + p2 * (1000.0 * freq_ghz).log10())
    }
}

/// The average Galactic background brightness \[W m^-2 Hz^-1 sr^-1\] at a
/// frequency \[MHz\], from Zarka et al., JGR 109, A09S15 (2004). This includes
/// the Galactic emission (attenuated by the Galaxy's own optical depth) and
/// the extragalactic emission behind it.
pub fn galactic_background(freq_mhz: f64) -> f64 {
    const GALACTIC: f64 = 2.48e-20;
    const EXTRAGALACTIC: f64 = 1.06e-20;
    let tau = 5.0 * freq_mhz.powf(-2.1);
    GALACTIC * freq_mhz.powf(-0.52) * (1.0 - (-tau).exp()) / tau
        + EXTRAGALACTIC * freq_mhz.powf(-0.8) * (-tau).exp()
}
