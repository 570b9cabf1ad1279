// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flux densities of the Sun and planets.
//!
//! A body's flux density is that of a uniform disk with the body's brightness
//! temperature and apparent size. Brightness temperatures come from
//! literature measurements; some depend on the body's current distance from
//! the Sun or its phase, which are determined by [`Planet::geometry`].

mod ephemeris;

pub use ephemeris::PlanetGeometry;

use hifitime::Epoch;
use log::debug;

use crate::{
    constants::AU_M,
    math::{polyfit, polyval},
    physics::{angular_diameter, brightness_temperature_to_flux},
};

/// Bodies with brightness-temperature models.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Planet {
    Sun,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// Venus brightness temperatures measured by Butler et al., Icarus 154 (2001)
/// (4.86 to 22.46 GHz), Ulich et al., IEEE Trans. Ant. Prop. AP-28 (1980)
/// (86.1 GHz), Yefanov et al., Radiofizika 13 (1970) (37.5 and 138.9 GHz) and
/// Baars et al., Z. f. Astrophys. 61 (1965) (14.5 GHz).
const VENUS_FREQS_GHZ: [f64; 8] = [22.46, 14.94, 8.44, 4.86, 14.5, 86.1, 37.5, 138.9];
const VENUS_TB_K: [f64; 8] = [505.2, 565.9, 657.5, 679.9, 480.0, 357.5, 495., 290.];
const VENUS_SIGMA_TB_K: [f64; 8] = [25.3, 17.0, 13.2, 13.6, 100.0, 13.1, 100.0, 100.0];

/// At and below this frequency \[GHz\], the Venus fit isn't used.
const VENUS_LOW_FREQ_GHZ: f64 = 4.0;
const VENUS_LOW_FREQ_TB_K: f64 = 686.0;
/// Above this frequency \[GHz\], the Venus fit isn't used.
const VENUS_HIGH_FREQ_GHZ: f64 = 75.0;
const VENUS_HIGH_FREQ_TB_K: f64 = 351.0;

lazy_static::lazy_static! {
    /// Coefficients of a cubic in log10(frequency \[GHz\]) fitted to the Venus
    /// brightness temperatures. Residuals are weighted by 1/sigma^2.
    static ref VENUS_TB_FIT: Vec<f64> = {
        let log_freqs = VENUS_FREQS_GHZ.map(f64::log10);
        let weights = VENUS_SIGMA_TB_K.map(|s| 1.0 / (s * s));
        polyfit(&log_freqs, &VENUS_TB_K, Some(weights.as_slice()), 3)
            .expect("8 distinct Venus samples always support a cubic fit")
    };
}

/// A flux density of a [`Planet`], along with how it was derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetFlux {
    /// \[Jy\]
    pub flux_jy: f64,

    /// \[K\]
    pub brightness_temperature_k: f64,

    /// \[radians\]
    pub angular_diameter_rad: f64,

    pub geometry: PlanetGeometry,

    /// Where the brightness temperature comes from.
    pub reference: &'static str,
}

impl Planet {
    /// The mean radius of the body \[metres\].
    pub fn radius_m(self) -> f64 {
        match self {
            Planet::Sun => 6.957e8,
            Planet::Mercury => 2.4397e6,
            Planet::Venus => 6.0518e6,
            Planet::Mars => 3.3895e6,
            Planet::Jupiter => 6.9911e7,
            Planet::Saturn => 5.8232e7,
        }
    }

    /// The literature reference of the brightness temperature.
    pub fn reference(self) -> &'static str {
        match self {
            Planet::Sun => "",
            Planet::Mercury => "Klein1970",
            Planet::Venus => "model",
            Planet::Mars => "Dent1965",
            Planet::Jupiter => "Baars1965",
            Planet::Saturn => "Welch1966",
        }
    }

    /// The brightness temperature \[K\] at a frequency \[GHz\]. Mars is corrected
    /// for its distance from the Sun, and Mercury for its phase.
    pub fn brightness_temperature(self, freq_ghz: f64, geometry: &PlanetGeometry) -> f64 {
        match self {
            Planet::Sun => 5800.0,
            Planet::Mercury => {
                let wavelength_mm = 300.0 / freq_ghz;
                330.0
                    * 10_f64.powf((0.1 - 0.4 * geometry.illuminated_fraction) / wavelength_mm)
            }
            Planet::Venus => venus_brightness_temperature(freq_ghz),
            Planet::Mars => 190.0 * (1.524 / geometry.sun_distance_au).powi(2),
            Planet::Jupiter => 157.0,
            Planet::Saturn => 0.94 * 157.0,
        }
    }

    /// The flux density of this body at a frequency \[GHz\] and epoch.
    pub fn flux_density(self, freq_ghz: f64, epoch: Epoch) -> PlanetFlux {
        let geometry = self.geometry(epoch);
        let brightness_temperature_k = self.brightness_temperature(freq_ghz, &geometry);
        let angular_diameter_rad =
            angular_diameter(self.radius_m(), geometry.earth_distance_au * AU_M);
        let flux_jy = brightness_temperature_to_flux(
            brightness_temperature_k,
            freq_ghz,
            angular_diameter_rad,
        );
        debug!(
            "{self}: {:.3} AU away, Tb = {brightness_temperature_k:.1} K, diameter = {:.2}\", {flux_jy} Jy",
            geometry.earth_distance_au,
            angular_diameter_rad.to_degrees() * 3600.0
        );
        PlanetFlux {
            flux_jy,
            brightness_temperature_k,
            angular_diameter_rad,
            geometry,
            reference: self.reference(),
        }
    }
}

fn venus_brightness_temperature(freq_ghz: f64) -> f64 {
    if freq_ghz <= VENUS_LOW_FREQ_GHZ {
        VENUS_LOW_FREQ_TB_K
    } else if freq_ghz > VENUS_HIGH_FREQ_GHZ {
        VENUS_HIGH_FREQ_TB_K
    } else {
        polyval(&VENUS_TB_FIT, freq_ghz.log10())
    }
}
