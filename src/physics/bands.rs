// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Waveguide band designations.

/// IEEE waveguide bands. `D` covers everything at and above 115 GHz.
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
pub enum Band {
    L,
    S,
    C,
    X,
    Ku,
    K,
    Ka,
    Q,
    V,
    W,
    D,
}

impl Band {
    /// The band containing a frequency \[GHz\]. There is no band below 1 GHz.
    pub fn from_frequency(freq_ghz: f64) -> Option<Band> {
        let band = match freq_ghz {
            f if !(1.0..).contains(&f) => return None,
            f if f < 2.0 => Band::L,
            f if f < 4.0 => Band::S,
            f if f < 8.0 => Band::C,
            f if f < 12.0 => Band::X,
            f if f < 18.0 => Band::Ku,
            f if f < 26.5 => Band::K,
            f if f < 40.0 => Band::Ka,
            f if f < 50.0 => Band::Q,
            f if f < 75.0 => Band::V,
            f if f < 115.0 => Band::W,
            _ => Band::D,
        };
        Some(band)
    }

    /// The nominal centre frequency \[GHz\] of a band, if one is defined.
    pub fn nominal_frequency(self) -> Option<f64> {
        match self {
            Band::L => Some(1.7),
            Band::S => Some(2.3),
            Band::C => Some(5.0),
            Band::X => Some(8.45),
            Band::Ku => Some(15.0),
            Band::K => Some(22.0),
            Band::Ka => Some(34.0),
            Band::Q => Some(42.0),
            Band::W => Some(90.0),
            Band::V | Band::D => None,
        }
    }
}
