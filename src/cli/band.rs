// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Look up waveguide bands.

use clap::Parser;
use itertools::Itertools;
use log::info;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::{physics::Band, CalfluxError};

/// Print the waveguide band containing a frequency, or the nominal frequency
/// of a band.
#[derive(Parser, Debug)]
pub struct BandArgs {
    /// A frequency [GHz] (e.g. 8.4) or a band name (e.g. Ku).
    #[clap(name = "FREQ_GHZ_OR_BAND")]
    query: String,
}

impl BandArgs {
    pub fn run(&self) -> Result<(), CalfluxError> {
        let answer = look_up(&self.query)?;
        info!("{answer}");
        Ok(())
    }
}

/// The answer to a band query, as a line of text.
fn look_up(query: &str) -> Result<String, BandArgsError> {
    let query = query.trim();
    if let Ok(freq_ghz) = query.parse::<f64>() {
        return match Band::from_frequency(freq_ghz) {
            Some(band) => Ok(format!("{freq_ghz} GHz is in {band} band")),
            None => Err(BandArgsError::NoBand(freq_ghz)),
        };
    }

    let band = Band::iter()
        .find(|b| b.to_string().eq_ignore_ascii_case(query))
        .ok_or_else(|| BandArgsError::UnknownBand(query.to_string()))?;
    Ok(match band.nominal_frequency() {
        Some(f) => format!("{band} band: nominal frequency {f} GHz"),
        None => format!("{band} band: no nominal frequency"),
    })
}

#[derive(Error, Debug)]
pub(crate) enum BandArgsError {
    #[error("{0} GHz is not in any waveguide band")]
    NoBand(f64),

    #[error("'{0}' is neither a frequency nor a known band. Known bands: {}", Band::iter().join(", "))]
    UnknownBand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_up() {
        assert_eq!(look_up("8.4").unwrap(), "8.4 GHz is in X band");
        assert_eq!(look_up(" 14.5 ").unwrap(), "14.5 GHz is in Ku band");
        assert_eq!(look_up("ku").unwrap(), "Ku band: nominal frequency 15 GHz");
        assert_eq!(look_up("V").unwrap(), "V band: no nominal frequency");
        assert!(matches!(look_up("0.3"), Err(BandArgsError::NoBand(_))));
        assert!(matches!(look_up("Z"), Err(BandArgsError::UnknownBand(_))));
    }
}
