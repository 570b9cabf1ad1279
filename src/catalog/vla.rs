// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing of the VLA calibrator manual listing.
//!
//! Each calibrator occupies a block of lines separated by blank lines. A
//! typical block looks like:
//!
//! ```text
//! 1331+305   J2000  A 13h31m08.287984s  30d30'32.958850"  Aug01  3C286
//! 1328+307   B1950  A 13h28m49.657700s  30d45'58.640000"
//! -----------------------------------------------------
//! BAND        A B C D    FLUX(Jy)    UVMIN(kL)  UVMAX(kL)
//! =====================================================
//!  90cm    P  X S S S      26.00
//!  20cm    L  X P P P      15.00
//! ```
//!
//! The listing is usually saved from a web page, so any HTML tags are removed
//! before each line is interpreted.

use marlu::{sexagesimal::*, RADec};

use log::{debug, trace};
use regex::Regex;

use super::{BandLabel, CalibratorRecord, CatalogStore, IngestError};
use crate::cli::Warn;

lazy_static::lazy_static! {
    static ref HTML_TAG: Regex = Regex::new("<.*?>").expect("HTML tag regex is valid");
}

/// The number of whitespace-separated fields expected before the optional
/// date and alternative-name fields of a J2000 line.
const NUM_J2000_FIELDS: usize = 5;

/// The flux density is in this field of a flux line.
const FLUX_FIELD: usize = 6;

/// Parse a buffer containing a VLA calibrator listing into a [`CatalogStore`].
pub fn parse_vla_listing<T: std::io::BufRead>(buf: &mut T) -> Result<CatalogStore, IngestError> {
    let mut line = String::new();
    let mut line_num: u32 = 0;
    let mut records: Vec<CalibratorRecord> = vec![];
    let mut current: Option<CalibratorRecord> = None;
    // Are we in the flux subsection of a source block?
    let mut in_fluxes = false;

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;
        let stripped = HTML_TAG.replace_all(line.trim_end_matches(['\n', '\r']), "");
        let stripped = stripped.as_ref();

        // A blank line finishes the current source block.
        if stripped.trim().is_empty() {
            if let Some(record) = current.take() {
                records.push(record);
            }
            in_fluxes = false;
            line.clear();
            continue;
        }

        let fields: Vec<&str> = stripped.split_ascii_whitespace().collect();
        match fields.get(1) {
            Some(&"J2000") => {
                if let Some(record) = current.take() {
                    records.push(record);
                }
                current = Some(parse_j2000_line(&fields, line_num)?);
                in_fluxes = false;
            }

            Some(&"B1950") => match current.as_mut() {
                Some(record) => record.bname = Some(fields[0].to_string()),
                None => format!(
                    "VLA listing line {line_num}: Found a B1950 name ({}) outside of a source block",
                    fields[0]
                )
                .warn(),
            },

            _ if stripped.starts_with("--") || stripped.starts_with("BAND") => (),

            _ if stripped.starts_with("==") => in_fluxes = true,

            _ if in_fluxes => match current.as_mut() {
                Some(record) => {
                    if !parse_flux_line(record, &fields, line_num) {
                        in_fluxes = false;
                    }
                }
                None => in_fluxes = false,
            },

            _ => trace!("VLA listing line {line_num}: Ignoring '{}'", stripped.trim()),
        }

        line.clear();
    }

    if let Some(record) = current.take() {
        records.push(record);
    }
    if records.is_empty() {
        return Err(IngestError::NoSources);
    }
    debug!("{} sources processed", records.len());
    Ok(CatalogStore::new(records))
}

/// Parse the first line of a source block, e.g.
///
/// `1331+305   J2000  A 13h31m08.287984s  30d30'32.958850"  Aug01  3C286`
fn parse_j2000_line(fields: &[&str], line_num: u32) -> Result<CalibratorRecord, IngestError> {
    if fields.len() < NUM_J2000_FIELDS {
        return Err(IngestError::IncompleteJ2000Line {
            line_num,
            expected: NUM_J2000_FIELDS,
            got: fields.len(),
        });
    }

    let jname = fields[0].to_string();
    let ra = sexagesimal_hms_string_to_degrees(fields[3]).map_err(|_| IngestError::ParseRa {
        line_num,
        string: fields[3].to_string(),
    })?;
    let dec = parse_vla_dec(fields[4]).ok_or_else(|| IngestError::ParseDec {
        line_num,
        string: fields[4].to_string(),
    })?;

    let mut record = CalibratorRecord::new(jname, RADec::from_degrees(ra, dec));
    // Any alternative name follows the coordinates and the observation date.
    for alt in &fields[NUM_J2000_FIELDS..] {
        if alt.starts_with("3C") {
            record.cat3c = Some(alt.to_string());
        } else {
            trace!("{} has alternate name {alt}", record.jname);
        }
    }
    Ok(record)
}

/// VLA declinations look like `30d30'32.958850"`. The sign is handled here so
/// that declinations like `-00d30'00.0"` keep their sign.
fn parse_vla_dec(s: &str) -> Option<f64> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(u) => (true, u),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let dms = unsigned.replace('\'', "m").replace('"', "s");
    let dec = sexagesimal_dms_string_to_degrees(&dms).ok()?;
    Some(if negative { -dec } else { dec })
}

/// Parse a flux line, e.g. `20cm    L  X P P P      15.00`, into the record.
/// Returns `false` if the line doesn't start with a wavelength, which ends
/// the flux subsection.
fn parse_flux_line(record: &mut CalibratorRecord, fields: &[&str], line_num: u32) -> bool {
    let band = match fields
        .first()
        .and_then(|f| f.strip_suffix("cm"))
        .and_then(|f| f.parse::<f64>().ok())
        .and_then(BandLabel::from_wavelength_cm)
    {
        Some(b) => b,
        None => {
            debug!(
                "VLA listing line {line_num}: Could not parse a wavelength for {}",
                record.jname
            );
            return false;
        }
    };

    match fields.get(FLUX_FIELD).map(|f| f.parse::<f64>()) {
        Some(Ok(fd)) if fd != 0.0 && fd.is_finite() => {
            trace!("{}: {band} = {fd} Jy", record.jname);
            record.fluxes.insert(band, fd);
        }
        Some(Ok(_)) => trace!("{}: {band} has no flux density", record.jname),
        Some(Err(_)) | None => debug!(
            "VLA listing line {line_num}: No flux in band {band} for {}",
            record.jname
        ),
    }
    true
}
