// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Types for calibrator records and catalogs.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use log::{debug, trace};
use marlu::RADec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{cli::Warn, constants::MM_GHZ, names::normalise_3c};

/// The observing band of a VLA flux-density measurement, labelled by its
/// wavelength in millimetres. When serialised, it looks like "mm7" (for 0.7
/// cm) or "mm200" (for 20 cm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BandLabel {
    wavelength_mm: u32,
}

impl BandLabel {
    pub fn new(wavelength_mm: u32) -> BandLabel {
        BandLabel { wavelength_mm }
    }

    /// The VLA listing specifies wavelengths in cm, e.g. "0.7cm" and "90cm".
    /// `None` is returned if the wavelength doesn't round to a positive
    /// number of millimetres.
    pub fn from_wavelength_cm(wavelength_cm: f64) -> Option<BandLabel> {
        let mm = (wavelength_cm * 10.0).round();
        if mm.is_finite() && mm >= 1.0 && mm <= u32::MAX as f64 {
            Some(BandLabel::new(mm as u32))
        } else {
            None
        }
    }

    pub fn wavelength_mm(self) -> u32 {
        self.wavelength_mm
    }

    /// The centre frequency of this band \[GHz\].
    pub fn freq_ghz(self) -> f64 {
        MM_GHZ / self.wavelength_mm as f64
    }
}

impl std::fmt::Display for BandLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mm{}", self.wavelength_mm)
    }
}

impl std::str::FromStr for BandLabel {
    type Err = BandLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("mm")
            .ok_or_else(|| BandLabelError(s.to_string()))?;
        match digits.parse::<u32>() {
            Ok(mm) if mm > 0 => Ok(BandLabel::new(mm)),
            _ => Err(BandLabelError(s.to_string())),
        }
    }
}

impl TryFrom<String> for BandLabel {
    type Error = BandLabelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BandLabel> for String {
    fn from(b: BandLabel) -> String {
        b.to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a valid band label; expected something like 'mm7' or 'mm200'")]
pub struct BandLabelError(String);

/// A single radio source in a calibrator catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibratorRecord {
    /// The J2000 IAU name without its "J" prefix, e.g. "1331+305". This is the
    /// canonical key of the record.
    pub(crate) jname: String,

    /// The B1950 IAU name without its "B" prefix, e.g. "1328+307".
    pub bname: Option<String>,

    /// The 3C designation, e.g. "3C286".
    pub cat3c: Option<String>,

    /// J2000 position.
    pub radec: RADec,

    /// Flux densities \[Jy\] keyed by band. Not all bands are populated.
    pub fluxes: BTreeMap<BandLabel, f64>,
}

impl CalibratorRecord {
    pub fn new(jname: String, radec: RADec) -> CalibratorRecord {
        CalibratorRecord {
            jname,
            bname: None,
            cat3c: None,
            radec,
            fluxes: BTreeMap::new(),
        }
    }

    pub fn jname(&self) -> &str {
        &self.jname
    }

    /// Get the usable (frequency \[GHz\], flux density \[Jy\]) pairs of this
    /// record, sorted by ascending frequency. Zero and non-finite flux
    /// densities are not usable.
    pub fn flux_samples(&self) -> Vec<(f64, f64)> {
        let mut samples: Vec<(f64, f64)> = self
            .fluxes
            .iter()
            .filter(|(_, &fd)| fd.is_finite() && fd != 0.0)
            .map(|(band, &fd)| (band.freq_ghz(), fd))
            .collect();
        samples.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));
        samples
    }
}

/// A read-only snapshot of calibrator records, along with B1950-name and
/// 3C-designation cross references to J2000 names.
///
/// The record order is the order in which records were supplied; approximate
/// name matching accepts the first matching record in this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    records: IndexMap<String, CalibratorRecord>,
    bnames: IndexMap<String, String>,
    cat3c: IndexMap<String, String>,
}

impl CatalogStore {
    /// Build a catalog from records. If multiple records share a J2000 name,
    /// only the first is kept.
    pub fn new<I: IntoIterator<Item = CalibratorRecord>>(records: I) -> CatalogStore {
        let mut store = CatalogStore::default();
        for record in records {
            if store.records.contains_key(&record.jname) {
                format!(
                    "Calibrator {} appears more than once; ignoring the later entry",
                    record.jname
                )
                .warn();
                continue;
            }

            if let Some(bname) = record.bname.as_ref() {
                trace!("Cross-referencing B{bname} to J{}", record.jname);
                store
                    .bnames
                    .entry(bname.clone())
                    .or_insert_with(|| record.jname.clone());
            }
            if let Some(cat3c) = record.cat3c.as_ref() {
                trace!("Cross-referencing {cat3c} to J{}", record.jname);
                store
                    .cat3c
                    .entry(normalise_3c(cat3c))
                    .or_insert_with(|| record.jname.clone());
            }
            store.records.insert(record.jname.clone(), record);
        }
        debug!(
            "Built a catalog with {} records ({} B names, {} 3C names)",
            store.records.len(),
            store.bnames.len(),
            store.cat3c.len()
        );
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by its J2000 name (without the "J" prefix).
    pub fn get(&self, jname: &str) -> Option<&CalibratorRecord> {
        self.records.get(jname)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalibratorRecord> {
        self.records.values()
    }

    /// All J2000 names in catalog order.
    pub fn jnames(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(|s| s.as_str())
    }

    /// All B1950 names in catalog order.
    pub fn bnames(&self) -> impl Iterator<Item = &str> {
        self.bnames.keys().map(|s| s.as_str())
    }

    /// Look up the J2000 name of a B1950 name (both without prefixes).
    pub fn jname_for_bname(&self, bname: &str) -> Option<&str> {
        self.bnames.get(bname).map(|s| s.as_str())
    }

    /// Look up the J2000 name of a 3C designation. The designation is
    /// normalised first, so "3c 286" and "3C286" are the same.
    pub fn jname_for_3c(&self, cat3c: &str) -> Option<&str> {
        self.cat3c.get(&normalise_3c(cat3c)).map(|s| s.as_str())
    }

    pub fn get_counts(&self) -> CatalogCounts {
        let mut counts = CatalogCounts {
            num_records: self.records.len(),
            num_bnames: self.bnames.len(),
            num_3c: self.cat3c.len(),
            ..Default::default()
        };
        for record in self.records.values() {
            let num_samples = record.flux_samples().len();
            counts.num_flux_samples += num_samples;
            if num_samples == 0 {
                counts.num_without_fluxes += 1;
            }
        }
        counts
    }
}

impl FromIterator<CalibratorRecord> for CatalogStore {
    fn from_iter<I: IntoIterator<Item = CalibratorRecord>>(iter: I) -> Self {
        CatalogStore::new(iter)
    }
}

/// Summary counts of a [`CatalogStore`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogCounts {
    pub num_records: usize,
    pub num_bnames: usize,
    pub num_3c: usize,
    pub num_flux_samples: usize,
    pub num_without_fluxes: usize,
}
