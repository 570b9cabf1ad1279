// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Resolving the flux density of a calibrator by name, frequency and time.
//!
//! The first of these to succeed is used:
//!
//! 1. Planets (case insensitive) use their brightness-temperature models.
//! 2. Catalogued sources (3C designations, J2000 and B1950 IAU names) use
//!    their monitoring time series, if they have one, otherwise their static
//!    multi-band flux densities.
//!
//! Every estimate carries a [`Provenance`], and catalog-derived estimates also
//! say whether they were interpolated or extrapolated.

mod error;

pub use error::ResolveError;

use std::{path::Path, sync::Arc};

use hifitime::Epoch;
use log::{debug, trace};
use serde::Serialize;

use crate::{
    catalog::{read_catalog_file, CalibratorRecord, CatalogStore},
    interp::{estimate_from_samples, Estimate, Polation},
    names::{resolve_kind, SourceNameKind},
    planets::Planet,
    timeseries::TimeSeriesSource,
};

/// Where a flux density came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display, strum_macros::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Provenance {
    /// A planet's brightness-temperature model.
    Planet,

    /// The multi-band flux densities of a catalogued source.
    CatalogStatic,

    /// The monitoring time series of a catalogued (variable) source.
    CatalogVariable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FluxEstimate {
    /// \[Jy\]
    pub flux_jy: f64,

    pub provenance: Provenance,

    /// Whether the estimate lies within the samples it came from. Planet
    /// models have no samples, so this is `None` for planets.
    pub polation: Option<Polation>,

    /// The name of the source that was used, e.g. "Jupiter" or "1331+305".
    pub canonical_name: String,
}

/// Resolves flux densities of calibrators. The catalog snapshot is shared and
/// never modified; to use a new snapshot, build a new resolver.
pub struct CalibratorFluxResolver {
    catalog: Arc<CatalogStore>,
    timeseries: Option<Box<dyn TimeSeriesSource>>,
}

impl CalibratorFluxResolver {
    pub fn new(catalog: Arc<CatalogStore>) -> CalibratorFluxResolver {
        CalibratorFluxResolver {
            catalog,
            timeseries: None,
        }
    }

    /// Create a resolver from a catalog snapshot file. Any problem reading the
    /// snapshot is reported as [`ResolveError::CatalogUnavailable`].
    pub fn from_catalog_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<CalibratorFluxResolver, ResolveError> {
        let catalog = read_catalog_file(path)?;
        Ok(CalibratorFluxResolver::new(Arc::new(catalog)))
    }

    /// Use monitoring time series for variable sources.
    pub fn with_timeseries(
        mut self,
        source: Box<dyn TimeSeriesSource>,
    ) -> CalibratorFluxResolver {
        self.timeseries = Some(source);
        self
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Get the flux density of a source at a frequency \[GHz\] and epoch.
    pub fn resolve(
        &self,
        name: &str,
        freq_ghz: f64,
        epoch: Epoch,
    ) -> Result<FluxEstimate, ResolveError> {
        if !freq_ghz.is_finite() || freq_ghz <= 0.0 {
            return Err(ResolveError::InvalidFrequency(freq_ghz));
        }
        let kind = SourceNameKind::classify(name);
        debug!("'{name}' is classified as {kind:?}");
        if let SourceNameKind::Planet(planet) = kind {
            return Ok(resolve_planet(planet, freq_ghz, epoch));
        }

        let resolved = resolve_kind(&self.catalog, &kind)?;
        let record = self
            .catalog
            .get(&resolved.jname)
            .ok_or_else(|| ResolveError::UnresolvedSource(name.to_string()))?;
        debug!(
            "'{name}' resolved to J{} via {}",
            record.jname(),
            resolved.display_matched()
        );

        let (estimate, provenance) = match self.variable_estimate(record, freq_ghz, epoch)? {
            Some(e) => (e, Provenance::CatalogVariable),
            None => {
                let samples = record.flux_samples();
                trace!("{} has {} flux samples", record.jname(), samples.len());
                let e = estimate_from_samples(&samples, freq_ghz)
                    .map_err(|e| ResolveError::from_interpolation(record.jname(), e))?;
                (e, Provenance::CatalogStatic)
            }
        };

        Ok(FluxEstimate {
            flux_jy: estimate.value,
            provenance,
            polation: Some(estimate.polation),
            canonical_name: record.jname().to_string(),
        })
    }

    /// Estimate from a time series, if the source has one. B1950 names are
    /// tried before J2000 names, as monitoring programmes used B1950 names.
    fn variable_estimate(
        &self,
        record: &CalibratorRecord,
        freq_ghz: f64,
        epoch: Epoch,
    ) -> Result<Option<Estimate>, ResolveError> {
        let source = match self.timeseries.as_ref() {
            Some(s) => s,
            None => return Ok(None),
        };

        for name in record.bname.iter().map(|s| s.as_str()).chain([record.jname()]) {
            if let Some(ts) = source.load_timeseries(name)? {
                debug!("Using the time series of {name}");
                return ts
                    .estimate(freq_ghz, epoch)
                    .map(Some)
                    .map_err(|e| ResolveError::from_interpolation(record.jname(), e));
            }
        }
        Ok(None)
    }
}

fn resolve_planet(planet: Planet, freq_ghz: f64, epoch: Epoch) -> FluxEstimate {
    let flux = planet.flux_density(freq_ghz, epoch);
    FluxEstimate {
        flux_jy: flux.flux_jy,
        provenance: Provenance::Planet,
        polation: None,
        canonical_name: planet.to_string(),
    }
}
