// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flux-density monitoring of variable sources.
//!
//! Some calibrators are variable, and monitoring programmes (e.g. the
//! University of Michigan Radio Astronomy Observatory, UMRAO) sampled their
//! flux densities over decades at a few frequencies. A [`TimeSeries`] holds
//! these samples per frequency [`Channel`].

mod umrao;

pub use umrao::{parse_umrao_table, UmraoDirectory};

use std::collections::HashMap;

use hifitime::Epoch;
use log::debug;
use vec1::Vec1;

use crate::{
    catalog::CatalogError,
    interp::{estimate_from_samples, estimate_from_time_series, Estimate, InterpolationError},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxSample {
    /// Modified Julian date (UTC) of the measurement \[days\]
    pub mjd: f64,

    /// \[Jy\]
    pub flux_jy: f64,

    /// \[Jy\]
    pub sigma_jy: f64,
}

/// Samples at a single frequency, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    freq_ghz: f64,
    samples: Vec1<FluxSample>,
}

impl Channel {
    /// Create a channel. The samples are sorted chronologically. `None` is
    /// returned if there are no samples.
    pub fn new(freq_ghz: f64, mut samples: Vec<FluxSample>) -> Option<Channel> {
        samples.sort_by(|a, b| a.mjd.total_cmp(&b.mjd));
        Vec1::try_from_vec(samples)
            .ok()
            .map(|samples| Channel { freq_ghz, samples })
    }

    /// \[GHz\]
    pub fn freq_ghz(&self) -> f64 {
        self.freq_ghz
    }

    pub fn samples(&self) -> &[FluxSample] {
        &self.samples
    }

    /// Estimate the flux density of this channel at an MJD.
    pub fn estimate(&self, mjd: f64) -> Result<Estimate, InterpolationError> {
        let (times, fluxes): (Vec<f64>, Vec<f64>) =
            self.samples.iter().map(|s| (s.mjd, s.flux_jy)).unzip();
        estimate_from_time_series(&times, &fluxes, mjd)
    }
}

/// Per-frequency time series of a single source, channels in ascending
/// frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    channels: Vec<Channel>,
}

impl TimeSeries {
    pub fn new(mut channels: Vec<Channel>) -> TimeSeries {
        channels.sort_by(|a, b| a.freq_ghz.total_cmp(&b.freq_ghz));
        TimeSeries { channels }
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn num_samples(&self) -> usize {
        self.channels.iter().map(|c| c.samples.len()).sum()
    }

    /// Estimate the flux density \[Jy\] at a frequency \[GHz\] and time. Each
    /// channel is first estimated at the requested time, then a line is
    /// fitted through the channel estimates in frequency.
    pub fn estimate(&self, freq_ghz: f64, epoch: Epoch) -> Result<Estimate, InterpolationError> {
        let mjd = epoch.to_mjd_utc_days();
        let mut per_channel = Vec::with_capacity(self.channels.len());
        let mut polation = None;
        for channel in &self.channels {
            let e = channel.estimate(mjd)?;
            debug!(
                "{} GHz at MJD {mjd}: {} Jy ({})",
                channel.freq_ghz, e.value, e.polation
            );
            per_channel.push((channel.freq_ghz, e.value));
            polation = Some(match polation {
                Some(p) => e.polation.combine(p),
                None => e.polation,
            });
        }

        let mut estimate = estimate_from_samples(&per_channel, freq_ghz)?;
        if let Some(p) = polation {
            estimate.polation = estimate.polation.combine(p);
        }
        Ok(estimate)
    }
}

/// Something that can provide the time series of variable sources.
pub trait TimeSeriesSource: Send + Sync {
    /// Get the time series of a source by name (a B1950 or J2000 name without
    /// prefix). `Ok(None)` means that the source is not monitored.
    fn load_timeseries(&self, name: &str) -> Result<Option<TimeSeries>, CatalogError>;
}

impl TimeSeriesSource for HashMap<String, TimeSeries> {
    fn load_timeseries(&self, name: &str) -> Result<Option<TimeSeries>, CatalogError> {
        Ok(self.get(name).cloned())
    }
}
