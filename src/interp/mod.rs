// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Estimating flux densities between (and beyond) samples.
//!
//! Samples along the frequency axis are few (a handful of bands), so a single
//! straight line is fitted through all of them. Time series can be long and
//! variable, so only a window of samples near the query time is fitted.

mod error;
#[cfg(test)]
mod tests;

pub use error::InterpolationError;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    constants::TIME_SERIES_HALF_WINDOW,
    math::{linear_estimate, nearest_index, FitError},
};

/// Whether an estimate lies inside the range of the samples it came from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Polation {
    Interpolated,
    Extrapolated,
}

impl Polation {
    fn from_range(min: f64, max: f64, at: f64) -> Polation {
        if (min..=max).contains(&at) {
            Polation::Interpolated
        } else {
            Polation::Extrapolated
        }
    }

    /// Combine the confidence of estimates made along different axes. An
    /// estimate is only interpolated if it was interpolated along every axis.
    pub fn combine(self, other: Polation) -> Polation {
        match (self, other) {
            (Polation::Interpolated, Polation::Interpolated) => Polation::Interpolated,
            _ => Polation::Extrapolated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub value: f64,
    pub polation: Polation,
}

/// Estimate a value at `at` from (x, y) samples, e.g. (frequency \[GHz\], flux
/// density \[Jy\]) pairs. All of the samples are used in a single linear fit.
///
/// - With no samples, [`InterpolationError::NoData`] is returned.
/// - With one sample, its value is returned unchanged.
/// - If all samples share the same abscissa, their mean is returned.
pub fn estimate_from_samples(
    samples: &[(f64, f64)],
    at: f64,
) -> Result<Estimate, InterpolationError> {
    if samples.is_empty() {
        return Err(InterpolationError::NoData);
    }
    let (xs, ys): (Vec<f64>, Vec<f64>) = samples.iter().copied().unzip();
    fit_at(&xs, &ys, at)
}

/// An inclusive range of sample indices to use in a fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    pub start: usize,
    pub end: usize,
    pub polation: Polation,
}

/// Select the samples of a time series (ascending `times`) used to estimate
/// a value at `at`.
///
/// - After the last sample, the window reaches back from the last sample by
///   as far as `at` is beyond it (and always contains at least two samples).
/// - Before the first sample, the window reaches forward from the first
///   sample in the same way.
/// - Otherwise the window is centred on the nearest sample, with up to
///   [`TIME_SERIES_HALF_WINDOW`] samples on either side.
///
/// `None` is returned only if there are no samples.
pub fn select_window(times: &[f64], at: f64) -> Option<SampleWindow> {
    let first = *times.first()?;
    let last = *times.last()?;
    let n = times.len();
    if n == 1 {
        return Some(SampleWindow {
            start: 0,
            end: 0,
            polation: Polation::from_range(first, last, at),
        });
    }

    let window = if at > last {
        let delta = at - last;
        let start = nearest_index(times, last - delta)?.min(n - 2);
        SampleWindow {
            start,
            end: n - 1,
            polation: Polation::Extrapolated,
        }
    } else if at < first {
        let delta = first - at;
        let end = nearest_index(times, first + delta)?.max(1);
        SampleWindow {
            start: 0,
            end,
            polation: Polation::Extrapolated,
        }
    } else {
        let nearest = nearest_index(times, at)?;
        SampleWindow {
            start: nearest.saturating_sub(TIME_SERIES_HALF_WINDOW),
            end: (nearest + TIME_SERIES_HALF_WINDOW).min(n - 1),
            polation: Polation::Interpolated,
        }
    };
    debug!(
        "Using time samples {}..={} of {n} ({})",
        window.start, window.end, window.polation
    );
    Some(window)
}

/// Estimate a value of a time series at `at` by fitting a straight line
/// through the window chosen by [`select_window`].
pub fn estimate_from_time_series(
    times: &[f64],
    values: &[f64],
    at: f64,
) -> Result<Estimate, InterpolationError> {
    if times.len() != values.len() {
        return Err(InterpolationError::LengthMismatch {
            xs: times.len(),
            ys: values.len(),
        });
    }
    let window = select_window(times, at).ok_or(InterpolationError::NoData)?;
    let range = window.start..=window.end;
    let mut estimate = fit_at(&times[range.clone()], &values[range], at)?;
    // A window of a single sample reports its own confidence, but a fit
    // within a window is only as good as the window's position.
    estimate.polation = estimate.polation.combine(window.polation);
    Ok(estimate)
}

/// Fit a line through the points and evaluate it at `at`, degrading to a flat
/// value if the points can't support a line.
fn fit_at(xs: &[f64], ys: &[f64], at: f64) -> Result<Estimate, InterpolationError> {
    if !at.is_finite() || xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(FitError::NonFinite.into());
    }
    let (min, max) = xs
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &x| {
            (min.min(x), max.max(x))
        });
    let polation = Polation::from_range(min, max, at);

    let value = match ys {
        [] => return Err(InterpolationError::NoData),
        [y] => *y,
        _ if min == max => ys.iter().sum::<f64>() / ys.len() as f64,
        _ => linear_estimate(xs, ys, at)?,
    };
    trace!(
        "Estimated {value} at {at} from {} samples ({polation})",
        xs.len()
    );
    Ok(Estimate { value, polation })
}
