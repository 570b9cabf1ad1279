// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.


use nalgebra::{DMatrix, DVector, SVD};
use thiserror::Error;

/// Fit a polynomial of the given degree to the points (`xs`, `ys`) with
/// least squares. If `weights` is supplied, each residual is multiplied by the
/// corresponding weight before being squared.
///
/// The returned coefficients are in ascending order of power, i.e.
/// `coeffs[0] + coeffs[1] * x + coeffs[2] * x^2 + ...`.
pub(crate) fn polyfit(
    xs: &[f64],
    ys: &[f64],
    weights: Option<&[f64]>,
    degree: usize,
) -> Result<Vec<f64>, FitError> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if let Some(w) = weights {
        if w.len() != xs.len() {
            return Err(FitError::LengthMismatch {
                xs: xs.len(),
                ys: w.len(),
            });
        }
    }
    let all_finite = |v: &[f64]| v.iter().all(|x| x.is_finite());
    if !all_finite(xs) || !all_finite(ys) || !weights.map(all_finite).unwrap_or(true) {
        return Err(FitError::NonFinite);
    }
    let num_coeffs = degree + 1;
    if xs.len() < num_coeffs {
        return Err(FitError::TooFewPoints {
            num_points: xs.len(),
            degree,
        });
    }

    // Vandermonde matrix, with rows scaled by the weights.
    let a = DMatrix::from_fn(xs.len(), num_coeffs, |row, col| {
        let w = weights.map(|w| w[row]).unwrap_or(1.0);
        w * xs[row].powi(col as i32)
    });
    let b = DVector::from_fn(ys.len(), |row, _| {
        let w = weights.map(|w| w[row]).unwrap_or(1.0);
        w * ys[row]
    });

    let svd = SVD::new(a, true, true);
    let coeffs = svd.solve(&b, f64::EPSILON).map_err(FitError::Svd)?;
    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(FitError::NonFinite);
    }
    Ok(coeffs.iter().copied().collect())
}

/// Evaluate a polynomial with coefficients in ascending order of power.
pub(crate) fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Fit a straight line through the points and evaluate it at `at`. The
/// abscissae are shifted so that `at` is the origin before fitting; this keeps
/// the fit well conditioned when the abscissae are large (e.g. MJDs).
pub(crate) fn linear_estimate(xs: &[f64], ys: &[f64], at: f64) -> Result<f64, FitError> {
    if !at.is_finite() {
        return Err(FitError::NonFinite);
    }
    let shifted: Vec<f64> = xs.iter().map(|x| x - at).collect();
    let coeffs = polyfit(&shifted, ys, None, 1)?;
    Ok(coeffs[0])
}

/// Get the index of the element of `values` that is nearest to `target`. If
/// two elements are equally near, the first is used. `None` is returned only
/// if `values` is empty.
pub(crate) fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| {
            let dist = (v - target).abs();
            match best {
                Some((_, best_dist)) if best_dist <= dist => best,
                _ => Some((i, dist)),
            }
        })
        .map(|(i, _)| i)
}

#[derive(Error, Debug)]
pub enum FitError {
    #[error("Cannot fit {xs} abscissae against {ys} ordinates/weights")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("A degree-{degree} fit needs more than {num_points} point(s)")]
    TooFewPoints { num_points: usize, degree: usize },

    #[error("Least-squares solve failed: {0}")]
    Svd(&'static str),

    #[error("Least-squares fit involved non-finite values")]
    NonFinite,
}
