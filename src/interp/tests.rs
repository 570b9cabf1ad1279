// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_no_samples() {
    assert!(matches!(
        estimate_from_samples(&[], 5.0),
        Err(InterpolationError::NoData)
    ));
    assert!(matches!(
        estimate_from_time_series(&[], &[], 59000.0),
        Err(InterpolationError::NoData)
    ));
}

#[test]
fn test_single_sample_is_flat() {
    for at in [0.1, 1.5, 8.0, 100.0] {
        let e = estimate_from_samples(&[(1.5, 15.0)], at).unwrap();
        assert_abs_diff_eq!(e.value, 15.0);
    }
    assert_eq!(
        estimate_from_samples(&[(1.5, 15.0)], 1.5).unwrap().polation,
        Polation::Interpolated
    );
    assert_eq!(
        estimate_from_samples(&[(1.5, 15.0)], 8.0).unwrap().polation,
        Polation::Extrapolated
    );

    let e = estimate_from_time_series(&[59000.0], &[3.2], 60000.0).unwrap();
    assert_abs_diff_eq!(e.value, 3.2);
    assert_eq!(e.polation, Polation::Extrapolated);
}

#[test]
fn test_frequency_fit_uses_all_samples() {
    // These lie exactly on y = 20 - x.
    let samples = [(1.5, 18.5), (5.0, 15.0), (8.1, 11.9), (15.0, 5.0)];
    let e = estimate_from_samples(&samples, 10.0).unwrap();
    assert_abs_diff_eq!(e.value, 10.0, epsilon = 1e-10);
    assert_eq!(e.polation, Polation::Interpolated);

    let e = estimate_from_samples(&samples, 20.0).unwrap();
    assert_abs_diff_eq!(e.value, 0.0, epsilon = 1e-10);
    assert_eq!(e.polation, Polation::Extrapolated);

    // Least squares through all points, not just the neighbours.
    let samples = [(1.0, 1.0), (2.0, 3.0), (3.0, 2.0)];
    let e = estimate_from_samples(&samples, 2.0).unwrap();
    assert_abs_diff_eq!(e.value, 2.0, epsilon = 1e-10);
}

#[test]
fn test_same_abscissae_use_the_mean() {
    let e = estimate_from_samples(&[(5.0, 1.0), (5.0, 3.0)], 6.0).unwrap();
    assert_abs_diff_eq!(e.value, 2.0);
    assert_eq!(e.polation, Polation::Extrapolated);
}

#[test]
fn test_select_window_within_range() {
    let times: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let w = select_window(&times, 10.2).unwrap();
    assert_eq!((w.start, w.end), (6, 14));
    assert_eq!(w.polation, Polation::Interpolated);

    // Clipped at the boundaries.
    let w = select_window(&times, 1.0).unwrap();
    assert_eq!((w.start, w.end), (0, 5));
    let w = select_window(&times, 18.6).unwrap();
    assert_eq!((w.start, w.end), (15, 19));
}

#[test]
fn test_select_window_after_last() {
    let times: Vec<f64> = (0..20).map(|i| i as f64).collect();
    // 3 beyond the last sample, so reach back 3 before it.
    let w = select_window(&times, 22.0).unwrap();
    assert_eq!((w.start, w.end), (16, 19));
    assert_eq!(w.polation, Polation::Extrapolated);

    // Only just beyond the last sample; still use two samples.
    let w = select_window(&times, 19.1).unwrap();
    assert_eq!((w.start, w.end), (18, 19));
}

#[test]
fn test_select_window_before_first() {
    let times: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let w = select_window(&times, -5.0).unwrap();
    assert_eq!((w.start, w.end), (0, 5));
    assert_eq!(w.polation, Polation::Extrapolated);

    let w = select_window(&times, -0.2).unwrap();
    assert_eq!((w.start, w.end), (0, 1));
}

#[test]
fn test_trailing_window_ignores_history() {
    // Two histories that differ wildly except for their last few samples.
    let times_a = [100.0, 200.0, 300.0, 400.0, 500.0, 1000.0, 1010.0, 1020.0, 1030.0];
    let flux_a = [50.0, 1.0, 75.0, 0.5, 30.0, 4.0, 4.2, 4.1, 4.4];
    let times_b = [900.0, 950.0, 1000.0, 1010.0, 1020.0, 1030.0];
    let flux_b = [-10.0, 99.0, 4.0, 4.2, 4.1, 4.4];

    let at = 1050.0;
    let a = estimate_from_time_series(&times_a, &flux_a, at).unwrap();
    let b = estimate_from_time_series(&times_b, &flux_b, at).unwrap();
    assert_abs_diff_eq!(a.value, b.value, epsilon = 1e-10);
    assert_eq!(a.polation, Polation::Extrapolated);

    // The window is 1010..=1030; the slope through those is 0.01 per day.
    assert_abs_diff_eq!(a.value, 4.233333333333333 + 0.01 * 30.0, epsilon = 1e-10);

    // A fit over the whole history would be quite different.
    let full = estimate_from_samples(
        &times_a
            .iter()
            .copied()
            .zip(flux_a.iter().copied())
            .collect::<Vec<_>>(),
        at,
    )
    .unwrap();
    assert!((full.value - a.value).abs() > 1.0);
}

#[test]
fn test_time_series_interpolation() {
    let times = [59000.0, 59010.0, 59020.0, 59030.0];
    let fluxes = [1.0, 2.0, 3.0, 4.0];
    let e = estimate_from_time_series(&times, &fluxes, 59015.0).unwrap();
    assert_abs_diff_eq!(e.value, 2.5, epsilon = 1e-8);
    assert_eq!(e.polation, Polation::Interpolated);
}

#[test]
fn test_length_mismatch() {
    assert!(matches!(
        estimate_from_time_series(&[1.0, 2.0], &[1.0], 1.5),
        Err(InterpolationError::LengthMismatch { xs: 2, ys: 1 })
    ));
}

#[test]
fn test_non_finite_values_are_errors() {
    let is_non_finite = |r: Result<Estimate, InterpolationError>| {
        matches!(r, Err(InterpolationError::Fit(FitError::NonFinite)))
    };
    assert!(is_non_finite(estimate_from_time_series(
        &[59000.0, 59010.0, 59020.0, f64::NAN],
        &[1.0, 2.0, 3.0, 4.0],
        59015.0
    )));
    assert!(is_non_finite(estimate_from_time_series(
        &[59000.0, 59010.0, 59020.0],
        &[1.0, f64::INFINITY, 3.0],
        59015.0
    )));
    assert!(is_non_finite(estimate_from_samples(
        &[(1.5, 15.0), (5.0, 7.48)],
        f64::NAN
    )));
    assert!(is_non_finite(estimate_from_samples(&[(1.5, 15.0)], f64::INFINITY)));
}

#[test]
fn test_combine_polation() {
    use Polation::*;
    assert_eq!(Interpolated.combine(Interpolated), Interpolated);
    assert_eq!(Interpolated.combine(Extrapolated), Extrapolated);
    assert_eq!(Extrapolated.combine(Interpolated), Extrapolated);
    assert_eq!(Interpolated.to_string(), "interpolated");
}
