// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;
use hifitime::Epoch;

use calflux::{
    interp::estimate_from_time_series, names::match_iau_name, CalibratorFluxResolver,
    CatalogStore,
};

fn name_matching(c: &mut Criterion) {
    // A grid of keys sharing the right ascension of the query, so that every
    // key's declination is compared.
    let keys: Vec<String> = (0..1000)
        .map(|i| format!("1331+{:03}", (i * 7) % 1000))
        .collect();
    let key_refs: Vec<&str> = keys.iter().map(|s| s.as_str()).collect();

    c.bench_function("match truncated IAU name", |b| {
        b.iter(|| match_iau_name(black_box("1331+99"), key_refs.iter().copied()))
    });
    c.bench_function("match over-precise IAU name", |b| {
        b.iter(|| match_iau_name(black_box("1331+9990"), key_refs.iter().copied()))
    });
}

fn time_series(c: &mut Criterion) {
    let times: Vec<f64> = (0..10_000).map(|i| 50_000.0 + i as f64 * 0.9).collect();
    let values: Vec<f64> = times.iter().map(|t| (t * 0.01).sin() + 5.0).collect();

    c.bench_function("windowed extrapolation", |b| {
        b.iter(|| estimate_from_time_series(&times, &values, black_box(59_100.0)))
    });
    c.bench_function("windowed interpolation", |b| {
        b.iter(|| estimate_from_time_series(&times, &values, black_box(54_321.3)))
    });
}

fn planets(c: &mut Criterion) {
    let resolver = CalibratorFluxResolver::new(CatalogStore::default().into());
    let epoch = Epoch::from_gregorian_utc_at_midnight(2020, 1, 1);
    c.bench_function("Venus flux density", |b| {
        b.iter(|| resolver.resolve(black_box("Venus"), 22.0, epoch))
    });
}

criterion_group!(benches, name_matching, time_series, planets);
criterion_main!(benches);
