// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Approximate planetary positions.
//!
//! Heliocentric positions are derived from the "approximate positions of the
//! planets" Keplerian elements published by JPL (E. M. Standish), valid from
//! 1800 AD to 2050 AD. The positions are good to a few arcminutes, which is
//! more than enough for the distances and phases needed for flux densities.

use hifitime::Epoch;
use nalgebra::Vector3;

use super::Planet;
use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Keplerian elements and their rates per Julian century. Each pair is (value
/// at J2000, rate).
struct Elements {
    /// Semi-major axis \[AU\]
    a: [f64; 2],
    /// Eccentricity
    e: [f64; 2],
    /// Inclination \[degrees\]
    i: [f64; 2],
    /// Mean longitude \[degrees\]
    l: [f64; 2],
    /// Longitude of perihelion \[degrees\]
    long_peri: [f64; 2],
    /// Longitude of the ascending node \[degrees\]
    long_node: [f64; 2],
}

const MERCURY: Elements = Elements {
    a: [0.38709927, 0.00000037],
    e: [0.20563593, 0.00001906],
    i: [7.00497902, -0.00594749],
    l: [252.25032350, 149472.67411175],
    long_peri: [77.45779628, 0.16047689],
    long_node: [48.33076593, -0.12534081],
};

const VENUS: Elements = Elements {
    a: [0.72333566, 0.00000390],
    e: [0.00677672, -0.00004107],
    i: [3.39467605, -0.00078890],
    l: [181.97909950, 58517.81538729],
    long_peri: [131.60246718, 0.00268329],
    long_node: [76.67984255, -0.27769418],
};

/// The Earth-Moon barycentre.
const EARTH: Elements = Elements {
    a: [1.00000261, 0.00000562],
    e: [0.01671123, -0.00004392],
    i: [-0.00001531, -0.01294668],
    l: [100.46457166, 35999.37244981],
    long_peri: [102.93768193, 0.32327364],
    long_node: [0.0, 0.0],
};

const MARS: Elements = Elements {
    a: [1.52371034, 0.00001847],
    e: [0.09339410, 0.00007882],
    i: [1.84969142, -0.00813131],
    l: [-4.55343205, 19140.30268499],
    long_peri: [-23.94362959, 0.44441088],
    long_node: [49.55953891, -0.29257343],
};

const JUPITER: Elements = Elements {
    a: [5.20288700, -0.00011607],
    e: [0.04838624, -0.00013253],
    i: [1.30439695, -0.00183714],
    l: [34.39644051, 3034.74612775],
    long_peri: [14.72847983, 0.21252668],
    long_node: [100.47390909, 0.20469106],
};

const SATURN: Elements = Elements {
    a: [9.53667594, -0.00125060],
    e: [0.05386179, -0.00050991],
    i: [2.48599187, 0.00193609],
    l: [49.95424423, 1222.49362201],
    long_peri: [92.59887831, -0.41897216],
    long_node: [113.66242448, -0.28867794],
};

/// The tolerance of the solution to Kepler's equation \[radians\].
const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITERATIONS: usize = 50;

/// Where a planet is relative to the Sun and the Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetGeometry {
    /// \[AU\]. Zero for the Sun.
    pub sun_distance_au: f64,

    /// \[AU\]
    pub earth_distance_au: f64,

    /// The fraction of the disk that is illuminated as seen from the Earth
    /// (0 to 1). Always 1 for the Sun.
    pub illuminated_fraction: f64,
}

impl Planet {
    /// Get the [`PlanetGeometry`] of this body at an epoch.
    pub fn geometry(self, epoch: Epoch) -> PlanetGeometry {
        let t = (epoch.to_jde_tdb_days() - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
        let earth = EARTH.heliocentric(t);
        let elements = match self {
            Planet::Sun => {
                return PlanetGeometry {
                    sun_distance_au: 0.0,
                    earth_distance_au: earth.norm(),
                    illuminated_fraction: 1.0,
                }
            }
            Planet::Mercury => &MERCURY,
            Planet::Venus => &VENUS,
            Planet::Mars => &MARS,
            Planet::Jupiter => &JUPITER,
            Planet::Saturn => &SATURN,
        };

        let planet = elements.heliocentric(t);
        let r = planet.norm();
        let delta = (planet - earth).norm();
        let big_r = earth.norm();
        // The phase angle (Sun-planet-Earth) from the law of cosines.
        let cos_phase =
            ((r * r + delta * delta - big_r * big_r) / (2.0 * r * delta)).clamp(-1.0, 1.0);
        PlanetGeometry {
            sun_distance_au: r,
            earth_distance_au: delta,
            illuminated_fraction: (1.0 + cos_phase) / 2.0,
        }
    }
}

impl Elements {
    /// Heliocentric ecliptic (J2000) coordinates \[AU\] at `t` Julian
    /// centuries (TDB) since J2000.
    fn heliocentric(&self, t: f64) -> Vector3<f64> {
        let at = |pair: [f64; 2]| pair[0] + pair[1] * t;
        let a = at(self.a);
        let e = at(self.e);
        let i = at(self.i).to_radians();
        let l = at(self.l);
        let long_peri = at(self.long_peri);
        let long_node = at(self.long_node);

        let arg_peri = (long_peri - long_node).to_radians();
        let node = long_node.to_radians();
        let m = (l - long_peri).to_radians();
        // Keep the mean anomaly within [-pi, pi].
        let m = m.sin().atan2(m.cos());
        let ecc_anomaly = solve_kepler(m, e);

        // Position in the orbital plane, x towards perihelion.
        let x_orb = a * (ecc_anomaly.cos() - e);
        let y_orb = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

        let (sin_w, cos_w) = arg_peri.sin_cos();
        let (sin_o, cos_o) = node.sin_cos();
        let (sin_i, cos_i) = i.sin_cos();
        Vector3::new(
            (cos_w * cos_o - sin_w * sin_o * cos_i) * x_orb
                + (-sin_w * cos_o - cos_w * sin_o * cos_i) * y_orb,
            (cos_w * sin_o + sin_w * cos_o * cos_i) * x_orb
                + (-sin_w * sin_o + cos_w * cos_o * cos_i) * y_orb,
            (sin_w * sin_i) * x_orb + (cos_w * sin_i) * y_orb,
        )
    }
}

/// Solve Kepler's equation `M = E - e sin E` for the eccentric anomaly `E`
/// with Newton's method. All angles are in radians.
pub(super) fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly)
            / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    ecc_anomaly
}
