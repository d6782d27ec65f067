//! # Two-body heliocentric propagation
//!
//! Given a set of [`KeplerianElements`] and an elapsed time in days since the
//! element epoch, this module returns the body's heliocentric **position** (km)
//! and **velocity** (km/s) in the ecliptic frame.
//!
//! ## Algorithm
//!
//! 1. Convert angles to radians and the semi-major axis to kilometers.
//! 2. Orbital period from the AU-based form of Kepler's third law
//!    (`P = 365.256363 · a^1.5` days, see [`crate::constants::SIDEREAL_YEAR_DAYS`]).
//! 3. Mean anomaly at the query time, normalized to [0, 2π).
//! 4. Eccentric anomaly via the Newton solver in [`crate::kepler`].
//! 5. True anomaly from the half-angle identity, orbital radius `r = a(1 − e·cos E)`.
//! 6. Perifocal coordinates rotated into the ecliptic frame by the 3-1-3 Euler
//!    composition `R₃(Ω)·R₁(i)·R₃(ω)`.
//!
//! Both operations are pure: malformed elements are rejected upstream by
//! [`KeplerianElements::new`], so nothing here can fail.

use nalgebra::{Rotation3, Vector3};

use crate::constants::{Kilometer, Radian, AU, DPI, SECONDS_PER_DAY, SIDEREAL_YEAR_DAYS};
use crate::kepler::{principal_angle, solve_kepler};
use crate::keplerian_element::KeplerianElements;

/// Intermediate anomaly state shared by the position and velocity paths.
struct OrbitState {
    /// Semi-major axis in km
    a_km: Kilometer,
    /// Eccentricity
    e: f64,
    /// Mean motion in rad/day
    mean_motion: f64,
    /// Eccentric anomaly at the query time
    ecc_anomaly: Radian,
}

impl OrbitState {
    fn at(elements: &KeplerianElements, elapsed_days: f64) -> Self {
        let a_au = elements.semi_major_axis;
        let e = elements.eccentricity;

        let period_days = SIDEREAL_YEAR_DAYS * a_au.powf(1.5);
        let mean_motion = DPI / period_days;

        let m0 = elements.mean_anomaly.to_radians();
        let mean_anomaly = principal_angle(m0 + mean_motion * elapsed_days);
        let ecc_anomaly = solve_kepler(mean_anomaly, e);

        OrbitState {
            a_km: a_au * AU,
            e,
            mean_motion,
            ecc_anomaly,
        }
    }

    /// Orbital radius `r = a(1 − e·cos E)` in km.
    fn radius(&self) -> Kilometer {
        self.a_km * (1.0 - self.e * self.ecc_anomaly.cos())
    }
}

/// Rotation from the perifocal frame into the heliocentric ecliptic frame.
///
/// The standard 3-1-3 Euler sequence: node (Ω) about z, inclination about x,
/// argument of perihelion (ω) about z.
fn perifocal_to_ecliptic(elements: &KeplerianElements) -> Rotation3<f64> {
    let node = elements.ascending_node_longitude.to_radians();
    let incl = elements.inclination.to_radians();
    let peri = elements.perihelion_argument.to_radians();

    Rotation3::from_axis_angle(&Vector3::z_axis(), node)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), incl)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), peri)
}

/// Heliocentric ecliptic position of the body, in kilometers.
///
/// Arguments
/// ---------
/// * `elements`: validated orbital elements
/// * `elapsed_days`: time since the element epoch, in days
///
/// Return
/// ------
/// * Position vector in km, heliocentric ecliptic frame.
pub fn position(elements: &KeplerianElements, elapsed_days: f64) -> Vector3<f64> {
    let state = OrbitState::at(elements, elapsed_days);
    let e = state.e;
    let half_e = state.ecc_anomaly / 2.0;

    let true_anomaly = 2.0 * ((1.0 + e).sqrt() * half_e.sin()).atan2((1.0 - e).sqrt() * half_e.cos());
    let r = state.radius();

    let perifocal = Vector3::new(r * true_anomaly.cos(), r * true_anomaly.sin(), 0.0);
    perifocal_to_ecliptic(elements) * perifocal
}

/// Heliocentric ecliptic velocity of the body, in km/s.
///
/// The perifocal rates `(−n·a²/r·sin E, n·a²/r·√(1−e²)·cos E)` are rotated with
/// the same matrix as the position, then converted from km/day to km/s.
///
/// Arguments
/// ---------
/// * `elements`: validated orbital elements
/// * `elapsed_days`: time since the element epoch, in days
///
/// Return
/// ------
/// * Velocity vector in km/s, heliocentric ecliptic frame.
pub fn velocity(elements: &KeplerianElements, elapsed_days: f64) -> Vector3<f64> {
    let state = OrbitState::at(elements, elapsed_days);
    let e = state.e;

    // km/day
    let rate = state.mean_motion * state.a_km * state.a_km / state.radius();
    let perifocal = Vector3::new(
        -rate * state.ecc_anomaly.sin(),
        rate * (1.0 - e * e).sqrt() * state.ecc_anomaly.cos(),
        0.0,
    );

    (perifocal_to_ecliptic(elements) * perifocal) / SECONDS_PER_DAY
}

#[cfg(test)]
mod propagation_test {
    use super::*;
    use approx::assert_relative_eq;

    fn earth_like() -> KeplerianElements {
        KeplerianElements::new(1.0, 0.0167, 0.00005, -11.26064, 102.94719, 100.46435).unwrap()
    }

    #[test]
    fn test_circular_orbit_constant_radius() {
        let circular = KeplerianElements::new(1.5, 0.0, 10.0, 45.0, 60.0, 0.0).unwrap();
        let expected = 1.5 * AU;
        for day in [0.0, 17.0, 100.0, 365.0, 4321.5] {
            assert_relative_eq!(
                position(&circular, day).norm(),
                expected,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_earth_like_orbit_near_one_au() {
        // Earth's own elements must reproduce a near-circular, near-ecliptic
        // orbit of radius ≈ 1 AU.
        let elements = earth_like();
        let pos = position(&elements, 0.0);
        assert_relative_eq!(pos.norm(), AU, max_relative = 0.02);

        // Near-ecliptic: out-of-plane component is negligible.
        assert!(pos.z.abs() / pos.norm() < 1e-3);
    }

    #[test]
    fn test_circular_orbit_speed() {
        // A circular 1 AU orbit moves at ≈ 29.78 km/s.
        let circular = KeplerianElements::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
        let speed = velocity(&circular, 0.0).norm();
        assert_relative_eq!(speed, 29.78, max_relative = 1e-3);
    }

    #[test]
    fn test_velocity_tangent_to_circular_orbit() {
        // For e = 0 the velocity is orthogonal to the radius vector.
        let circular = KeplerianElements::new(1.0, 0.0, 12.0, 80.0, 30.0, 45.0).unwrap();
        for day in [0.0, 50.0, 200.0] {
            let pos = position(&circular, day);
            let vel = velocity(&circular, day);
            let cosine = pos.dot(&vel) / (pos.norm() * vel.norm());
            assert!(cosine.abs() < 1e-8, "cosine {cosine} at day {day}");
        }
    }

    #[test]
    fn test_rotation_matches_closed_form() {
        // The nalgebra rotation composition must reproduce the classical
        // closed-form rotated expressions.
        let elements = KeplerianElements::new(1.3, 0.25, 7.0, 48.3, 29.1, 10.0).unwrap();
        let node = elements.ascending_node_longitude.to_radians();
        let incl = elements.inclination.to_radians();
        let peri = elements.perihelion_argument.to_radians();

        let (x0, y0) = (0.7, -0.4);
        let rotated = perifocal_to_ecliptic(&elements) * Vector3::new(x0, y0, 0.0);

        let (cn, sn) = (node.cos(), node.sin());
        let (cw, sw) = (peri.cos(), peri.sin());
        let (ci, si) = (incl.cos(), incl.sin());

        let x = x0 * (cn * cw - sn * sw * ci) - y0 * (cn * sw + sn * cw * ci);
        let y = x0 * (sn * cw + cn * sw * ci) + y0 * (cn * cw * ci - sn * sw);
        let z = x0 * (sw * si) + y0 * (cw * si);

        assert_relative_eq!(rotated.x, x, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, y, epsilon = 1e-12);
        assert_relative_eq!(rotated.z, z, epsilon = 1e-12);
    }

    #[test]
    fn test_period_closes_the_orbit() {
        let elements = KeplerianElements::new(2.0, 0.3, 15.0, 100.0, 200.0, 50.0).unwrap();
        let period_days = SIDEREAL_YEAR_DAYS * 2.0_f64.powf(1.5);
        let start = position(&elements, 0.0);
        let after_period = position(&elements, period_days);
        assert_relative_eq!((start - after_period).norm() / start.norm(), 0.0, epsilon = 1e-6);
    }
}
