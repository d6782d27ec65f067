use crate::constants::{Radian, DPI};

/// Default convergence tolerance on the Kepler residual `E - e·sin(E) - M`.
pub const KEPLER_TOLERANCE: f64 = 1e-10;

/// Default cap on the number of Newton iterations.
pub const KEPLER_MAX_ITERATIONS: usize = 100;

/// Returns the principal value of an angle in radians, restricted to [0, 2π).
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Solve Kepler's equation `E - e·sin(E) = M` for the eccentric anomaly `E`.
///
/// Newton–Raphson iteration starting from `E₀ = M`, with the default tolerance
/// and iteration cap. If the cap is reached before the tolerance is met, the
/// best current estimate is returned rather than an error: the intersection
/// scan consuming this value tolerates a small positional error, so the solver
/// degrades gracefully instead of failing.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: M in radians (normalized internally to [0, 2π))
/// * `eccentricity`: e in [0, 1) (elliptical orbits only)
///
/// Return
/// ------
/// * The eccentric anomaly E in radians.
pub fn solve_kepler(mean_anomaly: Radian, eccentricity: f64) -> Radian {
    solve_kepler_with(
        mean_anomaly,
        eccentricity,
        KEPLER_TOLERANCE,
        KEPLER_MAX_ITERATIONS,
    )
}

/// Same as [`solve_kepler`] with an explicit tolerance and iteration cap.
pub fn solve_kepler_with(
    mean_anomaly: Radian,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Radian {
    let m = principal_angle(mean_anomaly);
    let mut ecc_anomaly = m;

    for _ in 0..max_iterations {
        let residual = ecc_anomaly - eccentricity * ecc_anomaly.sin() - m;
        if residual.abs() <= tolerance {
            break;
        }
        ecc_anomaly -= residual / (1.0 - eccentricity * ecc_anomaly.cos());
    }

    ecc_anomaly
}
