use approx::assert_relative_eq;

use skyfall::constants::{AU, IMPACT_THRESHOLD_KM, SEARCH_HORIZON_DAYS, SIDEREAL_YEAR_DAYS};
use skyfall::intersection::{search_earth_intersection, ApproxDate};
use skyfall::keplerian_element::KeplerianElements;
use skyfall::propagation::position;

#[test]
fn near_miss_minimum_matches_brute_force() {
    // The reported minimum must equal the true minimum of all sampled
    // distances, recomputed here by brute force over the full horizon.
    let elements = KeplerianElements::new(1.2, 0.2, 5.0, 30.0, 60.0, 10.0).unwrap();

    let brute_force_min = (0..SEARCH_HORIZON_DAYS)
        .map(|day| position(&elements, day as f64).norm())
        .fold(f64::INFINITY, f64::min);

    let result = search_earth_intersection(&elements);
    assert!(!result.impact);
    assert!(brute_force_min > IMPACT_THRESHOLD_KM);
    assert_relative_eq!(result.min_distance_km, brute_force_min, max_relative = 1e-12);
}

#[test]
fn earth_like_elements_stay_near_one_au() {
    // Earth's own elements propagated against the origin-fixed Earth model
    // give a closest approach on the order of the orbital radius itself.
    let elements =
        KeplerianElements::new(1.0, 0.0167, 0.00005, -11.26064, 102.94719, 100.46435).unwrap();

    let pos = position(&elements, 0.0);
    assert_relative_eq!(pos.norm(), AU, max_relative = 0.02);

    let result = search_earth_intersection(&elements);
    assert!(!result.impact);
    // The minimum over the horizon can only reach down to the perihelion.
    assert!(result.min_distance_km >= (1.0 - 0.0167) * AU * 0.999);
}

#[test]
fn early_exit_reports_the_chronologically_first_impact() {
    // A sungrazing orbit with perihelion below the threshold, phased so that
    // perihelion passage falls exactly on scan day 7.
    let impact_day = 7.0;
    let mean_anomaly_deg = 360.0 * (1.0 - impact_day / SIDEREAL_YEAR_DAYS);
    let elements = KeplerianElements::new(1.0, 0.99996, 0.0, 0.0, 0.0, mean_anomaly_deg).unwrap();

    let result = search_earth_intersection(&elements);
    assert!(result.impact);
    assert!(result.min_distance_km <= IMPACT_THRESHOLD_KM);
    assert_eq!(result.date, ApproxDate::from_elapsed_days(7));
}

#[test]
fn sub_point_coordinates_follow_the_position_vector() {
    let elements = KeplerianElements::new(1.3, 0.4, 20.0, 75.0, 120.0, 200.0).unwrap();
    let result = search_earth_intersection(&elements);

    // Recover the day of the reported minimum by brute force and check the
    // recorded sub-point against the position at that day.
    let min_day = (0..SEARCH_HORIZON_DAYS)
        .min_by(|&a, &b| {
            position(&elements, a as f64)
                .norm()
                .total_cmp(&position(&elements, b as f64).norm())
        })
        .unwrap();

    let pos = position(&elements, min_day as f64);
    let distance = pos.norm();
    assert_relative_eq!(
        result.latitude_deg,
        (pos.z / distance).asin().to_degrees(),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        result.longitude_deg,
        pos.y.atan2(pos.x).to_degrees(),
        epsilon = 1e-9
    );
}
