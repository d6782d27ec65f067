//! # Earth-intersection search
//!
//! A bounded forward scan of a body's heliocentric trajectory that reports the
//! **closest approach to Earth** over a ~100 year horizon, flagging an impact
//! when the distance ever falls at or below the impact threshold
//! ([`IMPACT_THRESHOLD_KM`]: Earth mean radius + 200 km atmospheric buffer).
//!
//! Earth is treated as stationary at the coordinate origin for this search, a
//! deliberate simplification: its own orbit is not propagated during the scan.
//!
//! The scan walks the horizon in 1-day steps, in increasing chronological
//! order, so the early exit on the first threshold breach corresponds to the
//! chronologically first impact. A scan that completes without reaching the
//! threshold is a normal, successful result: a near-miss report carrying the
//! closest approach ever recorded.

use serde::Serialize;

use crate::constants::{
    Degree, Kilometer, KmPerSec, IMPACT_THRESHOLD_KM, SEARCH_EPOCH_YEAR, SEARCH_HORIZON_DAYS,
};
use crate::keplerian_element::KeplerianElements;
use crate::propagation::{position, velocity};

/// Approximate calendar date of a scan day.
///
/// Derived from the fixed scan epoch ([`SEARCH_EPOCH_YEAR`]-01-01) with
/// simplified 365-day-year / 30-day-month arithmetic. This is **not**
/// calendar-accurate (leap years and variable month lengths are ignored) and
/// drifts by several days over a multi-year horizon; it is kept as an explicit
/// approximation of the impact date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApproxDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl ApproxDate {
    /// Date of `elapsed_days` days after the scan epoch.
    pub fn from_elapsed_days(elapsed_days: u32) -> Self {
        let year = SEARCH_EPOCH_YEAR + (elapsed_days / 365) as i32;
        let day_of_year = elapsed_days % 365;
        // Days 360..364 would otherwise spill into a thirteenth month.
        let month = (day_of_year / 30 + 1).min(12);
        let day = day_of_year % 30 + 1;

        ApproxDate { year, month, day }
    }
}

impl std::fmt::Display for ApproxDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Outcome of one Earth-intersection scan.
///
/// Produced once per search call and immutable thereafter. When `impact` is
/// false the remaining fields describe the closest approach over the full
/// horizon; when true, the moment of the first threshold breach.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntersectionResult {
    /// True when the minimum distance fell at or below the impact threshold.
    pub impact: bool,
    /// Minimum Earth distance reached during the scan, in km.
    pub min_distance_km: Kilometer,
    /// Approximate calendar date of the closest approach / impact.
    pub date: ApproxDate,
    /// Magnitude of the heliocentric velocity at that moment, in km/s.
    pub relative_speed_km_s: KmPerSec,
    /// Sub-point latitude of the position vector at that moment, in degrees.
    pub latitude_deg: Degree,
    /// Sub-point longitude of the position vector at that moment, in degrees.
    pub longitude_deg: Degree,
}

/// Scan the forward horizon and report the closest approach to Earth.
///
/// For each day of the [`SEARCH_HORIZON_DAYS`] horizon the body is propagated
/// and its distance from the origin compared against the running minimum; each
/// new minimum refreshes the recorded date, relative speed, and sub-point
/// coordinates. The scan terminates immediately on the first day at or below
/// [`IMPACT_THRESHOLD_KM`].
///
/// Arguments
/// ---------
/// * `elements`: validated orbital elements of the candidate body
///
/// Return
/// ------
/// * The [`IntersectionResult`] of the scan. A full scan without a threshold
///   breach is a near-miss report, not an error.
pub fn search_earth_intersection(elements: &KeplerianElements) -> IntersectionResult {
    let mut result = IntersectionResult {
        impact: false,
        min_distance_km: f64::INFINITY,
        date: ApproxDate::from_elapsed_days(0),
        relative_speed_km_s: 0.0,
        latitude_deg: 0.0,
        longitude_deg: 0.0,
    };

    for day in 0..SEARCH_HORIZON_DAYS {
        let pos = position(elements, day as f64);
        let distance = pos.norm();

        if distance < result.min_distance_km {
            result.min_distance_km = distance;
            result.date = ApproxDate::from_elapsed_days(day);
            result.relative_speed_km_s = velocity(elements, day as f64).norm();
            result.latitude_deg = (pos.z / distance).asin().to_degrees();
            result.longitude_deg = pos.y.atan2(pos.x).to_degrees();
        }

        if distance <= IMPACT_THRESHOLD_KM {
            result.impact = true;
            break;
        }
    }

    result
}
