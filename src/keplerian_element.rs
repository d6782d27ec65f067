//! # Keplerian orbital elements
//!
//! This module defines the [`KeplerianElements`] struct, the **classical orbital
//! element representation** used as input for propagation and the Earth-intersection
//! search.
//!
//! ## What are Keplerian elements?
//!
//! The six Keplerian elements are:
//!
//! 1. **a** – Semi-major axis (AU)
//! 2. **e** – Eccentricity (unitless)
//! 3. **i** – Inclination (degrees)
//! 4. **Ω** – Longitude of ascending node (degrees)
//! 5. **ω** – Argument of perihelion (degrees)
//! 6. **M₀** – Mean anomaly at epoch (degrees)
//!
//! Together these fully describe an elliptical orbit under the two-body
//! approximation, relative to the epoch of the element set.
//!
//! ## Units
//!
//! - Lengths: **AU**
//! - Angles: **degrees** (converted to radians by the propagation layer)
//!
//! ## Validation
//!
//! [`KeplerianElements::new`] rejects non-positive semi-major axes and
//! eccentricities outside `[0, 1)` before any numeric routine runs. This is a
//! precondition of the propagator, which itself never fails.
//!
//! ## See also
//!
//! - [`crate::propagation`] – heliocentric position/velocity from these elements.
//! - [`crate::intersection`] – the Earth closest-approach search.

use std::fmt;

use crate::constants::Degree;
use crate::skyfall_errors::SkyfallError;

/// Keplerian orbital elements (osculating, two-body, elliptical).
///
/// Immutable once constructed; owned by the caller for the duration of a single
/// propagation or search.
#[derive(Debug, PartialEq, Clone)]
pub struct KeplerianElements {
    /// Semi-major axis in AU, strictly positive.
    pub semi_major_axis: f64,
    /// Eccentricity in [0, 1).
    pub eccentricity: f64,
    /// Inclination in degrees.
    pub inclination: Degree,
    /// Longitude of the ascending node Ω in degrees.
    pub ascending_node_longitude: Degree,
    /// Argument of perihelion ω in degrees.
    pub perihelion_argument: Degree,
    /// Mean anomaly at epoch M₀ in degrees.
    pub mean_anomaly: Degree,
}

impl KeplerianElements {
    /// Build a validated element set.
    ///
    /// Arguments
    /// ---------
    /// * `semi_major_axis`: a in AU, must be > 0
    /// * `eccentricity`: e, must lie in [0, 1) (elliptical orbits only)
    /// * `inclination`: i in degrees
    /// * `ascending_node_longitude`: Ω in degrees
    /// * `perihelion_argument`: ω in degrees
    /// * `mean_anomaly`: M₀ in degrees
    ///
    /// Return
    /// ------
    /// * The element set, or [`SkyfallError::InvalidOrbitalElements`] when a
    ///   precondition is violated.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: Degree,
        ascending_node_longitude: Degree,
        perihelion_argument: Degree,
        mean_anomaly: Degree,
    ) -> Result<Self, SkyfallError> {
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(SkyfallError::InvalidOrbitalElements(format!(
                "semi-major axis must be positive, got {semi_major_axis} AU"
            )));
        }
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(SkyfallError::InvalidOrbitalElements(format!(
                "eccentricity must lie in [0, 1), got {eccentricity}"
            )));
        }

        Ok(KeplerianElements {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node_longitude,
            perihelion_argument,
            mean_anomaly,
        })
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keplerian Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} AU",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6}°",
            self.inclination
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6}°",
            self.ascending_node_longitude
        )?;
        writeln!(
            f,
            "  ω   (argument of perihelion)= {:.6}°",
            self.perihelion_argument
        )?;
        writeln!(f, "  M₀  (mean anomaly)          = {:.6}°", self.mean_anomaly)
    }
}
