//! # Constants and type definitions for Skyfall
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `skyfall` library.
//!
//! ## Overview
//!
//! - Astronomical and geophysical constants
//! - Unit conversions (joules ↔ megatons, AU ↔ km)
//! - Search parameters of the Earth-intersection scan
//! - Core type aliases used across the crate
//!
//! These definitions are used by the propagation, intersection, and impact-physics modules.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Earth sidereal year in days.
///
/// Doubles as the coefficient of the AU-based period law
/// `P_days = SIDEREAL_YEAR_DAYS * a_au^1.5`, which folds the solar gravitational
/// parameter into an AU/day formulation of Kepler's third law. Do not swap in a
/// different GM without re-deriving this constant.
pub const SIDEREAL_YEAR_DAYS: f64 = 365.256363;

/// Earth mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Atmospheric buffer added to the Earth radius for the impact test, in kilometers
pub const ATMOSPHERE_BUFFER_KM: f64 = 200.0;

/// Distance at or below which a propagated body is considered to impact Earth
pub const IMPACT_THRESHOLD_KM: f64 = EARTH_RADIUS_KM + ATMOSPHERE_BUFFER_KM;

/// TNT megaton equivalent in joules
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Ergs per joule, used by the Gutenberg–Richter magnitude relation
pub const ERGS_PER_JOULE: f64 = 1.0e7;

// -------------------------------------------------------------------------------------------------
// Intersection-search parameters (fixed by design, not caller-tunable)
// -------------------------------------------------------------------------------------------------

/// Forward scan horizon of the Earth-intersection search, in days (~100 years)
pub const SEARCH_HORIZON_DAYS: u32 = 36_500;

/// Calendar year anchoring day 0 of the intersection scan
pub const SEARCH_EPOCH_YEAR: i32 = 2026;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in meters
pub type Meter = f64;
/// Speed in kilometers per second
pub type KmPerSec = f64;
/// Energy in megatons of TNT equivalent
pub type Megaton = f64;
/// Mass in teragrams
pub type Teragram = f64;
