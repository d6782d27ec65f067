//! # Impact-physics engine
//!
//! Empirical scaling laws converting impactor geometry, bulk density, and
//! impact speed into consequence metrics. Every function here is pure,
//! side-effect-free, and independent of the intersection search: each can be
//! unit-tested on bare numeric inputs.
//!
//! ## Formula set
//!
//! One canonical, internally consistent formula set is implemented:
//!
//! - Kinetic energy: `½·m·v²` joules, converted at 4.184×10¹⁵ J per megaton.
//! - Crater diameter: `0.07 · E_J^(1/3.4)` meters (Collins et al. 2005,
//!   simplified for a vertical impact under terrestrial conditions), reported
//!   in km; depth is diameter / 5 (complex-crater ratio).
//! - Seismic magnitude: Gutenberg–Richter on the energy in ergs,
//!   `(log₁₀(E_erg) − 4.8) / 1.5`.
//! - Atmospheric dust: 1 % of the impactor mass, in teragrams.
//! - Destruction radius: `C · E_Mt^(1/3)` km with a tiered coefficient per
//!   overpressure band (three destruction-severity bands, a step function by
//!   design).
//! - Tsunami height: `0.1 · √E_Mt / √d_km` meters at a given coastal distance.

use serde::Serialize;

use crate::constants::{
    Kilometer, Megaton, Meter, Teragram, ERGS_PER_JOULE, JOULES_PER_MEGATON,
};
use crate::skyfall_errors::SkyfallError;

/// Physical description of the impacting body, independent of its orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactorParams {
    /// Diameter in meters, strictly positive.
    pub diameter_m: Meter,
    /// Bulk density in kg/m³, strictly positive.
    pub density_kgm3: f64,
}

impl ImpactorParams {
    /// Build validated impactor parameters.
    ///
    /// Arguments
    /// ---------
    /// * `diameter_m`: body diameter in meters, must be > 0
    /// * `density_kgm3`: bulk density in kg/m³, must be > 0
    ///
    /// Return
    /// ------
    /// * The parameter set, or [`SkyfallError::InvalidImpactorParams`].
    pub fn new(diameter_m: Meter, density_kgm3: f64) -> Result<Self, SkyfallError> {
        if !diameter_m.is_finite() || diameter_m <= 0.0 {
            return Err(SkyfallError::InvalidImpactorParams(format!(
                "diameter must be positive, got {diameter_m} m"
            )));
        }
        if !density_kgm3.is_finite() || density_kgm3 <= 0.0 {
            return Err(SkyfallError::InvalidImpactorParams(format!(
                "density must be positive, got {density_kgm3} kg/m³"
            )));
        }

        Ok(ImpactorParams {
            diameter_m,
            density_kgm3,
        })
    }

    /// Impactor mass in kg, assuming a homogeneous sphere.
    pub fn mass_kg(&self) -> f64 {
        let radius_m = self.diameter_m / 2.0;
        let volume_m3 = (4.0 / 3.0) * std::f64::consts::PI * radius_m.powi(3);
        self.density_kgm3 * volume_m3
    }
}

/// Primary consequence metrics of a single impact evaluation.
///
/// Purely derived from an `(ImpactorParams, impact speed)` pair; no persistent
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactConsequences {
    /// Released kinetic energy in megatons of TNT equivalent.
    pub kinetic_energy_megatons: Megaton,
    /// Final crater diameter in km.
    pub crater_diameter_km: Kilometer,
    /// Final crater depth in km.
    pub crater_depth_km: Kilometer,
    /// Richter-equivalent seismic magnitude.
    pub seismic_magnitude: f64,
}

/// Energy, crater geometry, and seismic magnitude of an impact.
///
/// Arguments
/// ---------
/// * `params`: validated impactor geometry and density
/// * `impact_speed_km_s`: impact speed in km/s
///
/// Return
/// ------
/// * The derived [`ImpactConsequences`].
pub fn kinetic_consequences(
    params: &ImpactorParams,
    impact_speed_km_s: f64,
) -> ImpactConsequences {
    let speed_ms = impact_speed_km_s * 1000.0;
    let energy_joules = 0.5 * params.mass_kg() * speed_ms.powi(2);

    let crater_diameter_km = 0.001 * 0.07 * energy_joules.powf(1.0 / 3.4);
    let energy_ergs = energy_joules * ERGS_PER_JOULE;

    ImpactConsequences {
        kinetic_energy_megatons: energy_joules / JOULES_PER_MEGATON,
        crater_diameter_km,
        crater_depth_km: crater_diameter_km / 5.0,
        seismic_magnitude: (energy_ergs.log10() - 4.8) / 1.5,
    }
}

/// Atmospheric dust mass injected by the impact, in teragrams.
///
/// Estimated as 1 % of the impactor mass.
pub fn atmospheric_dust_tg(params: &ImpactorParams) -> Teragram {
    let dust_kg = params.mass_kg() * 0.01;
    dust_kg / 1.0e9
}

/// Destruction radius at a given blast overpressure, in km.
///
/// `R = C · E^(1/3)` with the coefficient selected by a tiered lookup on the
/// requested overpressure. The three bands are inclusive on their lower bound:
/// below 10 psi → 2.2 (structural destruction), 10 to just under 20 psi → 1.7
/// (severe destruction), 20 psi and above → 1.3 (total destruction).
pub fn destruction_radius_km(energy_megatons: Megaton, overpressure_psi: f64) -> Kilometer {
    let coefficient = if overpressure_psi >= 20.0 {
        1.3
    } else if overpressure_psi >= 10.0 {
        1.7
    } else {
        2.2
    };

    coefficient * energy_megatons.powf(1.0 / 3.0)
}

/// Tsunami wave height at a given coastal distance, in meters.
///
/// `H = 0.1 · √E / √d`. A non-positive coastal distance yields a height of 0
/// rather than a division error.
pub fn tsunami_height_m(energy_megatons: Megaton, coastal_distance_km: Kilometer) -> f64 {
    if coastal_distance_km <= 0.0 {
        return 0.0;
    }

    0.1 * energy_megatons.sqrt() / coastal_distance_km.sqrt()
}
