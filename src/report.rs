//! Structured JSON report assembly.
//!
//! Plain [`serde::Serialize`] records shaped for the CLI output: an orbital
//! block with the closest-approach/impact metadata and, when an impact is
//! flagged, a consequences block derived by the impact-physics engine. The
//! core itself has no opinion on serialization; everything here is a view over
//! the result types.

use serde::Serialize;

use crate::impact::{
    atmospheric_dust_tg, destruction_radius_km, kinetic_consequences, tsunami_height_m,
    ImpactConsequences, ImpactorParams,
};
use crate::intersection::{ApproxDate, IntersectionResult};

/// Overpressure threshold reported for the destruction radius, in psi
/// (structural destruction band).
pub const REPORT_OVERPRESSURE_PSI: f64 = 5.0;

/// Reference coastal distance for the reported tsunami height, in km.
pub const REPORT_COASTAL_DISTANCE_KM: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactZone {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

/// Orbital block of the report: the intersection-search outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitalReport {
    pub impact: bool,
    pub closest_approach_date: ApproxDate,
    pub impact_zone: ImpactZone,
    pub min_distance_km: f64,
    pub relative_speed_km_s: f64,
}

impl From<&IntersectionResult> for OrbitalReport {
    fn from(result: &IntersectionResult) -> Self {
        OrbitalReport {
            impact: result.impact,
            closest_approach_date: result.date,
            impact_zone: ImpactZone {
                latitude_deg: result.latitude_deg,
                longitude_deg: result.longitude_deg,
            },
            min_distance_km: result.min_distance_km,
            relative_speed_km_s: result.relative_speed_km_s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CraterReport {
    pub diameter_km: f64,
    pub depth_km: f64,
}

/// Consequence block of the report, evaluated once per impact scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConsequenceReport {
    pub kinetic_energy_megatons: f64,
    pub crater: CraterReport,
    pub seismic_magnitude_richter: f64,
    pub atmospheric_dust_tg: f64,
    pub destruction_radius_5psi_km: f64,
    pub tsunami_height_100km_m: f64,
}

impl ConsequenceReport {
    /// Evaluate all consequence metrics for an impactor hitting at the given speed.
    pub fn evaluate(params: &ImpactorParams, impact_speed_km_s: f64) -> Self {
        let consequences: ImpactConsequences = kinetic_consequences(params, impact_speed_km_s);
        let energy = consequences.kinetic_energy_megatons;

        ConsequenceReport {
            kinetic_energy_megatons: energy,
            crater: CraterReport {
                diameter_km: consequences.crater_diameter_km,
                depth_km: consequences.crater_depth_km,
            },
            seismic_magnitude_richter: consequences.seismic_magnitude,
            atmospheric_dust_tg: atmospheric_dust_tg(params),
            destruction_radius_5psi_km: destruction_radius_km(energy, REPORT_OVERPRESSURE_PSI),
            tsunami_height_100km_m: tsunami_height_m(energy, REPORT_COASTAL_DISTANCE_KM),
        }
    }
}

/// Full report document printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactReport {
    pub orbital: OrbitalReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consequences: Option<ConsequenceReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
}

impl ImpactReport {
    /// Assemble the report for one search outcome.
    ///
    /// The consequence block is only evaluated when an impact was flagged; the
    /// impact speed fed to the physics engine is the relative speed recorded
    /// by the intersection search.
    pub fn build(result: &IntersectionResult, params: &ImpactorParams) -> Self {
        let consequences = result
            .impact
            .then(|| ConsequenceReport::evaluate(params, result.relative_speed_km_s));

        ImpactReport {
            orbital: OrbitalReport::from(result),
            consequences,
            ai_summary: None,
        }
    }
}

/// Build the plain-language summary prompt for an impact scenario.
pub fn impact_summary_prompt(report: &ImpactReport) -> String {
    let orbital = &report.orbital;
    let mut prompt = String::from(
        "Act as an expert in planetary risk communication. Write a clear, concise \
         executive summary (150 words maximum) of the following asteroid impact \
         scenario. Avoid excessive technical language. The data are: ",
    );

    prompt.push_str(&format!(
        "Impact date: {}. Impact site: latitude {:.2}, longitude {:.2}. ",
        orbital.closest_approach_date,
        orbital.impact_zone.latitude_deg,
        orbital.impact_zone.longitude_deg,
    ));

    if let Some(consequences) = &report.consequences {
        prompt.push_str(&format!(
            "Released energy: {:.1} megatons of TNT. Resulting crater diameter: {:.1} \
             kilometers. Seismic magnitude: {:.1} on the Richter scale.",
            consequences.kinetic_energy_megatons,
            consequences.crater.diameter_km,
            consequences.seismic_magnitude_richter,
        ));
    }

    prompt
}
