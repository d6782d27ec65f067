use clap::Parser;

use skyfall::env_state::SkyfallEnv;
use skyfall::gemini::ask_gemini;
use skyfall::impact::ImpactorParams;
use skyfall::intersection::search_earth_intersection;
use skyfall::jpl_request::sbdb::fetch_orbital_elements;
use skyfall::keplerian_element::KeplerianElements;
use skyfall::report::{impact_summary_prompt, ImpactReport};
use skyfall::skyfall_errors::SkyfallError;

/// Estimate whether a small body will strike Earth within ~100 years and, if
/// so, model the physical consequences of the impact.
#[derive(Parser, Debug)]
#[command(name = "skyfall", version, about)]
struct Cli {
    /// SPK designation to fetch from the JPL small-body database
    /// (e.g. 2099942 for Apophis)
    #[arg(long)]
    asteroid_id: Option<String>,

    /// Semi-major axis (a) in AU
    #[arg(long)]
    semi_major_axis: Option<f64>,

    /// Eccentricity (e)
    #[arg(long)]
    eccentricity: Option<f64>,

    /// Inclination (i) in degrees
    #[arg(long)]
    inclination: Option<f64>,

    /// Longitude of the ascending node (Ω) in degrees
    #[arg(long)]
    ascending_node: Option<f64>,

    /// Argument of perihelion (ω) in degrees
    #[arg(long)]
    arg_perihelion: Option<f64>,

    /// Mean anomaly at epoch (M₀) in degrees
    #[arg(long)]
    mean_anomaly: Option<f64>,

    /// Impactor diameter in meters
    #[arg(long, default_value_t = 500.0)]
    diameter: f64,

    /// Impactor bulk density in kg/m³
    #[arg(long, default_value_t = 3000.0)]
    density: f64,

    /// Attach an AI-generated executive summary when an impact is found
    #[arg(long)]
    summarize: bool,

    /// Send a standalone free-text query to the Gemini API and exit
    #[arg(long)]
    ask_gemini: Option<String>,
}

impl Cli {
    /// Resolve the orbital elements: remote SBDB lookup when an asteroid id is
    /// given, the six manual flags otherwise.
    fn orbital_elements(&self, env: &SkyfallEnv) -> Result<KeplerianElements, SkyfallError> {
        if let Some(designation) = &self.asteroid_id {
            return fetch_orbital_elements(env, designation);
        }

        match (
            self.semi_major_axis,
            self.eccentricity,
            self.inclination,
            self.ascending_node,
            self.arg_perihelion,
            self.mean_anomaly,
        ) {
            (Some(a), Some(e), Some(i), Some(node), Some(peri), Some(ma)) => {
                KeplerianElements::new(a, e, i, node, peri, ma)
            }
            _ => Err(SkyfallError::InvalidOrbitalElements(
                "provide --asteroid-id or all six manual element flags \
                 (--semi-major-axis, --eccentricity, --inclination, \
                 --ascending-node, --arg-perihelion, --mean-anomaly)"
                    .to_string(),
            )),
        }
    }
}

fn run(cli: &Cli) -> Result<(), SkyfallError> {
    let env = SkyfallEnv::new();

    if let Some(query) = &cli.ask_gemini {
        let answer = ask_gemini(&env, query)?;
        let output = serde_json::json!({
            "query": query,
            "ai_answer": answer,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let elements = cli.orbital_elements(&env)?;
    let impactor = ImpactorParams::new(cli.diameter, cli.density)?;

    let result = search_earth_intersection(&elements);
    let mut report = ImpactReport::build(&result, &impactor);

    if result.impact && cli.summarize {
        report.ai_summary = Some(ask_gemini(&env, &impact_summary_prompt(&report))?);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        let output = serde_json::json!({
            "status": "error",
            "message": error.to_string(),
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&output)
                .unwrap_or_else(|_| r#"{"status":"error"}"#.to_string())
        );
        std::process::exit(1);
    }
}
