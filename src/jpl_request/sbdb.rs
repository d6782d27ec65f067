//! Orbital-element retrieval from the JPL Small-Body Database (SBDB) API.
//!
//! `https://ssd-api.jpl.nasa.gov/sbdb.api?sstr=<designation>` returns, among
//! other things, an `orbit.elements` array of `{name, value, …}` objects keyed
//! by short element codes. The six codes needed here are `a`, `e`, `i`, `om`,
//! `w`, and `ma`; a missing code is a data-unavailable condition surfaced
//! before the numerical core is ever invoked.

use std::collections::HashMap;

use serde::Deserialize;

use crate::env_state::SkyfallEnv;
use crate::keplerian_element::KeplerianElements;
use crate::skyfall_errors::SkyfallError;

const SBDB_API_URL: &str = "https://ssd-api.jpl.nasa.gov/sbdb.api";

/// Environment variable carrying an optional NASA API key.
///
/// Credentials are never embedded in the crate; when the variable is absent
/// the request is sent unauthenticated (the SBDB endpoint accepts that).
pub const NASA_API_KEY_VAR: &str = "NASA_API_KEY";

/// One entry of the SBDB `orbit.elements` array. Values are decimal strings.
#[derive(Debug, Deserialize, PartialEq)]
struct SbdbElement {
    name: String,
    value: String,
}

/// Fetch the orbital elements of a small body by SPK designation.
///
/// Arguments
/// ---------
/// * `env`: shared environment holding the HTTP client
/// * `designation`: SPK-ID or designation string (e.g. `"2099942"` for Apophis)
///
/// Return
/// ------
/// * A validated [`KeplerianElements`] set, or a [`SkyfallError`] when the
///   request fails, the response is malformed, or a required element code is
///   absent.
pub fn fetch_orbital_elements(
    env: &SkyfallEnv,
    designation: &str,
) -> Result<KeplerianElements, SkyfallError> {
    let mut url = format!("{SBDB_API_URL}?sstr={designation}");
    if let Ok(api_key) = std::env::var(NASA_API_KEY_VAR) {
        url.push_str("&api_key=");
        url.push_str(&api_key);
    }

    let body = env.get_from_url(&url)?;
    parse_sbdb_response(&body)
}

/// Parse a raw SBDB response body into validated orbital elements.
fn parse_sbdb_response(body: &str) -> Result<KeplerianElements, SkyfallError> {
    let document: serde_json::Value = serde_json::from_str(body)?;

    let elements_value = document
        .get("orbit")
        .and_then(|orbit| orbit.get("elements"))
        .ok_or_else(|| {
            SkyfallError::InvalidApiResponse(
                "SBDB response does not contain orbit.elements".to_string(),
            )
        })?;

    let records: Vec<SbdbElement> = serde_json::from_value(elements_value.clone())?;

    let mut by_code: HashMap<String, f64> = HashMap::new();
    for record in records {
        by_code.insert(record.name, record.value.parse::<f64>()?);
    }

    let element = |code: &str| {
        by_code
            .get(code)
            .copied()
            .ok_or_else(|| SkyfallError::MissingOrbitalElement(code.to_string()))
    };

    KeplerianElements::new(
        element("a")?,
        element("e")?,
        element("i")?,
        element("om")?,
        element("w")?,
        element("ma")?,
    )
}

#[cfg(test)]
mod sbdb_tests {
    use super::*;

    fn fake_response(elements: &[(&str, &str)]) -> String {
        let entries: Vec<String> = elements
            .iter()
            .map(|(name, value)| format!(r#"{{"name":"{name}","value":"{value}","sigma":"0"}}"#))
            .collect();
        format!(
            r#"{{"object":{{"fullname":"99942 Apophis (2004 MN4)"}},"orbit":{{"elements":[{}]}}}}"#,
            entries.join(",")
        )
    }

    #[test]
    fn test_parse_full_element_set() {
        // Apophis-like values.
        let body = fake_response(&[
            ("e", ".1914"),
            ("a", ".9224"),
            ("i", "3.339"),
            ("om", "203.9"),
            ("w", "126.7"),
            ("ma", "180.4"),
            ("tp", "2459424.6"),
        ]);
        let elements = parse_sbdb_response(&body).unwrap();
        assert_eq!(elements.semi_major_axis, 0.9224);
        assert_eq!(elements.eccentricity, 0.1914);
        assert_eq!(elements.inclination, 3.339);
        assert_eq!(elements.ascending_node_longitude, 203.9);
        assert_eq!(elements.perihelion_argument, 126.7);
        assert_eq!(elements.mean_anomaly, 180.4);
    }

    #[test]
    fn test_missing_element_code() {
        let body = fake_response(&[("e", ".19"), ("a", ".92"), ("i", "3.3"), ("om", "203.9")]);
        let error = parse_sbdb_response(&body).unwrap_err();
        assert_eq!(error, SkyfallError::MissingOrbitalElement("w".to_string()));
    }

    #[test]
    fn test_missing_orbit_block() {
        let body = r#"{"message":"specified object was not found"}"#;
        assert!(matches!(
            parse_sbdb_response(body),
            Err(SkyfallError::InvalidApiResponse(_))
        ));
    }

    #[test]
    fn test_malformed_numeric_value() {
        let body = fake_response(&[
            ("e", "not-a-number"),
            ("a", ".92"),
            ("i", "3.3"),
            ("om", "203.9"),
            ("w", "126.7"),
            ("ma", "180.4"),
        ]);
        assert!(matches!(
            parse_sbdb_response(&body),
            Err(SkyfallError::InvalidNumericField(_))
        ));
    }

    #[test]
    fn test_hyperbolic_body_rejected_before_the_core() {
        let body = fake_response(&[
            ("e", "1.2"),
            ("a", "3.5"),
            ("i", "3.3"),
            ("om", "203.9"),
            ("w", "126.7"),
            ("ma", "180.4"),
        ]);
        assert!(matches!(
            parse_sbdb_response(&body),
            Err(SkyfallError::InvalidOrbitalElements(_))
        ));
    }
}
