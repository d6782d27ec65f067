//! Free-text summary client for the Google Generative Language API.
//!
//! Used to turn a structured impact scenario into a short plain-language
//! executive summary, or to answer an arbitrary question. The API key is read
//! strictly from the [`GEMINI_API_KEY_VAR`] environment variable; there is no
//! embedded credential and no default.

use crate::env_state::SkyfallEnv;
use crate::skyfall_errors::SkyfallError;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Environment variable carrying the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Send a free-text query and return the model's answer.
///
/// Arguments
/// ---------
/// * `env`: shared environment holding the HTTP client
/// * `query`: the prompt text
///
/// Return
/// ------
/// * The first candidate's text, or a [`SkyfallError`] when the key is
///   missing, the request fails, or the response carries no usable candidate.
pub fn ask_gemini(env: &SkyfallEnv, query: &str) -> Result<String, SkyfallError> {
    let api_key = std::env::var(GEMINI_API_KEY_VAR)
        .map_err(|_| SkyfallError::MissingApiKey(GEMINI_API_KEY_VAR))?;

    let request_body = serde_json::json!({
        "contents": [{
            "parts": [{
                "text": query
            }]
        }]
    });

    let response = env.post_json(
        GEMINI_API_URL,
        &[("x-goog-api-key", api_key.as_str())],
        &request_body,
    )?;

    extract_candidate_text(&response)
}

/// Extract `candidates[0].content.parts[0].text` from a raw response body.
///
/// The API has been observed prepending a UTF-8 BOM; it is stripped before
/// parsing.
fn extract_candidate_text(body: &str) -> Result<String, SkyfallError> {
    let body = body.trim_start_matches('\u{feff}');
    let response: serde_json::Value = serde_json::from_str(body)?;

    response
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.get(0))
        .and_then(|part| part.get("text"))
        .and_then(|text| text.as_str())
        .map(str::to_owned)
        .ok_or_else(|| {
            SkyfallError::InvalidApiResponse(
                "Gemini response does not contain a usable candidate".to_string(),
            )
        })
}

#[cfg(test)]
mod gemini_tests {
    use super::*;

    #[test]
    fn test_extract_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"A short summary."}],"role":"model"},"finishReason":"STOP"}]}"#;
        assert_eq!(extract_candidate_text(body).unwrap(), "A short summary.");
    }

    #[test]
    fn test_extract_strips_utf8_bom() {
        let body = "\u{feff}{\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"ok\"}]}}]}";
        assert_eq!(extract_candidate_text(body).unwrap(), "ok");
    }

    #[test]
    fn test_empty_candidates_is_an_error() {
        let body = r#"{"candidates":[]}"#;
        assert!(matches!(
            extract_candidate_text(body),
            Err(SkyfallError::InvalidApiResponse(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            extract_candidate_text("not json"),
            Err(SkyfallError::JsonError(_))
        ));
    }
}
