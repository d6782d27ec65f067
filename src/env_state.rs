//! # Skyfall environment state
//!
//! This module defines [`SkyfallEnv`], the shared environment object holding
//! the persistent **HTTP client** used by the API collaborators (small-body
//! database lookup, AI summary).
//!
//! The object is cheaply cloneable and passed to the clients that need
//! external data; the numerical core never touches it.

use std::time::Duration;

use ureq::Agent;

use crate::skyfall_errors::SkyfallError;

#[derive(Debug, Clone)]
pub struct SkyfallEnv {
    pub http_client: Agent,
}

impl Default for SkyfallEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl SkyfallEnv {
    /// Create a new environment with an HTTP client using a 10 s global timeout.
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(10)))
            .build();

        SkyfallEnv {
            http_client: config.into(),
        }
    }

    /// Perform a GET request and return the response body as text.
    ///
    /// Non-2xx statuses surface as [`SkyfallError::UreqHttpError`].
    pub(crate) fn get_from_url(&self, url: &str) -> Result<String, SkyfallError> {
        Ok(self
            .http_client
            .get(url)
            .call()?
            .body_mut()
            .read_to_string()?)
    }

    /// POST a JSON document with extra headers and return the response body as text.
    pub(crate) fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<String, SkyfallError> {
        let mut request = self
            .http_client
            .post(url)
            .header("Content-Type", "application/json");
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let payload = body.to_string();
        Ok(request
            .send(payload.as_str())?
            .body_mut()
            .read_to_string()?)
    }
}
