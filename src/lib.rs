pub mod constants;
pub mod env_state;
pub mod gemini;
pub mod impact;
pub mod intersection;
pub mod jpl_request;
pub mod kepler;
pub mod keplerian_element;
pub mod propagation;
pub mod report;
pub mod skyfall_errors;
