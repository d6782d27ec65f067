use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkyfallError {
    #[error("Invalid orbital elements: {0}")]
    InvalidOrbitalElements(String),

    #[error("Invalid impactor parameters: {0}")]
    InvalidImpactorParams(String),

    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] ureq::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON (de)serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Malformed numeric field in API response: {0}")]
    InvalidNumericField(#[from] std::num::ParseFloatError),

    #[error("Small-body database response is missing orbital element '{0}'")]
    MissingOrbitalElement(String),

    #[error("Unexpected API response shape: {0}")]
    InvalidApiResponse(String),

    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(&'static str),
}

impl PartialEq for SkyfallError {
    fn eq(&self, other: &Self) -> bool {
        use SkyfallError::*;
        match (self, other) {
            (InvalidOrbitalElements(a), InvalidOrbitalElements(b)) => a == b,
            (InvalidImpactorParams(a), InvalidImpactorParams(b)) => a == b,
            (MissingOrbitalElement(a), MissingOrbitalElement(b)) => a == b,
            (InvalidApiResponse(a), InvalidApiResponse(b)) => a == b,
            (MissingApiKey(a), MissingApiKey(b)) => a == b,
            (InvalidNumericField(a), InvalidNumericField(b)) => a == b,

            // Not comparable beyond the variant itself
            (UreqHttpError(_), UreqHttpError(_)) => true,
            (IoError(_), IoError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            _ => false,
        }
    }
}
