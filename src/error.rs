use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the heart-rate service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service answered with a non-success status and its own error body.
    #[error("Service error ({status}): {message}")]
    Api {
        status: StatusCode,
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("Network error connecting to heart-rate service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode service response: {0}")]
    Decode(String),

    #[error("Invalid service URL '{0}'")]
    InvalidUrl(String),
}

/// Failures turning user text into edit targets.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown unit '{0}', expected hours, minutes or seconds")]
    Unit(String),

    #[error("Unknown time slot '{0}', expected start or end")]
    Slot(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    Date(String),

    #[error("Unrecognised input '{0}'")]
    Command(String),
}
