use serde::{Deserialize, Serialize};

/// Payload sent to the heart-rate service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HeartRateRequest {
    #[serde(rename = "startTime")]
    pub start_time: String, // HH:MM:SS
    #[serde(rename = "endTime")]
    pub end_time: String, // HH:MM:SS
    pub date: String, // YYYY-MM-DD
}

/// Response body from the heart-rate service.
///
/// Success and failure share one shape: a failed call carries `error` and
/// optionally `details`, a successful one `message` and usually `dataset`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct HeartRateResponse {
    #[serde(rename = "averageHr", skip_serializing_if = "Option::is_none")]
    pub average_hr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthorizationResponse {
    #[serde(rename = "authorizationUrl")]
    pub authorization_url: Option<String>,
}

/// Error body returned alongside a non-success status
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub details: Option<serde_json::Value>,
}
