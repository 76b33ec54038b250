use crate::error::ServiceError;
use crate::service::models::{
    AuthorizationResponse, ErrorBody, HeartRateRequest, HeartRateResponse,
};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

pub struct HeartRateClient {
    client: Client,
    base_url: String,
}

impl HeartRateClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Rebuild the HTTP client with a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ServiceError> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ServiceError> {
        let url = format!("{}/{}", self.base_url, path);
        reqwest::Url::parse(&url).map_err(|_| ServiceError::InvalidUrl(url))
    }

    /// Average heart rate and samples for a time window
    pub fn fetch_heart_rate(
        &self,
        request: &HeartRateRequest,
    ) -> Result<HeartRateResponse, ServiceError> {
        let url = self.endpoint("get-heart-rate")?;
        debug!(%url, start = %request.start_time, end = %request.end_time, date = %request.date, "requesting heart rate");

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()?;

        decode(response)
    }

    /// Authorization URL the user must visit before data can be fetched
    pub fn authorization_url(&self) -> Result<String, ServiceError> {
        let url = self.endpoint("start-oauth")?;
        debug!(%url, "requesting authorization url");

        let response = self.client.get(url).send()?;
        let body: AuthorizationResponse = decode(response)?;

        body.authorization_url.ok_or_else(|| {
            ServiceError::Decode("authorizationUrl missing from service response".to_string())
        })
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let status = response.status();
    let text = response.text()?;

    if !status.is_success() {
        // The backend reports failures as JSON, but a proxy in between may not.
        let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
        let message = body.error.unwrap_or_else(|| {
            if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                text.trim().to_string()
            }
        });
        warn!(%status, %message, "heart-rate service returned an error");
        return Err(ServiceError::Api {
            status,
            message,
            details: body.details,
        });
    }

    serde_json::from_str(&text).map_err(|e| ServiceError::Decode(e.to_string()))
}
