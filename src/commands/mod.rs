pub mod auth;
pub mod config;
pub mod fetch;
pub mod session;

use crate::config::Config;
use crate::service::HeartRateClient;
use anyhow::{Context, Result};
use std::time::Duration;

pub(crate) fn client(config: &Config) -> Result<HeartRateClient> {
    HeartRateClient::new(&config.service.base_url)
        .with_timeout(Duration::from_secs(config.service.timeout_secs))
        .context("Failed to build HTTP client")
}
