use crate::OutputFormat;
use crate::config::Config;
use anyhow::{Context, Result};

/// Print the URL the user must open to authorize the heart-rate service
pub fn auth(config: &Config, format: OutputFormat) -> Result<()> {
    let client = super::client(config)?;
    let url = client
        .authorization_url()
        .context("Failed to get authorization URL from heart-rate service")?;

    match format {
        OutputFormat::Text => {
            println!("Open this URL in a browser to authorize:");
            println!("{}", url);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "authorizationUrl": url }));
        }
    }

    Ok(())
}
