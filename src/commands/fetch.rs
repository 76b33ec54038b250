use crate::OutputFormat;
use crate::config::Config;
use crate::error::ServiceError;
use crate::service::models::HeartRateResponse;
use crate::session::{self, Session};
use crate::utils::render::render_response;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub start: String,
    pub end: Option<String>,
    pub duration: Option<u32>,
    pub date: Option<String>,
    pub dry_run: bool,
    pub show_dataset: bool,
}

/// Assemble a session from command-line values.
///
/// `end` and `duration` are applied in that order, so a duration wins when
/// it fits and otherwise leaves the given end in place.
pub fn build_session(options: &FetchOptions) -> Result<Session> {
    let mut session = match &options.date {
        Some(date) => Session::new(session::parse_date(date)?),
        None => Session::today(),
    };

    session.start = session::parse_clock(&options.start);
    if let Some(end) = &options.end {
        session.end = session::parse_clock(end);
    }
    if let Some(minutes) = options.duration {
        session.add_duration(minutes);
    }

    Ok(session)
}

pub fn fetch(config: &Config, options: FetchOptions, format: OutputFormat) -> Result<()> {
    let session = build_session(&options)?;
    let request = session.request();

    if options.dry_run {
        match format {
            OutputFormat::Text => println!(
                "[DRY-RUN] Would request heart rate on {} from {} to {}",
                request.date, request.start_time, request.end_time
            ),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&request).context("Failed to serialize request")?
            ),
        }
        return Ok(());
    }

    let client = super::client(config)?;
    match client.fetch_heart_rate(&request) {
        Ok(response) => {
            print_response(&response, options.show_dataset, format)?;
            Ok(())
        }
        Err(ServiceError::Api {
            status,
            message,
            details,
        }) => {
            let response = HeartRateResponse {
                error: Some(message),
                details,
                ..Default::default()
            };
            eprintln!("{}", render_response(&response, false));
            anyhow::bail!("Heart-rate request failed with status {}", status)
        }
        Err(e) => Err(e).context("Heart-rate request failed"),
    }
}

pub(crate) fn print_response(
    response: &HeartRateResponse,
    show_dataset: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", render_response(response, show_dataset)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(response).context("Failed to serialize response")?
        ),
    }
    Ok(())
}
