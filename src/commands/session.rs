use crate::OutputFormat;
use crate::clock::{self, Unit};
use crate::config::Config;
use crate::error::{ParseError, ServiceError};
use crate::service::HeartRateClient;
use crate::session::{self, Session, Slot};
use crate::utils::render::render_response;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

/// One line of input to the edit loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Edit { slot: Slot, unit: Unit, raw: String },
    AddDuration(u32),
    Date(NaiveDate),
    Show,
    Payload,
    Submit,
    Help,
    Quit,
}

impl SessionEvent {
    /// Parse a line such as `start minutes 90`, `+30` or `date 2026-01-07`.
    /// Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };

        if let Some(minutes) = head.strip_prefix('+') {
            return Ok(Some(SessionEvent::AddDuration(parse_minutes(minutes, line)?)));
        }

        let event = match head.to_ascii_lowercase().as_str() {
            "start" | "end" => {
                let slot: Slot = head.parse()?;
                let unit: Unit = words
                    .next()
                    .ok_or_else(|| ParseError::Command(line.trim().to_string()))?
                    .parse()?;
                let raw = words.next().unwrap_or("").to_string();
                SessionEvent::Edit { slot, unit, raw }
            }
            "add" => SessionEvent::AddDuration(parse_minutes(words.next().unwrap_or(""), line)?),
            "date" => {
                let text = words.next().unwrap_or("");
                SessionEvent::Date(session::parse_date(text)?)
            }
            "show" => SessionEvent::Show,
            "payload" => SessionEvent::Payload,
            "submit" => SessionEvent::Submit,
            "help" | "?" => SessionEvent::Help,
            "quit" | "exit" => SessionEvent::Quit,
            _ => return Err(ParseError::Command(line.trim().to_string())),
        };

        Ok(Some(event))
    }
}

/// Duration adds only take plain digits; unlike a field edit there is no
/// value to fall back to.
fn parse_minutes(text: &str, line: &str) -> Result<u32, ParseError> {
    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ParseError::Command(line.trim().to_string()));
    }
    Ok(u32::try_from(clock::coerce_raw(text)).unwrap_or(u32::MAX))
}

pub fn session(config: &Config, format: OutputFormat) -> Result<()> {
    let client = super::client(config)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(
        Session::today(),
        &config.durations.presets,
        &client,
        stdin.lock(),
        stdout.lock(),
        format,
    )
}

/// Drive a session from line-oriented input until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    mut session: Session,
    presets: &[u32],
    client: &HeartRateClient,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<()> {
    write_state(&mut output, &session, format)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;

        let event = match SessionEvent::parse(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                write_help(&mut output, presets)?;
                continue;
            }
        };

        match event {
            SessionEvent::Edit { slot, unit, raw } => {
                session.edit(slot, unit, &raw);
            }
            SessionEvent::AddDuration(minutes) => {
                session.add_duration(minutes);
            }
            SessionEvent::Date(date) => session.set_date(date),
            SessionEvent::Show => {}
            SessionEvent::Payload => {
                let payload = serde_json::to_string_pretty(&session.request())
                    .context("Failed to serialize request")?;
                writeln!(output, "{}", payload)?;
                continue;
            }
            SessionEvent::Submit => {
                submit(&session, client, &mut output, format)?;
                continue;
            }
            SessionEvent::Help => {
                write_help(&mut output, presets)?;
                continue;
            }
            SessionEvent::Quit => break,
        }

        write_state(&mut output, &session, format)?;
    }

    output.flush()?;
    Ok(())
}

fn submit<W: Write>(
    session: &Session,
    client: &HeartRateClient,
    output: &mut W,
    format: OutputFormat,
) -> Result<()> {
    match client.fetch_heart_rate(&session.request()) {
        Ok(response) => match format {
            OutputFormat::Text => writeln!(output, "{}", render_response(&response, false))?,
            OutputFormat::Json => writeln!(
                output,
                "{}",
                serde_json::to_string(&response).context("Failed to serialize response")?
            )?,
        },
        // The loop keeps running so the user can correct the window and retry.
        Err(e) => match format {
            OutputFormat::Text => writeln!(output, "Error: {}", e)?,
            OutputFormat::Json => writeln!(output, "{}", error_json(&e))?,
        },
    }
    Ok(())
}

fn error_json(error: &ServiceError) -> serde_json::Value {
    match error {
        ServiceError::Api {
            status,
            message,
            details,
        } => serde_json::json!({
            "error": message,
            "details": details,
            "status": status.as_u16(),
        }),
        other => serde_json::json!({ "error": other.to_string() }),
    }
}

fn write_state<W: Write>(output: &mut W, session: &Session, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(
            output,
            "start {}  end {}  date {}",
            session.start,
            session.end,
            session.date.format(session::DATE_FORMAT)
        )?,
        OutputFormat::Json => writeln!(
            output,
            "{}",
            serde_json::to_string(&session.request()).context("Failed to serialize session")?
        )?,
    }
    Ok(())
}

fn write_help<W: Write>(output: &mut W, presets: &[u32]) -> Result<()> {
    let presets = presets
        .iter()
        .map(|m| format!("+{}", m))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        output,
        "Commands: start|end <hours|minutes|seconds> <value>, add <minutes>, date <YYYY-MM-DD>, show, payload, submit, quit"
    )?;
    writeln!(output, "Quick durations: {}", presets)?;
    Ok(())
}
