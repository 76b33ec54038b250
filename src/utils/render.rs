use crate::service::models::HeartRateResponse;
use regex::Regex;
use std::sync::OnceLock;

fn bpm_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)(\d+\.?\d*)\s*bpm").expect("valid bpm regex"))
}

/// First heart-rate figure in a service message, e.g. `"72.45"` from
/// `"... 72.45 bpm"`.
pub fn extract_bpm(message: &str) -> Option<&str> {
    bpm_pattern()
        .captures(message)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// The message with its first bpm figure removed.
pub fn message_without_bpm(message: &str) -> String {
    bpm_pattern().replace(message, "").trim().to_string()
}

/// Human-readable rendering of a service response.
pub fn render_response(response: &HeartRateResponse, show_dataset: bool) -> String {
    let mut lines = Vec::new();

    if let Some(error) = &response.error {
        lines.push(format!("Error: {}", error));
        if let Some(details) = &response.details {
            lines.push(format!("Details: {}", render_details(details)));
        }
    } else if let Some(message) = &response.message {
        let rest = message_without_bpm(message);
        if !rest.is_empty() {
            lines.push(rest);
        }
        if let Some(bpm) = extract_bpm(message) {
            lines.push(format!("{} BPM", bpm));
        }
    } else {
        lines.push("No data available".to_string());
    }

    if show_dataset {
        if let Some(dataset) = &response.dataset {
            let pretty = serde_json::to_string_pretty(dataset).unwrap_or_else(|_| "[]".to_string());
            lines.push(format!("Dataset ({} samples):", dataset.len()));
            lines.push(pretty);
        }
    }

    lines.join("\n")
}

fn render_details(details: &serde_json::Value) -> String {
    match details {
        serde_json::Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}
