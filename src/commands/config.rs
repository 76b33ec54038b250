use crate::OutputFormat;
use crate::config::{self, Config};
use anyhow::{Context, Result};
use serde_json::Value;

/// Effective configuration, file values merged with `HRW_*` overrides
pub fn list(config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("# {}", config::config_path()?.display());
            print!(
                "{}",
                toml::to_string_pretty(config).context("Failed to serialize config")?
            );
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(config).context("Failed to serialize config")?
        ),
    }
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    println!("{}", lookup(config, key)?);
    Ok(())
}

/// Resolve a dotted key such as `service.base_url` or `durations.presets`.
/// Lists print comma-separated, the same form `HRW_DURATIONS__PRESETS` takes.
pub fn lookup(config: &Config, key: &str) -> Result<String> {
    let root = serde_json::to_value(config).context("Failed to serialize config")?;

    let value = key.split('.').try_fold(&root, |node, part| {
        node.get(part).with_context(|| {
            let known = match node {
                Value::Object(map) => map.keys().cloned().collect::<Vec<_>>().join(", "),
                _ => String::new(),
            };
            format!("Unknown config key '{}' (available: {})", key, known)
        })
    })?;

    Ok(match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    })
}
