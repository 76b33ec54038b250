use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat, Map};
use serde::de::{self, SeqAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".hr-window";
pub const ENV_PREFIX: &str = "HRW";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub durations: DurationsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    /// Base URL of the heart-rate backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8081".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DurationsConfig {
    /// Quick-add durations in minutes
    #[serde(default = "default_presets", deserialize_with = "presets_from_list_or_number")]
    pub presets: Vec<u32>,
}

fn default_presets() -> Vec<u32> {
    vec![2, 10, 15, 30, 60]
}

/// `HRW_DURATIONS__PRESETS=5,10` arrives as a list, but a lone `5` is
/// parsed as a plain number.
fn presets_from_list_or_number<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PresetsVisitor;

    impl<'de> Visitor<'de> for PresetsVisitor {
        type Value = Vec<u32>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a list of minutes or a single number of minutes")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            u32::try_from(v)
                .map(|m| vec![m])
                .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u32::try_from(v)
                .map(|m| vec![m])
                .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut presets = Vec::new();
            while let Some(minutes) = seq.next_element::<u32>()? {
                presets.push(minutes);
            }
            Ok(presets)
        }
    }

    deserializer.deserialize_any(PresetsVisitor)
}

impl Default for DurationsConfig {
    fn default() -> Self {
        Self {
            presets: default_presets(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("Invalid service base_url '{}'", self.base_url))?;
        if url.cannot_be_a_base() {
            anyhow::bail!("Service base_url '{}' must be an absolute URL", self.base_url);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("Service timeout must be greater than 0");
        }
        Ok(())
    }
}

impl DurationsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.presets.is_empty() {
            anyhow::bail!("At least one duration preset is required");
        }
        if self.presets.contains(&0) {
            anyhow::bail!("Duration presets must be greater than 0");
        }
        Ok(())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.service.validate()?;
        self.durations.validate()?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(home::home_dir()
        .context("Could not find home directory")?
        .join(CONFIG_DIR)
        .join("config.toml"))
}

/// Load a config file with `HRW_*` environment overrides on top.
/// A missing file yields the defaults.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    load_with_env(path, None)
}

/// As [`load_from_path`], reading overrides from `env` instead of the
/// process environment when given.
pub fn load_with_env<P: AsRef<Path>>(path: P, env: Option<Map<String, String>>) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(
            File::from(path.as_ref())
                .format(FileFormat::Toml)
                .required(false),
        )
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("durations.presets")
                .source(env),
        )
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

pub fn load() -> Result<Config> {
    let config = load_from_path(config_path()?)?;
    config.validate()?;
    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
