//! Runtime configuration
//!
//! Layered, lowest priority first: built-in defaults, an optional TOML
//! file, `LOADOUT_*` environment variables, then command-line overrides.

use std::path::Path;

use anyhow::{bail, Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "LOADOUT_";

/// Diagnostic log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// tracing filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "loadout=warn".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

/// Values taken from the command line; unset fields defer to lower layers
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Build the layered figment without extracting it
    pub fn figment(file: Option<&Path>, overrides: &ConfigOverrides) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
    }

    /// Load configuration. A config file that was named but is missing is an error.
    pub fn load(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        if let Some(path) = file {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
        }

        Self::figment(file, overrides)
            .extract()
            .context("Invalid configuration")
    }
}
