use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::QuoteError;

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "thesis-quote.toml";

/// Prefix for environment overrides, e.g. `THESIS_QUOTE__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "THESIS_QUOTE";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// How prices are rendered; never affects the computed amount
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Round displayed prices to a multiple of this unit (0 disables rounding)
    #[serde(default)]
    pub round_to: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            round_to: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SelectionConfig {
    /// Reject fields and multipliers that are not in the active catalog
    #[serde(default)]
    pub strict: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_currency() -> String {
    "Toman".to_string()
}

/// Load configuration from `path` (optional if it does not exist) and the environment
pub fn load_config(path: &Path) -> Result<Config, QuoteError> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<(), QuoteError> {
    match cfg.logging.format.as_str() {
        "pretty" | "json" => {}
        other => {
            return Err(QuoteError::Config(format!(
                "Invalid log format '{}' (expected 'pretty' or 'json')",
                other
            )))
        }
    }

    if cfg.logging.level.trim().is_empty() {
        return Err(QuoteError::Config("Log level cannot be empty".to_string()));
    }

    if cfg.display.currency.trim().is_empty() {
        return Err(QuoteError::Config(
            "Display currency cannot be empty".to_string(),
        ));
    }

    Ok(())
}
