//! User settings for SpendWise
//!
//! Display and logging preferences. Settings are read once at start-up;
//! session data is never written back to disk.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::Path;

use crate::error::SpendError;

/// Environment variable naming the settings file
pub const CONFIG_ENV_VAR: &str = "SPENDWISE_CONFIG";

/// User settings for SpendWise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default log filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, or use defaults if it doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, SpendError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| SpendError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SpendError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the file named by `SPENDWISE_CONFIG`, if set
    pub fn from_env() -> Result<Self, SpendError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::load_or_default(Path::new(&path)),
            Err(_) => Ok(Settings::default()),
        }
    }

    /// Reject settings that would break rendering
    ///
    /// The date format must render a plain calendar date: unknown
    /// specifiers and time or offset fields are both refused.
    pub fn validate(&self) -> Result<(), SpendError> {
        let invalid = || SpendError::Config(format!("Invalid date format: {}", self.date_format));

        if self.date_format.trim().is_empty() {
            return Err(invalid());
        }

        let sample = NaiveDate::from_ymd_opt(2024, 1, 31).ok_or_else(invalid)?;
        let mut rendered = String::new();
        write!(rendered, "{}", sample.format(&self.date_format)).map_err(|_| invalid())?;

        Ok(())
    }
}
