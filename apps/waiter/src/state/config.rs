//! # Waiter Configuration
//!
//! Loaded once at startup, read-only afterwards.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BFOOD_*`)
//! 2. Config file (`waiter.toml`)
//! 3. Defaults (this file)
//!
//! ## Config File
//! ```toml
//! [api]
//! base_url = "http://192.168.0.10:3001"
//! uploads_path = "uploads"
//! timeout_secs = 10
//!
//! [display]
//! currency_symbol = "R$"
//! decimal_separator = ","
//! thousands_separator = "."
//! ```

use std::path::{Path, PathBuf};

use bfood_api::{ApiConfig, ClientError};
use bfood_core::Money;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// =============================================================================
// Display Settings
// =============================================================================

/// How money is rendered on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub currency_symbol: String,
    pub decimal_separator: String,
    pub thousands_separator: String,
}

impl Default for DisplaySettings {
    /// Brazilian real: `R$ 1.234,56`.
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: "R$".to_string(),
            decimal_separator: ",".to_string(),
            thousands_separator: ".".to_string(),
        }
    }
}

impl DisplaySettings {
    /// Formats an amount with the configured symbol and separators.
    ///
    /// ## Example
    /// ```rust
    /// use waiter::state::DisplaySettings;
    /// use bfood_core::Money;
    ///
    /// let display = DisplaySettings::default();
    /// assert_eq!(display.format_currency(Money::from_cents(123456)), "R$ 1.234,56");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let digits = amount.major().abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(ch);
        }

        format!(
            "{}{} {}{}{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            grouped,
            self.decimal_separator,
            amount.minor_part()
        )
    }

    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup("BFOOD_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }
        if let Some(sep) = lookup("BFOOD_DECIMAL_SEPARATOR") {
            self.decimal_separator = sep;
        }
        if let Some(sep) = lookup("BFOOD_THOUSANDS_SEPARATOR") {
            self.thousands_separator = sep;
        }
    }
}

// =============================================================================
// Waiter Config
// =============================================================================

/// Complete app configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaiterConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl WaiterConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else the platform config dir)
    /// 3. Environment variables
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides_from(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file without applying environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading waiter config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api.apply_overrides_from(&lookup);
        self.display.apply_overrides_from(&lookup);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        Ok(())
    }

    /// `waiter.toml` in the platform config directory.
    ///
    /// - **Linux**: `~/.config/bfood-waiter/waiter.toml`
    /// - **macOS**: `~/Library/Application Support/com.bfood.waiter/waiter.toml`
    /// - **Windows**: `%APPDATA%\bfood\waiter\config\waiter.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "bfood", "waiter")
            .map(|dirs| dirs.config_dir().join("waiter.toml"))
    }
}

// =============================================================================
// Config Errors
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid API settings: {0}")]
    Api(#[from] ClientError),
}
