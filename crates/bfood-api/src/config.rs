//! # API Configuration
//!
//! Where the ordering backend lives and how to talk to it.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BFOOD_API_URL=http://192.168.0.10:3001                             │
//! │     BFOOD_UPLOADS_PATH=uploads                                         │
//! │     BFOOD_API_TIMEOUT_SECS=10                                          │
//! │                                                                         │
//! │  2. [api] section of waiter.toml (loaded by the app)                   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Config File Section
//! ```toml
//! [api]
//! base_url = "http://localhost:3001"
//! uploads_path = "uploads"
//! timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Default backend address used during development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Default directory (relative to the base URL) that serves product images.
pub const DEFAULT_UPLOADS_PATH: &str = "uploads";

/// Client settings for the ordering backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST API, e.g. `http://localhost:3001`.
    pub base_url: String,

    /// Path under the base URL where images are served.
    pub uploads_path: String,

    /// Per-request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            uploads_path: DEFAULT_UPLOADS_PATH.to_string(),
            timeout_secs: None,
            user_agent: concat!("bfood-waiter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    /// Creates a config pointing at `base_url` with default settings.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Applies `BFOOD_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary key lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("BFOOD_API_URL") {
            debug!(url = %url, "Overriding API base URL from environment");
            self.base_url = url;
        }

        if let Some(path) = lookup("BFOOD_UPLOADS_PATH") {
            self.uploads_path = path;
        }

        if let Some(secs) = lookup("BFOOD_API_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(0) => self.timeout_secs = None,
                Ok(s) => self.timeout_secs = Some(s),
                Err(_) => warn!(value = %secs, "Ignoring invalid BFOOD_API_TIMEOUT_SECS"),
            }
        }
    }

    /// Validates the settings and returns the parsed base URL.
    pub fn validate(&self) -> ClientResult<Url> {
        let url = Url::parse(self.base_url.trim())?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "base URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "base URL cannot carry paths: {}",
                self.base_url
            )));
        }

        if self.timeout_secs == Some(0) {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(url)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Builds the public URL for a product image:
    /// `{base_url}/{uploads_path}/{image_path}`.
    ///
    /// Each `/`-separated part of the image path becomes its own segment.
    ///
    /// ```rust
    /// use bfood_api::ApiConfig;
    ///
    /// let config = ApiConfig::with_base_url("http://10.0.0.5:3001");
    /// assert_eq!(
    ///     config.image_url("pizza.png").unwrap(),
    ///     "http://10.0.0.5:3001/uploads/pizza.png"
    /// );
    /// ```
    pub fn image_url(&self, image_path: &str) -> ClientResult<String> {
        let mut url = self.validate()?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?;
            segments.pop_if_empty();
            segments.extend(self.uploads_path.split('/').filter(|s| !s.is_empty()));
            segments.extend(image_path.split('/').filter(|s| !s.is_empty()));
        }
        Ok(url.to_string())
    }
}
