//! Client configuration.

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";
pub const BASE_URL_ENV: &str = "STRATBOT_WORLD_BANK_BASE_URL";
pub const TIMEOUT_ENV: &str = "STRATBOT_HTTP_TIMEOUT_MS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer of milliseconds: '{value}'")]
    InvalidTimeout { name: &'static str, value: String },
    #[error("base URL cannot be empty")]
    EmptyBaseUrl,
}

/// Settings for [`crate::WorldBankClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout; `None` leaves the caller responsible for bounding waits.
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            user_agent: String::from(concat!("stratbot/", env!("CARGO_PKG_VERSION"))),
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `STRATBOT_WORLD_BANK_BASE_URL` and `STRATBOT_HTTP_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config = config.with_base_url(base_url)?;
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let timeout = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    name: TIMEOUT_ENV,
                    value: raw.clone(),
                })?;
            config.timeout_ms = Some(timeout);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        self.base_url = trimmed.to_owned();
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}
