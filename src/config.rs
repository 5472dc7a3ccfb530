//! Client configuration loaded from the environment.
//!
//! # Environment Variables
//!
//! - `SERVER_URL`: base URL of the account service
//!   (default: `https://fullstack-test-navy.vercel.app`)
//! - `NOTIFICATION_DURATION_MS`: how long a success or error notification stays
//!   on the page (default: 3000)
//! - `RUST_LOG`: log filter (default: `signup=info`)
//!
//! A `.env` file in the working directory is loaded first when present.

use crate::errors::ConfigError;
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "https://fullstack-test-navy.vercel.app";
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL, without a trailing slash
    pub server_url: String,

    /// Display time of the page-level notification
    pub notification_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source; unset or blank keys fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup("SERVER_URL").filter(|v| !v.trim().is_empty()) {
            config.set_server_url(&url)?;
        }
        if let Some(ms) = lookup("NOTIFICATION_DURATION_MS").filter(|v| !v.trim().is_empty()) {
            config.set_notification_ms(&ms)?;
        }
        Ok(config)
    }

    pub fn set_server_url(&mut self, raw: &str) -> Result<(), ConfigError> {
        let url = raw.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidServerUrl(raw.to_string()));
        }
        self.server_url = url.to_string();
        Ok(())
    }

    pub fn set_notification_ms(&mut self, raw: &str) -> Result<(), ConfigError> {
        let ms: u64 = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidDuration(raw.to_string()))?;
        self.notification_duration = Duration::from_millis(ms);
        Ok(())
    }

    /// Full URL of the account creation endpoint.
    pub fn create_user_url(&self) -> String {
        format!("{}/api/users/create", self.server_url)
    }
}
