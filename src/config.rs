//! Viewer configuration.
//!
//! The viewer talks to exactly one game server. Configuration is the server's
//! base URL; endpoint paths are fixed by the server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Where the game server listens when started with its defaults.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const BOARD_PATH: &str = "/mb/board/";
pub const LOG_PATH: &str = "/mb/log/";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0} (expected http:// or https://)")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Scheme and authority, without a trailing slash.
    pub base_url: String,
}

impl ViewerConfig {
    /// Validate and normalize a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless the URL is `http://` or
    /// `https://` with a non-empty host.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let host = trimmed.strip_prefix("http://").or_else(|| trimmed.strip_prefix("https://"));
        match host {
            Some(host) if !host.is_empty() => Ok(Self { base_url: trimmed.to_owned() }),
            _ => Err(ConfigError::InvalidBaseUrl(base_url.to_owned())),
        }
    }

    #[must_use]
    pub fn board_url(&self) -> String {
        self.endpoint(BOARD_PATH)
    }

    #[must_use]
    pub fn log_url(&self) -> String {
        self.endpoint(LOG_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned() }
    }
}
