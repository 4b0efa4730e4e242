//! Client configuration baked in at build time.
//!
//! The browser bundle has no process environment, so values are read with
//! `option_env!` when Trunk/cargo compiles the crate:
//!
//! - `READWISE_API_BASE`: backend base URL, default `/api`
//! - `READWISE_GOOGLE_CLIENT_ID`: Google Identity Services client id
//! - `READWISE_LOG_LEVEL`: console log level, default `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::Level;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid READWISE_API_BASE '{0}': expected a path starting with '/' or an http(s) URL")]
    InvalidApiBase(String),
    #[error("invalid READWISE_LOG_LEVEL '{0}'")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every backend path is joined onto, without a trailing slash.
    pub api_base_url: String,
    /// Empty when sign-in is not configured.
    pub google_client_id: String,
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            google_client_id: String::new(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build the config from values captured at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("READWISE_API_BASE"),
            option_env!("READWISE_GOOGLE_CLIENT_ID"),
            option_env!("READWISE_LOG_LEVEL"),
        )
    }

    /// Build the config from raw optional values; `None` selects the default.
    pub fn from_values(
        api_base: Option<&str>,
        google_client_id: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_api_base(api_base)?,
            google_client_id: google_client_id.unwrap_or_default().trim().to_owned(),
            log_level: parse_log_level(log_level)?,
        })
    }

    pub fn sign_in_configured(&self) -> bool {
        !self.google_client_id.is_empty()
    }
}

fn parse_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    let valid = raw.starts_with('/') || raw.starts_with("http://") || raw.starts_with("https://");
    if !valid {
        return Err(ConfigError::InvalidApiBase(raw.to_owned()));
    }
    let trimmed = raw.trim_end_matches('/');
    // A bare "/" means "same origin, no prefix".
    Ok(trimmed.to_owned())
}

fn parse_log_level(raw: Option<&str>) -> Result<Level, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => value
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(value.to_owned())),
    }
}
