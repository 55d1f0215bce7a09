//! Client configuration.
//!
//! The only setting is the API base URL, read from `ARGUMENTS_API_URL`.

use thiserror::Error;

pub const URL_ENV: &str = "ARGUMENTS_API_URL";
pub const DEFAULT_URL: &str = "http://localhost:3000";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset or blank values fall
    /// back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match lookup(URL_ENV) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => return Ok(Self::default()),
        };
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl { var: URL_ENV, value: url });
        }
        Ok(Self { url })
    }
}
