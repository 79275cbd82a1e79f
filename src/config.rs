//! Host configuration parsed from environment variables.

use client::config::{ApiConfig, DEFAULT_API_BASE};

pub const DEFAULT_PORT: u16 = 3000;

/// A configuration value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid RMS_API_BASE: {0} (expected an http(s) URL or an absolute path)")]
    InvalidApiBase(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// RMS REST API the pages talk to.
    pub api: ApiConfig,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `RMS_API_BASE`: REST API base URL, default `http://localhost:8000/api/v1`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api = parse_api_base(std::env::var("RMS_API_BASE").ok().as_deref())?;
        Ok(Self { port, api })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_api_base(raw: Option<&str>) -> Result<ApiConfig, ConfigError> {
    let value = raw.map_or(DEFAULT_API_BASE, str::trim);
    // A bare "/" would normalise to an empty base.
    if value.trim_end_matches('/').is_empty() {
        return Err(ConfigError::InvalidApiBase(value.to_owned()));
    }
    let is_url = value.starts_with("http://") || value.starts_with("https://");
    if !is_url && !value.starts_with('/') {
        return Err(ConfigError::InvalidApiBase(value.to_owned()));
    }
    Ok(ApiConfig::new(value))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
