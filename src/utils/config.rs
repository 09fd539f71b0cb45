//! # Server Configuration
//!
//! Startup settings read from the environment. `main` loads a `.env` file
//! through `dotenvy` before calling [`Config::from_env`], so either source works.
//!
//! Loading happens before the log subscriber exists, so nothing here logs.
//! Anything worth reporting is kept on [`Config`] and emitted by
//! [`Config::log_startup`] once tracing is installed.

use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use tracing::{debug, warn};

use crate::utils::constant::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid APP_PORT value: {0}")]
    InvalidPort(String),
    #[error("invalid APP_HOST value: {0}")]
    InvalidHost(String),
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_format: LogFormat,
    /// `LOG_FORMAT` value that was not recognized and replaced by the default.
    pub unknown_log_format: Option<String>,
}

impl Config {
    /// Reads `APP_HOST`, `APP_PORT` and `LOG_FORMAT`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_var)
    }

    /// Same as [`Config::from_env`], reading values through `lookup` instead.
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| non_empty(lookup(key));

        let host = match get("APP_HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST
                .parse()
                .map_err(|_| ConfigError::InvalidHost(DEFAULT_HOST.to_string()))?,
        };
        let port = match get("APP_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let (log_format, unknown_log_format) = match get("LOG_FORMAT") {
            Some(raw) => match LogFormat::parse(&raw) {
                Some(format) => (format, None),
                None => (LogFormat::default(), Some(raw)),
            },
            None => (LogFormat::default(), None),
        };

        Ok(Self {
            host,
            port,
            log_format,
            unknown_log_format,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Logs the loaded settings. Call after the subscriber is installed.
    pub fn log_startup(&self) {
        if let Some(value) = &self.unknown_log_format {
            warn!(value = %value, "Unknown LOG_FORMAT, using pretty output");
        }
        debug!(config = ?self, "Loaded server configuration");
    }
}

/// Reads an environment variable. Non-unicode values count as unset.
pub fn env_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Drops values that are empty or only whitespace.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    pub(crate) fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8090".parse().unwrap());
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.unknown_log_format, None);
    }

    #[test]
    fn reads_host_port_and_format() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "3000"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.unknown_log_format, None);
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_HOST", ""),
            ("APP_PORT", "  "),
            ("LOG_FORMAT", ""),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8090".parse().unwrap());
        assert_eq!(config.unknown_log_format, None);
    }

    #[test]
    fn rejects_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[("APP_PORT", "eighty")]));
        assert_eq!(result, Err(ConfigError::InvalidPort("eighty".to_string())));

        let result = Config::from_lookup(lookup_from(&[("APP_PORT", "70000")]));
        assert_eq!(result, Err(ConfigError::InvalidPort("70000".to_string())));
    }

    #[test]
    fn rejects_invalid_host() {
        let result = Config::from_lookup(lookup_from(&[("APP_HOST", "not a host")]));
        assert_eq!(result, Err(ConfigError::InvalidHost("not a host".to_string())));
    }

    #[test]
    fn unknown_log_format_is_kept_for_reporting() {
        let config = Config::from_lookup(lookup_from(&[("LOG_FORMAT", "jsn")])).unwrap();

        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.unknown_log_format.as_deref(), Some("jsn"));
    }
}
