//! Service configuration read from the environment.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },

    #[error("{name} must be at most {max}")]
    TooLarge { name: &'static str, max: u64 },
}

/// Longest accepted rate limit window (one day).
pub const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 86_400;

/// Runtime configuration for the grading service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Requests allowed per client within one window.
    pub rate_limit_max_requests: u32,
    pub rate_limit_window: Duration,
    /// Clients tracked at once before the oldest are evicted.
    pub rate_limit_max_clients: usize,
    pub error_log_capacity: usize,
    pub error_log_retention: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            rate_limit_max_requests: 60,
            rate_limit_window: Duration::from_secs(60),
            rate_limit_max_clients: 10_000,
            error_log_capacity: 100,
            error_log_retention: Duration::from_secs(3600),
        }
    }
}

impl Config {
    /// Create configuration from environment variables.
    ///
    /// Optional env vars (defaults in parentheses):
    /// - HOST (0.0.0.0), PORT (3000)
    /// - RATE_LIMIT_MAX_REQUESTS (60), RATE_LIMIT_WINDOW_SECS (60, at most 86400)
    /// - RATE_LIMIT_MAX_CLIENTS (10000)
    /// - ERROR_LOG_CAPACITY (100), ERROR_LOG_RETENTION_SECS (3600)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let number = |name: &'static str, default: u64| -> Result<u64, ConfigError> {
            match lookup(name) {
                Some(value) => value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidNumber { name, value }),
                None => Ok(default),
            }
        };
        let positive = |name: &'static str, default: u64| -> Result<u64, ConfigError> {
            match number(name, default)? {
                0 => Err(ConfigError::Zero { name }),
                n => Ok(n),
            }
        };

        let port = number("PORT", defaults.port.into())?;
        let port = u16::try_from(port).map_err(|_| ConfigError::InvalidNumber {
            name: "PORT",
            value: port.to_string(),
        })?;

        let max_requests = positive(
            "RATE_LIMIT_MAX_REQUESTS",
            defaults.rate_limit_max_requests.into(),
        )?;
        let max_requests = u32::try_from(max_requests).map_err(|_| ConfigError::InvalidNumber {
            name: "RATE_LIMIT_MAX_REQUESTS",
            value: max_requests.to_string(),
        })?;

        let window_secs = positive(
            "RATE_LIMIT_WINDOW_SECS",
            defaults.rate_limit_window.as_secs(),
        )?;
        if window_secs > MAX_RATE_LIMIT_WINDOW_SECS {
            return Err(ConfigError::TooLarge {
                name: "RATE_LIMIT_WINDOW_SECS",
                max: MAX_RATE_LIMIT_WINDOW_SECS,
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            rate_limit_max_requests: max_requests,
            rate_limit_window: Duration::from_secs(window_secs),
            rate_limit_max_clients: positive(
                "RATE_LIMIT_MAX_CLIENTS",
                defaults.rate_limit_max_clients as u64,
            )? as usize,
            error_log_capacity: positive("ERROR_LOG_CAPACITY", defaults.error_log_capacity as u64)?
                as usize,
            error_log_retention: Duration::from_secs(positive(
                "ERROR_LOG_RETENTION_SECS",
                defaults.error_log_retention.as_secs(),
            )?),
        })
    }

    /// Address to bind the listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
