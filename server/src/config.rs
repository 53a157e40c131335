//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{ClientConfig, DEFAULT_STATUS_PREFIX, StatusColumn, default_statuses};
use thiserror::Error;
use widgets::kanban::FailureStrategy;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub csrf_token: String,
    pub failure_strategy: FailureStrategy,
    pub status_prefix: String,
    pub statuses: Vec<StatusColumn>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `CSRF_TOKEN`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LEADBOARD_FAILURE_STRATEGY`: `keep` (default) or `revert`
    /// - `LEADBOARD_STATUS_PREFIX`: default `/leads`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the token is missing or a value does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let csrf_token = lookup("CSRF_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing("CSRF_TOKEN"))?;
        let failure_strategy = parse_failure_strategy(lookup("LEADBOARD_FAILURE_STRATEGY").as_deref())?;
        let status_prefix = parse_status_prefix(lookup("LEADBOARD_STATUS_PREFIX").as_deref())?;

        Ok(Self { port, csrf_token, failure_strategy, status_prefix, statuses: default_statuses() })
    }

    /// Config handed to the browser through the SSR shell.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            csrf_token: self.csrf_token.clone(),
            status_prefix: self.status_prefix.clone(),
            failure_strategy: self.failure_strategy,
            statuses: self.statuses.clone(),
            ..ClientConfig::default()
        }
    }

    #[must_use]
    pub fn is_known_status(&self, status: &str) -> bool {
        self.statuses.iter().any(|s| s.id == status)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: value.to_owned() }),
    }
}

fn parse_failure_strategy(raw: Option<&str>) -> Result<FailureStrategy, ConfigError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("" | "keep") => Ok(FailureStrategy::Keep),
        Some("revert") => Ok(FailureStrategy::Revert),
        Some(_) => Err(ConfigError::Invalid {
            var: "LEADBOARD_FAILURE_STRATEGY",
            value: raw.unwrap_or_default().to_owned(),
        }),
    }
}

/// Absolute path without a trailing slash.
fn parse_status_prefix(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_STATUS_PREFIX.to_owned());
    };
    let trimmed = value.trim_end_matches('/');
    if !value.starts_with('/') || trimmed.is_empty() {
        return Err(ConfigError::Invalid { var: "LEADBOARD_STATUS_PREFIX", value: value.to_owned() });
    }
    Ok(trimmed.to_owned())
}
