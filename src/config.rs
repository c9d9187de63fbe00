//! Server configuration parsed from environment variables.

use std::time::Duration;

use client::config::{IdentityConfig, IdentityKeyError};
use client::state::identity::{RoleLookup, RoleLookupError};

pub const DEFAULT_API_UPSTREAM: &str = "http://localhost:8000/api";
pub const DEFAULT_PORT: u16 = 5173;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IDENTITY_PUBLISHABLE_KEY: {0}")]
    Identity(#[from] IdentityKeyError),
    #[error("IDENTITY_ROLE_SOURCES: {0}")]
    RoleSources(#[from] RoleLookupError),
    #[error("API_UPSTREAM must be an absolute http(s) URL, got {0:?}")]
    InvalidUpstream(String),
    #[error("invalid {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub identity: IdentityConfig,
    /// Base URL that `/api/<rest>` is rewritten onto, without a trailing `/`.
    pub api_upstream: String,
    pub proxy_verify_tls: bool,
    pub proxy_timeout: Duration,
    pub port: u16,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `IDENTITY_PUBLISHABLE_KEY`
    ///
    /// Optional:
    /// - `IDENTITY_SIGN_IN_URL`, `IDENTITY_SIGN_UP_URL`: hosted page overrides
    /// - `IDENTITY_ROLE_SOURCES`: default `public_metadata,unsafe_metadata`
    /// - `API_UPSTREAM`: default `http://localhost:8000/api`
    /// - `API_PROXY_VERIFY_TLS`: default false
    /// - `API_PROXY_TIMEOUT_SECS`: default 30, must be positive
    /// - `PORT`: default 5173
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a missing key or any malformed value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reading values through `get`.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = get("IDENTITY_PUBLISHABLE_KEY").unwrap_or_default();
        let mut identity = IdentityConfig::from_publishable_key(&key)?
            .with_sign_in_url(get("IDENTITY_SIGN_IN_URL").as_deref())
            .with_sign_up_url(get("IDENTITY_SIGN_UP_URL").as_deref());
        if let Some(raw) = get("IDENTITY_ROLE_SOURCES") {
            identity = identity.with_role_lookup(RoleLookup::parse(&raw)?);
        }

        let api_upstream = parse_upstream(get("API_UPSTREAM").as_deref())?;

        let proxy_verify_tls = match get("API_PROXY_VERIFY_TLS") {
            None => false,
            Some(raw) => parse_bool(&raw)
                .ok_or(ConfigError::InvalidValue { var: "API_PROXY_VERIFY_TLS", value: raw })?,
        };
        let timeout_secs = parse_or(&get, "API_PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue { var: "API_PROXY_TIMEOUT_SECS", value: "0".to_owned() });
        }
        let proxy_timeout = Duration::from_secs(timeout_secs);
        let port = parse_or(&get, "PORT", DEFAULT_PORT)?;

        Ok(Self { identity, api_upstream, proxy_verify_tls, proxy_timeout, port })
    }
}

fn parse_upstream(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_UPSTREAM);
    let url = reqwest::Url::parse(raw).map_err(|_| ConfigError::InvalidUpstream(raw.to_owned()))?;
    if !matches!(url.scheme(), "http" | "https") || url.query().is_some() {
        return Err(ConfigError::InvalidUpstream(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_or<F, T>(get: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match get(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
