//! Canvas connection configuration.
//!
//! Resolved once at startup and passed by reference into [`CanvasClient::new`].
//! Both values are required; a missing or malformed value is a
//! [`ClientError::ConfigError`] raised before any request is attempted.
//!
//! [`CanvasClient::new`]: crate::CanvasClient::new

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Environment variable holding the Canvas instance URL.
pub const BASE_URL_ENV: &str = "CANVAS_BASE_URL";

/// Environment variable holding the Canvas API access token.
pub const ACCESS_TOKEN_ENV: &str = "CANVAS_ACCESS_TOKEN";

/// Base URL and bearer credential for a Canvas instance.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    base_url: Url,
    access_token: SecretString,
}

impl CanvasConfig {
    /// Build a config from explicit values.
    pub fn new(base_url: &str, access_token: impl Into<String>) -> ClientResult<Self> {
        let base_url = parse_base_url(base_url)?;
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(ClientError::config_error(format!(
                "{} must not be empty",
                ACCESS_TOKEN_ENV
            )));
        }

        Ok(Self {
            base_url,
            access_token: SecretString::from(access_token),
        })
    }

    /// Resolve from the process environment.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve through an arbitrary key lookup (environment, CLI overrides, tests).
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV);
        let access_token = lookup(ACCESS_TOKEN_ENV);

        match (base_url, access_token) {
            (Some(base_url), Some(access_token)) => Self::new(&base_url, access_token),
            (None, None) => Err(ClientError::config_error(format!(
                "Missing {} and {}",
                BASE_URL_ENV, ACCESS_TOKEN_ENV
            ))),
            (None, _) => Err(ClientError::config_error(format!(
                "Missing {}",
                BASE_URL_ENV
            ))),
            (_, None) => Err(ClientError::config_error(format!(
                "Missing {}",
                ACCESS_TOKEN_ENV
            ))),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::config_error(format!(
            "{} must not be empty",
            BASE_URL_ENV
        )));
    }

    let url = Url::parse(trimmed).map_err(|e| {
        ClientError::config_error(format!("{} '{}' is not a valid URL: {}", BASE_URL_ENV, trimmed, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ClientError::config_error(format!(
            "{} must be an http(s) URL, got '{}'",
            BASE_URL_ENV, trimmed
        )));
    }

    Ok(url)
}
