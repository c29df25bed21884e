//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TOKEN` - Bearer token for the marketplace API. The placeholder value
//!   `<TOKEN>` is rejected.
//!
//! ## Optional
//! - `ENV` - Environment subdomain (default: sandbox). The API base URL is
//!   `https://{ENV}.tflapis.com`.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Placeholder left in sample scripts in place of a real token.
pub const TOKEN_PLACEHOLDER: &str = "<TOKEN>";

/// Environment used when `ENV` is unset or blank.
pub const DEFAULT_ENVIRONMENT: &str = "sandbox";

const API_DOMAIN: &str = "tflapis.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Set TOKEN env var (export TOKEN=<TOKEN>)")]
    MissingToken,
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Marketplace API configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL requests are sent to, without a trailing slash
    pub base_url: String,
    /// Bearer token
    pub token: SecretString,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl ApiConfig {
    /// Create a configuration for an explicit base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: SecretString) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            token,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` if `TOKEN` is unset, blank or the
    /// placeholder, and `ConfigError::InvalidEnvVar` if `ENV` is not a valid
    /// subdomain label.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_values(get_optional_env("ENV"), get_optional_env("TOKEN"))
    }

    /// Build configuration from raw `ENV` and `TOKEN` values.
    fn from_values(environment: Option<String>, token: Option<String>) -> Result<Self, ConfigError> {
        let token = token
            .filter(|t| !t.trim().is_empty() && t != TOKEN_PLACEHOLDER)
            .ok_or(ConfigError::MissingToken)?;

        let environment = environment
            .map(|e| e.trim().to_owned())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned());
        validate_environment(&environment)?;

        tracing::debug!(environment = %environment, "Loaded API configuration");

        Ok(Self::new(
            base_url_for(&environment),
            SecretString::from(token),
        ))
    }

    /// Expose the bearer token for building the `Authorization` header.
    pub(crate) fn bearer_token(&self) -> &str {
        self.token.expose_secret()
    }
}

/// Base URL for an environment subdomain.
#[must_use]
pub fn base_url_for(environment: &str) -> String {
    format!("https://{environment}.{API_DOMAIN}")
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// The environment becomes a hostname label, so only letters, digits and
/// hyphens are accepted.
fn validate_environment(environment: &str) -> Result<(), ConfigError> {
    if environment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Ok(());
    }
    Err(ConfigError::InvalidEnvVar(
        "ENV".to_string(),
        format!("'{environment}' is not a valid subdomain"),
    ))
}
