//! Environment-driven configuration.
//!
//! All configuration is read once at startup from the process environment
//! (with `.env` support provided by `dotenvy` in `main`). The Comlink HMAC
//! credential pair is validated here so that a partially configured pair
//! fails the process immediately instead of failing the first signed request.

use crate::error::{config::ConfigError, AppError};

/// HMAC credential pair for signed Comlink requests.
///
/// Signing is enabled if and only if a complete pair is configured. The
/// invariant "both keys present and non-empty" is enforced by
/// [`Config::from_env`]; once a value of this type exists it is always usable.
#[derive(Debug, Clone)]
pub struct ComlinkCredentials {
    /// Public access key, sent verbatim in the `Authorization` header.
    pub access_key: String,
    /// Secret key used as the HMAC-SHA256 key. Never sent on the wire.
    pub secret_key: String,
}

pub struct Config {
    pub discord_token: String,

    /// Base URL of the swgoh-comlink proxy, without a trailing slash.
    pub comlink_url: String,
    /// Base URL of the unit-stats calculation service, without a trailing slash.
    pub stats_url: String,

    /// Optional HMAC pair; `None` disables request signing entirely.
    pub credentials: Option<ComlinkCredentials>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: require_var("DISCORD_TOKEN")?,
            comlink_url: require_var("COMLINK_URL")?.trim_end_matches('/').to_string(),
            stats_url: require_var("STATS_URL")?.trim_end_matches('/').to_string(),
            credentials: credentials_from_env()?,
        })
    }
}

/// Reads a required environment variable, treating empty values as missing.
fn require_var(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Reads an optional environment variable, treating empty values as absent.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Resolves the optional Comlink credential pair.
///
/// # Returns
/// - `Ok(Some(ComlinkCredentials))` - Both keys set and non-empty
/// - `Ok(None)` - Neither key set; signing disabled
/// - `Err(ConfigError::PartialCredentials)` - Exactly one key set
fn credentials_from_env() -> Result<Option<ComlinkCredentials>, ConfigError> {
    let access_key = optional_var("COMLINK_ACCESS_KEY");
    let secret_key = optional_var("COMLINK_SECRET_KEY");

    match (access_key, secret_key) {
        (Some(access_key), Some(secret_key)) => Ok(Some(ComlinkCredentials {
            access_key,
            secret_key,
        })),
        (None, None) => Ok(None),
        (Some(_), None) => Err(ConfigError::PartialCredentials(
            "COMLINK_ACCESS_KEY",
            "COMLINK_SECRET_KEY",
        )),
        (None, Some(_)) => Err(ConfigError::PartialCredentials(
            "COMLINK_SECRET_KEY",
            "COMLINK_ACCESS_KEY",
        )),
    }
}
