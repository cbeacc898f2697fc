//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with a
//! fallback name, and loads [`ServerConfig`] from them.

use metaverse_api_common::config::{ServerConfig, DEFAULT_PORT, DEFAULT_SERVICE_NAME};
use std::fmt::Display;
use std::str::FromStr;

/// Listening port.
pub const PORT_ENV: &str = "METAVERSE_API_PORT";
/// Conventional port variable honoured when [`PORT_ENV`] is unset.
pub const PORT_FALLBACK_ENV: &str = "PORT";
/// Bind address.
pub const HOST_ENV: &str = "METAVERSE_API_HOST";
/// Name reported by `GET /`.
pub const SERVICE_NAME_ENV: &str = "METAVERSE_API_SERVICE_NAME";

/// Get an environment variable, falling back to a second name
///
/// # Returns
/// * `Some(value)` - The value of `name`, or of `fallback` if `name` is unset
/// * `None` - Neither variable is set
///
/// # Example
/// ```
/// use metaverse_api::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("METAVERSE_API_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(name: &str, fallback: &str) -> Option<String> {
    if let Ok(val) = std::env::var(name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(fallback) {
        tracing::debug!("'{}' is not set, using '{}'", name, fallback);
        return Some(val);
    }
    None
}

/// Get an environment variable or a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// A value that fails to parse is reported with a warning and replaced by
/// `default`.
pub fn get_env_with_fallback_parse<T>(name: &str, fallback: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match get_env_with_fallback(name, fallback) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    "Invalid value '{}' for '{}' ({}), using default {}",
                    raw,
                    name,
                    err,
                    default
                );
                default
            }
        },
        None => default,
    }
}

/// Load the server configuration from the environment.
pub fn load_server_config() -> ServerConfig {
    let defaults = ServerConfig::default();
    ServerConfig {
        host: get_env_or(HOST_ENV, &defaults.host),
        port: get_env_with_fallback_parse(PORT_ENV, PORT_FALLBACK_ENV, DEFAULT_PORT),
        service_name: get_env_or(SERVICE_NAME_ENV, DEFAULT_SERVICE_NAME),
    }
}
