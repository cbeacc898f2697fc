//! tracing subscriber initialization

use tracing_subscriber::EnvFilter;

use crate::config::get_env_with_fallback;

/// Log filter directive, e.g. `debug` or `metaverse_api=trace,tower_http=debug`.
pub const LOG_LEVEL_ENV: &str = "METAVERSE_API_LOG_LEVEL";

/// Filter used when no directive is configured or it does not parse.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Install the global fmt subscriber.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init()
}

/// Build the filter from `METAVERSE_API_LOG_LEVEL`, then `RUST_LOG`.
pub fn env_filter() -> EnvFilter {
    let directive = get_env_with_fallback(LOG_LEVEL_ENV, "RUST_LOG")
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!(
            "Invalid log filter '{}' ({}), falling back to '{}'",
            directive, err, DEFAULT_LOG_LEVEL
        );
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    })
}
