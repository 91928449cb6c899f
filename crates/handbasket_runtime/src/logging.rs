//! Diagnostic logging setup.
//!
//! Events go to stderr so they never mix with the game's own output.

use handbasket_foundation::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter. Overrides `--log-level`.
pub const LOG_ENV: &str = "HANDBASKET_LOG";

/// Builds the filter from [`LOG_ENV`], falling back to `default_filter`.
///
/// # Errors
///
/// Returns an error if the fallback filter does not parse.
pub fn filter(default_filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| Error::internal(format!("bad log filter {default_filter:?}: {e}")))
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init(default_filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::internal(e.to_string()))
}
