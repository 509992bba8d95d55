//! Logging set-up for the `nerdy-build` binary.
//!
//! Events go to stderr so the external tool's own output stays the only
//! thing on stdout. The filter is read from `NERDY_BUILD_LOG`, using the
//! usual `tracing_subscriber::EnvFilter` directive syntax.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "NERDY_BUILD_LOG";
/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "nerdy_build=warn";

/// Builds the filter from [`LOG_ENV`], falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Call once, before any event is emitted.
pub fn init() {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(fmt_layer)
        .init();
}
