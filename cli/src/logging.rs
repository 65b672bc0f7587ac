//! Diagnostic tracing for the driver.
//!
//! Command results go to stdout; tracing goes to stderr so the two never
//! mix when output is piped.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug` with
/// `--verbose`. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=enumerable=trace enumerable reduce '(5..10)' :+
/// ```
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
