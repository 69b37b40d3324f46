//! Console logging setup.
//!
//! The library only emits `tracing` events. Binaries and tests that want
//! to see them call [`try_init`] once.

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a compact console subscriber filtered by `RUST_LOG`.
///
/// Fails, without panicking, when a global subscriber is already set.
pub fn try_init() -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).try_init()
}
