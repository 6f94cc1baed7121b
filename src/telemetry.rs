//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::TryInitError};

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "postrelay=info";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns [`TryInitError`] when a global subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
}
