//! Diagnostic logging for the action binary.
//!
//! Stdout carries workflow commands, so log lines go to stderr. `RUST_LOG`
//! overrides the default `info` level.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::github::ActionError;

/// Installs the global stderr subscriber.
///
/// # Errors
///
/// Returns [`ActionError::Configuration`] when a subscriber is already
/// installed.
pub fn init() -> Result<(), ActionError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|error| ActionError::Configuration {
            message: format!("failed to install logger: {error}"),
        })
}
