//! Logging set-up.
//!
//! Events go to stderr so that stdout carries nothing but the tree.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::PstreeResult;

/// Level used when neither `--log-level` nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber.
///
/// `log_level` takes precedence over `RUST_LOG`.
pub fn init_logger(log_level: Option<&str>) -> PstreeResult<()> {
    let env_filter = match log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("Logger initialized");
    Ok(())
}
