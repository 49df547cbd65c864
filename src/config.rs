#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

use crate::constants::LOG_LEVEL_ENV;

/// Parses the optional log-level value, defaulting to `Level::INFO` when unset
/// or unrecognised.
pub fn parse_log_level(val: Option<String>) -> Level {
    val.and_then(|s| Level::from_str(s.trim()).ok())
        .unwrap_or(Level::INFO)
}

/// Installs the global `tracing` subscriber for an embedding application.
///
/// Loads a `.env` file if one is present, then reads [`LOG_LEVEL_ENV`].
/// Fails if a global subscriber has already been set.
pub fn init_logging() -> Result<()> {
    dotenvy::dotenv().ok();

    let level = parse_log_level(std::env::var(LOG_LEVEL_ENV).ok());
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .try_init()
        .context("Failed to install the global tracing subscriber")?;

    tracing::debug!(%level, "logging initialised");
    Ok(())
}
