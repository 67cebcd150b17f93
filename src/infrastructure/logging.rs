//! Process-wide tracing subscriber for the `serve` command

use anyhow::Context;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::{LogFormat, LoggingConfig};

/// Appended to the configured level so HTTP plumbing only reports problems
const QUIET_DEPENDENCIES: &str = "hyper=warn,reqwest=warn";

/// Filter for a configured level name such as `info` or `debug`
pub fn filter_from_level(level: &str) -> anyhow::Result<EnvFilter> {
    let level: LevelFilter = level
        .trim()
        .parse()
        .with_context(|| format!("invalid log level '{}'", level))?;

    Ok(EnvFilter::new(format!("{},{}", level, QUIET_DEPENDENCIES)))
}

/// Install the global subscriber. `RUST_LOG`, when set, replaces the configured level.
///
/// Fails on an unknown level or if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_from_level(&config.level)?,
    };

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(filter)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(filter)
            .boxed(),
    };

    tracing_subscriber::registry().with(layer).try_init()?;

    tracing::info!(level = %config.level, format = ?config.format, "Logging initialized");

    Ok(())
}
