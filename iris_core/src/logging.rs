//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Both front-ends call [`init_logging`] once at start-up. `RUST_LOG`, when
//! set, replaces the configured level entirely.
//!
//! # Log Levels
//!
//! - `error`: failed classification requests
//! - `warn`: rejected input, ignored submissions, failed health check
//! - `info`: request sent / prediction received, health status
//! - `debug`: request payloads, state transitions

use std::io;

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::errors::{IrisError, IrisResult};

/// Crates whose events follow the configured level; everything else stays at warn
const OWN_CRATES: [&str; 3] = ["iris_core", "iris_gui", "iris_cli"];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_timestamps: bool,
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON lines for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_timestamps: true,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Install the global subscriber, writing to stderr.
///
/// # Errors
///
/// Returns [`IrisError::Config`] if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> IrisResult<()> {
    init_logging_with_writer(config, io::stderr)
}

/// Install the global subscriber with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> IrisResult<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(config.level)));
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target);

    let registry = tracing_subscriber::registry().with(filter);
    let result = match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => registry.with(layer.json()).try_init(),
        (LogFormat::Compact, true) => registry.with(layer.compact()).try_init(),
        (LogFormat::Compact, false) => registry.with(layer.compact().without_time()).try_init(),
        (LogFormat::Pretty, true) => registry.with(layer).try_init(),
        (LogFormat::Pretty, false) => registry.with(layer.without_time()).try_init(),
    };

    result.map_err(|e| IrisError::config(format!("Failed to initialise logging: {}", e)))
}

/// Default `EnvFilter` directives for a level
pub fn filter_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(OWN_CRATES.iter().map(|krate| format!("{}={}", krate, level)));
    directives.join(",")
}
