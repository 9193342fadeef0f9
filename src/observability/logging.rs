//! Structured logging configuration.

use crate::config::LoggingSettings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Default filter when neither settings nor `RUST_LOG` name one.
pub const DEFAULT_LEVEL: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name, falling back to [`LogFormat::Pretty`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Event filter.
    pub filter: EnvFilter,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file; stderr when `None`.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Builds logging configuration from file settings.
    ///
    /// `RUST_LOG` wins over the configured level. `verbose` forces `debug`
    /// for this crate on top of either.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        let level = settings
            .and_then(|s| s.level.as_deref())
            .unwrap_or(DEFAULT_LEVEL);
        let format = settings
            .and_then(|s| s.format.as_deref())
            .map(LogFormat::parse)
            .unwrap_or_default();
        let file = settings
            .and_then(|s| s.file.as_deref())
            .filter(|f| !f.trim().is_empty())
            .map(PathBuf::from);

        Self {
            filter: build_filter(level, verbose),
            format,
            file,
        }
    }
}

fn build_filter(level: &str, verbose: bool) -> EnvFilter {
    let base = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    if !verbose {
        return base;
    }
    match "wordcensor=debug".parse() {
        Ok(directive) => base.add_directive(directive),
        Err(_) => base,
    }
}
