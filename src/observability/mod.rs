//! Observability: structured logging, Prometheus metrics, request IDs.

mod logging;
mod metrics;
mod request_context;

pub use logging::{DEFAULT_LEVEL, LogFormat, LoggingConfig};
pub use metrics::{DEFAULT_METRICS_PORT, MetricsConfig, install_prometheus};
pub use request_context::{REQUEST_ID_HEADER, RequestContext};

use crate::config::ObservabilitySettings;
use crate::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry, fmt};

/// Full observability configuration.
#[derive(Debug)]
pub struct ObservabilityConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Metrics configuration.
    pub metrics: MetricsConfig,
    /// Whether to expose metrics via HTTP listener.
    pub metrics_expose: bool,
}

/// Options for initialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Whether verbose output was requested via CLI.
    pub verbose: bool,
    /// Whether to expose metrics via HTTP listener.
    pub metrics_expose: bool,
}

static OBSERVABILITY_INIT: OnceLock<()> = OnceLock::new();

/// Initializes observability from config settings.
///
/// # Errors
///
/// Returns an error if observability has already been initialized or if any
/// component fails to initialize.
pub fn init_from_config(settings: &ObservabilitySettings, options: InitOptions) -> Result<()> {
    init(build_config(settings, options))
}

/// Resolves raw settings into an [`ObservabilityConfig`].
#[must_use]
pub fn build_config(settings: &ObservabilitySettings, options: InitOptions) -> ObservabilityConfig {
    ObservabilityConfig {
        logging: LoggingConfig::from_settings(settings.logging.as_ref(), options.verbose),
        metrics: MetricsConfig::from_settings(settings.metrics.as_ref()),
        metrics_expose: options.metrics_expose,
    }
}

/// Initializes logging and metrics for the process.
///
/// # Errors
///
/// Returns an error if observability has already been initialized or if any
/// component fails to initialize.
pub fn init(config: ObservabilityConfig) -> Result<()> {
    if OBSERVABILITY_INIT.get().is_some() {
        return Err(Error::operation(
            "observability_init",
            "observability already initialized",
        ));
    }

    install_prometheus(&config.metrics, config.metrics_expose)?;

    let log_file = config.logging.file.as_deref().map(open_log_file).transpose()?;
    tracing_subscriber::registry()
        .with(fmt_layer(config.logging.format, log_file))
        .with(config.logging.filter)
        .try_init()
        .map_err(|e| Error::operation("observability_init", e))?;

    OBSERVABILITY_INIT
        .set(())
        .map_err(|()| Error::operation("observability_init", "failed to mark observability initialized"))
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Builds the formatter for `format`, writing to `file` or stderr.
fn fmt_layer(format: LogFormat, file: Option<File>) -> BoxedLayer {
    match (format, file) {
        (LogFormat::Json, Some(file)) => fmt::layer()
            .json()
            .with_writer(Mutex::new(file))
            .with_current_span(true)
            .with_target(true)
            .boxed(),
        (LogFormat::Pretty, Some(file)) => fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .boxed(),
        (LogFormat::Json, None) => fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_current_span(true)
            .with_target(true)
            .boxed(),
        (LogFormat::Pretty, None) => fmt::layer()
            .pretty()
            .with_writer(io::stderr)
            .boxed(),
    }
}

/// Opens a log file for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::operation("create_log_dir", e))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::operation("open_log_file", format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingSettings, MetricsSettings};
    use std::io::Write;

    #[test]
    fn test_build_config_from_settings() {
        let settings = ObservabilitySettings {
            logging: Some(LoggingSettings {
                format: Some("json".to_string()),
                ..LoggingSettings::default()
            }),
            metrics: Some(MetricsSettings {
                enabled: Some(true),
                port: Some(9300),
            }),
        };
        let config = build_config(
            &settings,
            InitOptions {
                verbose: false,
                metrics_expose: true,
            },
        );

        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.metrics.enabled);
        assert_eq!(config.metrics.listen_addr.port(), 9300);
        assert!(config.metrics_expose);
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("wordcensor.log");

        let mut file = open_log_file(&path).unwrap();
        file.write_all(b"line\n").unwrap();
        file.flush().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
    }
}
