//! Configuration management.
//!
//! Configuration is resolved in this order, later steps overriding earlier:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`--config`, `WORDCENSOR_CONFIG_PATH`, or the platform
//!    config dir `wordcensor/config.toml`)
//! 3. `WORDCENSOR_*` environment variables
//!
//! # Example
//!
//! ```toml
//! database_path = "/var/lib/wordcensor/words.db"
//! seed_words = ["bad", "ugly"]
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [cache]
//! ttl_secs = 600
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "WORDCENSOR_CONFIG_PATH";

/// Main configuration for wordcensor.
#[derive(Debug, Clone)]
pub struct CensorConfig {
    /// Path to the `SQLite` word database.
    pub database_path: PathBuf,
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Word list cache settings.
    pub cache: CacheConfig,
    /// Words inserted at startup when the word table is empty.
    pub seed_words: Vec<String>,
    /// Raw logging and metrics settings, resolved by
    /// [`crate::observability`].
    pub observability: ObservabilitySettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Word list cache settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Absolute lifetime of the cached word list.
    pub ttl: Duration,
    /// Maximum number of cache keys.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: crate::storage::DEFAULT_CACHE_TTL,
            capacity: crate::cache::DEFAULT_CAPACITY,
        }
    }
}

/// Logging and metrics settings as written in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilitySettings {
    /// Logging section.
    pub logging: Option<LoggingSettings>,
    /// Metrics section.
    pub metrics: Option<MetricsSettings>,
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `wordcensor=debug`.
    pub level: Option<String>,
    /// `pretty` or `json`.
    pub format: Option<String>,
    /// Append log output to this file instead of stderr.
    pub file: Option<String>,
}

/// `[metrics]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSettings {
    /// Whether to install the Prometheus exporter.
    pub enabled: Option<bool>,
    /// Port for the Prometheus scrape endpoint.
    pub port: Option<u16>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Database path.
    pub database_path: Option<String>,
    /// Seed words.
    pub seed_words: Option<Vec<String>>,
    /// Server section.
    pub server: Option<ConfigFileServer>,
    /// Cache section.
    pub cache: Option<ConfigFileCache>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
    /// Metrics section.
    pub metrics: Option<MetricsSettings>,
}

/// Server section in config file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFileServer {
    /// Bind host.
    pub host: Option<String>,
    /// Bind port.
    pub port: Option<u16>,
}

/// Cache section in config file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFileCache {
    /// Snapshot lifetime in seconds.
    pub ttl_secs: Option<u64>,
    /// Maximum number of cache keys.
    pub capacity: Option<usize>,
}

impl Default for CensorConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("wordcensor.db"),
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            seed_words: Vec::new(),
            observability: ObservabilitySettings::default(),
        }
    }
}

impl CensorConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves configuration from an optional explicit path, the
    /// `WORDCENSOR_CONFIG_PATH` variable, the default location, and finally
    /// environment overrides. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be loaded or the
    /// resolved configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var(CONFIG_PATH_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let config = match path.map(Path::to_path_buf).or(from_env) {
            Some(explicit) => Self::load_from_file(&explicit)?,
            None => Self::load_default(),
        };

        let config = config.with_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::operation("read_config_file", format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration TOML.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| Error::operation("parse_config_file", e))?;
        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the platform config dir, then `~/.config/wordcensor/`.
    /// Returns defaults if no readable config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join("wordcensor").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("wordcensor")
                .join("config.toml"),
        ];

        candidates
            .iter()
            .filter(|path| path.exists())
            .find_map(|path| match Self::load_from_file(path) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
                    None
                },
            })
            .unwrap_or_default()
    }

    /// Converts a `ConfigFile` to `CensorConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(path) = file.database_path {
            config.database_path = PathBuf::from(path);
        }
        if let Some(seed_words) = file.seed_words {
            config.seed_words = seed_words;
        }
        if let Some(server) = file.server {
            if let Some(host) = server.host {
                config.server.host = host;
            }
            if let Some(port) = server.port {
                config.server.port = port;
            }
        }
        if let Some(cache) = file.cache {
            if let Some(ttl_secs) = cache.ttl_secs {
                config.cache.ttl = Duration::from_secs(ttl_secs);
            }
            if let Some(capacity) = cache.capacity {
                config.cache.capacity = capacity;
            }
        }
        config.observability = ObservabilitySettings {
            logging: file.logging,
            metrics: file.metrics,
        };

        config
    }

    /// Converts back to the file representation, for display.
    #[must_use]
    pub fn to_config_file(&self) -> ConfigFile {
        ConfigFile {
            database_path: Some(self.database_path.display().to_string()),
            seed_words: Some(self.seed_words.clone()),
            server: Some(ConfigFileServer {
                host: Some(self.server.host.clone()),
                port: Some(self.server.port),
            }),
            cache: Some(ConfigFileCache {
                ttl_secs: Some(self.cache.ttl.as_secs()),
                capacity: Some(self.cache.capacity),
            }),
            logging: self.observability.logging.clone(),
            metrics: self.observability.metrics.clone(),
        }
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(&self.to_config_file())
            .map_err(|e| Error::operation("serialize_config", e))
    }

    /// Applies `WORDCENSOR_*` overrides read through `lookup`.
    ///
    /// Unparseable numeric values are ignored with a warning.
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(path) = get("WORDCENSOR_DATABASE_PATH") {
            self.database_path = PathBuf::from(path);
        }
        if let Some(host) = get("WORDCENSOR_HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_env(&get, "WORDCENSOR_PORT") {
            self.server.port = port;
        }
        if let Some(ttl_secs) = parse_env(&get, "WORDCENSOR_CACHE_TTL_SECS") {
            self.cache.ttl = Duration::from_secs(ttl_secs);
        }

        if let Some(level) = get("WORDCENSOR_LOG_LEVEL") {
            self.logging_mut().level = Some(level);
        }
        if let Some(format) = get("WORDCENSOR_LOG_FORMAT") {
            self.logging_mut().format = Some(format);
        }
        if let Some(enabled) = get("WORDCENSOR_METRICS_ENABLED") {
            self.metrics_mut().enabled = Some(parse_bool(&enabled));
        }
        if let Some(port) = parse_env(&get, "WORDCENSOR_METRICS_PORT") {
            self.metrics_mut().port = Some(port);
        }

        self
    }

    /// Checks that required settings are present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the database path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(Error::InvalidInput(
                "database_path is not configured".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the database path.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    fn logging_mut(&mut self) -> &mut LoggingSettings {
        self.observability
            .logging
            .get_or_insert_with(LoggingSettings::default)
    }

    fn metrics_mut(&mut self) -> &mut MetricsSettings {
        self.observability
            .metrics
            .get_or_insert_with(MetricsSettings::default)
    }
}

fn parse_env<T: std::str::FromStr>(get: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let value = get(key)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(key, value = %value, "Ignoring unparseable environment override");
            None
        },
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
