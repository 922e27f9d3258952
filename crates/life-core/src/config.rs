//! Configuration loading and typed config structures for the Life service.
//!
//! The canonical configuration lives in `life-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads the file. Every field has a
//! default, so an empty or missing file yields a runnable configuration.

use std::path::Path;

use life_engine::PopulateStrategy;
use serde::Deserialize;
use tracing::warn;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
///
/// Mirrors the structure of `life-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LifeConfig {
    /// Grid shape and initial population.
    #[serde(default)]
    pub world: WorldConfig,

    /// HTTP listener settings.
    #[serde(default)]
    pub server: HttpConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LifeConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the listener:
    /// - `LIFE_HOST` overrides `server.host`
    /// - `LIFE_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// No environment overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document is the default configuration.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Grid and population configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Number of rows.
    #[serde(default = "default_height")]
    pub height: usize,

    /// Number of columns.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Initial live-cell density in percent (clamped to 0-100).
    #[serde(default = "default_density_percent")]
    pub density_percent: u8,

    /// Seed for the initial population. Wall-clock time when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// How the initial live cells are placed.
    #[serde(default)]
    pub populate_strategy: PopulateStrategy,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            width: default_width(),
            density_percent: default_density_percent(),
            seed: None,
            populate_strategy: PopulateStrategy::default(),
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl HttpConfig {
    /// Override listener settings with `LIFE_HOST` / `LIFE_PORT` when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override listener settings from an arbitrary key lookup.
    ///
    /// An unparseable port is logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("LIFE_HOST") {
            self.host = host;
        }
        if let Some(raw) = lookup("LIFE_PORT") {
            match raw.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(e) => warn!(value = raw, error = %e, "ignoring invalid LIFE_PORT"),
            }
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_height() -> usize {
    100
}

const fn default_width() -> usize {
    100
}

const fn default_density_percent() -> u8 {
    40
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8081
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LifeConfig::default();
        assert_eq!(config.world.height, 100);
        assert_eq!(config.world.width, 100);
        assert_eq!(config.world.density_percent, 40);
        assert_eq!(config.world.seed, None);
        assert_eq!(config.world.populate_strategy, PopulateStrategy::Scatter);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
world:
  height: 30
  width: 50
  density_percent: 25
  seed: 1234
  populate_strategy: exact

server:
  host: "127.0.0.1"
  port: 9000

logging:
  level: debug
  format: json
"#;
        let config = LifeConfig::parse(yaml).unwrap();
        assert_eq!(config.world.height, 30);
        assert_eq!(config.world.width, 50);
        assert_eq!(config.world.density_percent, 25);
        assert_eq!(config.world.seed, Some(1234));
        assert_eq!(config.world.populate_strategy, PopulateStrategy::Exact);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn parse_partial_yaml_uses_defaults() {
        let yaml = "world:\n  height: 12\n";
        let config = LifeConfig::parse(yaml).unwrap();
        assert_eq!(config.world.height, 12);
        assert_eq!(config.world.width, 100);
        assert_eq!(config.server, HttpConfig::default());
    }

    #[test]
    fn parse_server_section() {
        let yaml = "server:\n  host: \"127.0.0.1\"\n  port: 9000\n";
        let config = LifeConfig::parse(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.world, WorldConfig::default());
    }

    #[test]
    fn project_config_uses_server_section() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("life-config.yaml");
        let contents = std::fs::read_to_string(path).unwrap();
        let config = LifeConfig::parse(&contents).unwrap();
        assert_eq!(config.server, HttpConfig::default());
        assert!(contents.lines().any(|line| line == "server:"));
    }

    #[test]
    fn parse_empty_yaml() {
        let config = LifeConfig::parse("");
        assert_eq!(config.unwrap(), LifeConfig::default());
    }

    #[test]
    fn parse_rejects_unknown_strategy() {
        let yaml = "world:\n  populate_strategy: shuffle\n";
        assert!(matches!(LifeConfig::parse(yaml), Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn parse_rejects_negative_dimensions() {
        let yaml = "world:\n  height: -3\n";
        assert!(LifeConfig::parse(yaml).is_err());
    }

    #[test]
    fn overrides_replace_host_and_port() {
        let vars = BTreeMap::from([
            ("LIFE_HOST", "127.0.0.1".to_owned()),
            ("LIFE_PORT", "9999".to_owned()),
        ]);
        let mut http = HttpConfig::default();
        http.apply_overrides(|key| vars.get(key).cloned());
        assert_eq!(http.host, "127.0.0.1");
        assert_eq!(http.port, 9999);
    }

    #[test]
    fn invalid_port_override_is_ignored() {
        let mut http = HttpConfig::default();
        http.apply_overrides(|key| (key == "LIFE_PORT").then(|| "not-a-port".to_owned()));
        assert_eq!(http.port, 8081);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = LifeConfig::from_file(Path::new("/nonexistent/life-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("life-config.yaml");
        if path.exists() {
            let config = LifeConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
