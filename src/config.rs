//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides; command
//! line flags are applied on top by the binaries.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::charts::{ChartSettings, PieScope, DEFAULT_BUBBLE_SIZE_MAX, DEFAULT_TOP_N};

/// Where the Gapminder table is published
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/gapminder_unfiltered.csv";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub charts: ChartsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset source configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatasetConfig {
    /// HTTP(S) URL or local path of the CSV
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_source() -> String {
    DEFAULT_DATASET_URL.to_string()
}

fn default_fetch_timeout() -> u64 {
    30
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl DatasetConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// API server configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Chart builder configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartsConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    #[serde(default = "default_bubble_size_max")]
    pub bubble_size_max: f64,

    #[serde(default)]
    pub pie_scope: PieScope,

    /// Countries selected in the time series when a session starts
    #[serde(default = "crate::dashboard::default_countries")]
    pub default_countries: Vec<String>,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_bubble_size_max() -> f64 {
    DEFAULT_BUBBLE_SIZE_MAX
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            bubble_size_max: default_bubble_size_max(),
            pie_scope: PieScope::default(),
            default_countries: crate::dashboard::default_countries(),
        }
    }
}

impl ChartsConfig {
    pub fn settings(&self) -> ChartSettings {
        ChartSettings {
            top_n: self.top_n,
            bubble_size_max: self.bubble_size_max,
            pie_scope: self.pie_scope,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub fn filter_directive(&self) -> String {
        format!("countryscope={},tower_http={}", self.level, self.level)
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("countryscope").join("config.toml")),
            Some(PathBuf::from("/etc/countryscope/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Dataset overrides
        if let Some(source) = var("COUNTRYSCOPE_DATASET") {
            self.dataset.source = source;
        }

        // API overrides
        if let Some(host) = var("COUNTRYSCOPE_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("COUNTRYSCOPE_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid COUNTRYSCOPE_PORT: {}", port),
            }
        }

        // Chart overrides
        if let Some(scope) = var("COUNTRYSCOPE_PIE_SCOPE") {
            match scope.parse() {
                Ok(s) => self.charts.pie_scope = s,
                Err(e) => tracing::warn!("Ignoring COUNTRYSCOPE_PIE_SCOPE: {}", e),
            }
        }

        // Logging overrides
        if let Some(level) = var("COUNTRYSCOPE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("COUNTRYSCOPE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            api: ApiConfig::default(),
            charts: ChartsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Countryscope Configuration
#
# Environment variables override these settings:
# - COUNTRYSCOPE_DATASET
# - COUNTRYSCOPE_HOST
# - COUNTRYSCOPE_PORT
# - COUNTRYSCOPE_PIE_SCOPE
# - COUNTRYSCOPE_LOG_LEVEL
# - COUNTRYSCOPE_LOG_FORMAT

[dataset]
# HTTP(S) URL or local path of the indicator CSV
source = "{url}"

# Timeout for fetching the dataset at startup (seconds)
fetch_timeout_secs = 30

[api]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 8050

# Allowed CORS origins (empty allows any origin)
cors_origins = []

[charts]
# Number of bars in the top population chart
top_n = 15

# Largest bubble diameter in pixels
bubble_size_max = 60.0

# Rows summed by the continent pie:
# - all_rows: every row of the table, zoom on the time series is ignored
# - latest_snapshot: latest row per country inside the zoomed years
pie_scope = "all_rows"

# Countries selected in the time series when the page opens
default_countries = ["United States", "China", "India"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        url = DEFAULT_DATASET_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse(
            r#"
[api]
port = 9000

[charts]
pie_scope = "latest_snapshot"
"#,
        )
        .unwrap();

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.charts.pie_scope, PieScope::LatestSnapshot);
        assert_eq!(config.charts.top_n, 15);
        assert_eq!(config.dataset.source, DEFAULT_DATASET_URL);
    }

    #[test]
    fn test_invalid_pie_scope_rejected() {
        assert!(Config::parse("[charts]\npie_scope = \"sometimes\"").is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("COUNTRYSCOPE_DATASET", "/data/gapminder.csv"),
            ("COUNTRYSCOPE_PORT", "not-a-port"),
            ("COUNTRYSCOPE_PIE_SCOPE", "latest_snapshot"),
            ("COUNTRYSCOPE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.dataset.source, "/data/gapminder.csv");
        assert_eq!(config.api.port, 8050);
        assert_eq!(config.charts.pie_scope, PieScope::LatestSnapshot);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dataset]\nsource = \"local.csv\"\nfetch_timeout_secs = 5").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dataset.source, "local.csv");
        assert_eq!(config.dataset.fetch_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/countryscope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_charts_settings() {
        let charts = ChartsConfig {
            top_n: 10,
            ..ChartsConfig::default()
        };
        let settings = charts.settings();
        assert_eq!(settings.top_n, 10);
        assert_eq!(settings.bubble_size_max, DEFAULT_BUBBLE_SIZE_MAX);
    }
}
