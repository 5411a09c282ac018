//! Configuration System
//!
//! Handles loading configuration from TOML and environment variables.
//! The web front-end embeds `zenlife.toml` at build time; native callers can
//! also load a file from disk.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub countdown: CountdownConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bill countdown configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountdownConfig {
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u32,

    #[serde(default = "default_due_soon_days")]
    pub due_soon_days: i64,
}

fn default_tick_interval() -> u32 {
    1000 // 1 second
}

fn default_due_soon_days() -> i64 {
    2
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            due_soon_days: default_due_soon_days(),
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_app_name() -> String {
    "ZenLife".to_string()
}

fn default_currency_symbol() -> String {
    "৳".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown names fall back to INFO
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::INFO)
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: None,
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                error,
            },
            other => other,
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_lookup(path, env_var)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    fn load_with_lookup(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        config.apply_overrides(lookup);
        if let Err(e) = config.validate() {
            tracing::warn!("Ignoring environment overrides: {}", e);
            return Config::default();
        }
        config
    }

    /// Check values that would break the pages
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "countdown.tick_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.countdown.due_soon_days < 0 {
            return Err(ConfigError::Invalid(
                "countdown.due_soon_days must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply `ZENLIFE_*` overrides read through `lookup`; unparsable
    /// numbers leave the current value in place
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Countdown overrides
        if let Some(interval) = lookup("ZENLIFE_TICK_INTERVAL_MS") {
            if let Ok(ms) = interval.trim().parse() {
                self.countdown.tick_interval_ms = ms;
            }
        }
        if let Some(days) = lookup("ZENLIFE_DUE_SOON_DAYS") {
            if let Ok(d) = days.trim().parse() {
                self.countdown.due_soon_days = d;
            }
        }

        // Display overrides
        if let Some(symbol) = lookup("ZENLIFE_CURRENCY") {
            self.display.currency_symbol = symbol;
        }

        // Logging overrides
        if let Some(level) = lookup("ZENLIFE_LOG_LEVEL") {
            self.logging.level = level;
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            countdown: CountdownConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config {path:?}: {error}")]
    Parse { path: Option<PathBuf>, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# ZenLife Configuration
#
# Environment variables override these settings:
# - ZENLIFE_TICK_INTERVAL_MS
# - ZENLIFE_DUE_SOON_DAYS
# - ZENLIFE_CURRENCY
# - ZENLIFE_LOG_LEVEL

[countdown]
# How often bill countdowns refresh (ms)
tick_interval_ms = 1000

# Show the "due soon" banner when a bill has fewer days than this left
due_soon_days = 2

[display]
app_name = "ZenLife"
currency_symbol = "৳"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_round_trips() {
        let config = Config::from_toml_str(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str("[countdown]\ndue_soon_days = 5\n").unwrap();

        assert_eq!(config.countdown.due_soon_days, 5);
        assert_eq!(config.countdown.tick_interval_ms, 1000);
        assert_eq!(config.display.currency_symbol, "৳");
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = Config::from_toml_str("[countdown]\ntick_interval_ms = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml_str("[countdown\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\ncurrency_symbol = \"$\"\n[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.logging.level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_bad_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "countdown = 3").unwrap();

        match Config::load(file.path()).unwrap_err() {
            ConfigError::Parse { path, .. } => assert_eq!(path.as_deref(), Some(file.path())),
            other => panic!("unexpected error: {}", other),
        }
    }

    fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_overrides_apply_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[countdown]\ntick_interval_ms = 500\n[display]\ncurrency_symbol = \"$\"").unwrap();

        let config = Config::load_with_lookup(
            file.path(),
            vars(&[
                ("ZENLIFE_TICK_INTERVAL_MS", "250"),
                ("ZENLIFE_DUE_SOON_DAYS", "5"),
                ("ZENLIFE_CURRENCY", "€"),
                ("ZENLIFE_LOG_LEVEL", "trace"),
            ]),
        )
        .unwrap();

        assert_eq!(config.countdown.tick_interval_ms, 250);
        assert_eq!(config.countdown.due_soon_days, 5);
        assert_eq!(config.display.currency_symbol, "€");
        assert_eq!(config.display.app_name, "ZenLife");
        assert_eq!(config.logging.level_filter(), LevelFilter::TRACE);
    }

    #[test]
    fn test_unparsable_override_keeps_file_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[countdown]\ntick_interval_ms = 500").unwrap();

        let config = Config::load_with_lookup(
            file.path(),
            vars(&[("ZENLIFE_TICK_INTERVAL_MS", "soon"), ("ZENLIFE_DUE_SOON_DAYS", " 3 ")]),
        )
        .unwrap();

        assert_eq!(config.countdown.tick_interval_ms, 500);
        assert_eq!(config.countdown.due_soon_days, 3);
    }

    #[test]
    fn test_load_with_overrides_rejects_zero_interval() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[countdown]\ntick_interval_ms = 500").unwrap();

        let err = Config::load_with_lookup(file.path(), vars(&[("ZENLIFE_TICK_INTERVAL_MS", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_overrides_without_file() {
        let config = Config::from_lookup(vars(&[("ZENLIFE_CURRENCY", "$"), ("ZENLIFE_DUE_SOON_DAYS", "0")]));

        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.countdown.due_soon_days, 0);
        assert_eq!(config.countdown.tick_interval_ms, 1000);
    }

    #[test]
    fn test_invalid_overrides_fall_back_to_defaults() {
        let config = Config::from_lookup(vars(&[
            ("ZENLIFE_CURRENCY", "$"),
            ("ZENLIFE_DUE_SOON_DAYS", "-1"),
        ]));
        assert_eq!(config, Config::default());

        let config = Config::from_lookup(vars(&[("ZENLIFE_TICK_INTERVAL_MS", "0")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_with_env_reads_process_env() {
        // Only this test touches the process environment
        std::env::set_var("ZENLIFE_CURRENCY", "£");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\napp_name = \"Home\"").unwrap();

        let loaded = Config::load_with_env(file.path());
        let bare = Config::from_env();
        std::env::remove_var("ZENLIFE_CURRENCY");

        let loaded = loaded.unwrap();
        assert_eq!(loaded.display.app_name, "Home");
        assert_eq!(loaded.display.currency_symbol, "£");
        assert_eq!(bare.display.currency_symbol, "£");
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let logging = LoggingConfig {
            level: "chatty".to_string(),
        };
        assert_eq!(logging.level_filter(), LevelFilter::INFO);
    }
}
