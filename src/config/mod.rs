//! Configuration management for calcpad
//!
//! This module handles loading and parsing configuration from:
//! 1. Embedded default_config.toml (compile-time defaults)
//! 2. User config at ~/.config/calcpad/config.toml (or platform equivalent)
//! 3. An explicit file passed by the caller
//!
//! Missing sections and fields fall back to the defaults via serde.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = include_str!("../../default_config.toml");

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub keys: KeysConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keys: KeysConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Key identifier sets, one per key class
///
/// The sets must be disjoint; `Keymap::new` rejects configurations where
/// they are not, or where an edit key is not a digit, `.` or `±`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeysConfig {
    #[serde(default = "default_clear_key")]
    pub clear: String,
    #[serde(default = "default_edit_keys")]
    pub edit: Vec<String>,
    #[serde(default = "default_operator_keys")]
    pub operator: Vec<String>,
    #[serde(default = "default_evaluate_keys")]
    pub evaluate: Vec<String>,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            clear: default_clear_key(),
            edit: default_edit_keys(),
            operator: default_operator_keys(),
            evaluate: default_evaluate_keys(),
        }
    }
}

fn default_clear_key() -> String {
    "clear".to_string()
}

fn default_edit_keys() -> Vec<String> {
    let mut keys: Vec<String> = ('0'..='9').map(String::from).collect();
    keys.push(".".to_string());
    keys.push("\u{b1}".to_string());
    keys
}

fn default_operator_keys() -> Vec<String> {
    ["+", "-", "*", "/"].iter().map(|s| s.to_string()).collect()
}

fn default_evaluate_keys() -> Vec<String> {
    vec!["=".to_string()]
}

/// Logging settings for the driver binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Show timestamps on console output
    #[serde(default = "default_true")]
    pub timestamps: bool,
    /// Enable rotating file output
    #[serde(default)]
    pub file_output: bool,
    /// Log file directory (platform data dir when unset)
    #[serde(default)]
    pub file_path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: true,
            file_output: false,
            file_path: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration with fallback chain:
    /// 1. User config ~/.config/calcpad/config.toml
    /// 2. Embedded default_config.toml
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                let config = Self::load_from_file(&user_config_path)?;
                tracing::info!("Loaded user config from {:?}", user_config_path);
                return Ok(config);
            }
        }

        toml::from_str(DEFAULT_CONFIG).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("default_config.toml"),
            reason: e.to_string(),
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the user config path (~/.config/calcpad/config.toml)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config_dir| config_dir.join("calcpad").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn embedded_defaults_parse() {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.keys.clear, "clear");
        assert_eq!(config.keys.edit.len(), 12);
        assert_eq!(config.keys.operator, ["+", "-", "*", "/"]);
        assert_eq!(config.keys.evaluate, ["="]);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn embedded_defaults_match_the_serde_defaults() {
        let embedded: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        let derived = AppConfig::default();
        assert_eq!(embedded.keys.clear, derived.keys.clear);
        assert_eq!(embedded.keys.edit, derived.keys.edit);
        assert_eq!(embedded.keys.operator, derived.keys.operator);
        assert_eq!(embedded.keys.evaluate, derived.keys.evaluate);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.keys.clear, "clear");
        assert_eq!(config.keys.edit, default_edit_keys());
    }

    #[test]
    fn load_from_file_reads_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[keys]\nclear = \"AC\"\nevaluate = [\"=\", \"Enter\"]").unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.keys.clear, "AC");
        assert_eq!(config.keys.evaluate, ["=", "Enter"]);
        // untouched sections keep their defaults
        assert_eq!(config.keys.operator, default_operator_keys());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load_from_file(Path::new("/nonexistent/calcpad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "keys = not toml").unwrap();
        let err = AppConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
