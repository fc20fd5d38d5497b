//! Configuration schema types
//!
//! This module defines the configuration structure for tsexport.

use crate::core::export::coordinator::{DEFAULT_PATTERN, DEFAULT_WORKERS};
use serde::{Deserialize, Serialize};

/// Main tsexport configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TsexportConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Base storage directory settings
    pub storage: StorageConfig,

    /// Dataset backend settings
    pub backend: BackendConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TsexportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.storage.validate()?;
        self.backend.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Base storage directory configuration
///
/// The export root of every run is created beneath `base_dir`, and the
/// output path is reported relative to it so downstream consumers resolve
/// it against their own mount point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base storage directory (the original deployments call this TSDATA)
    pub base_dir: String,
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_dir.trim().is_empty() {
            return Err("storage.base_dir must not be empty".to_string());
        }
        Ok(())
    }
}

/// Dataset backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Directory holding one `<dsname>.json` document per dataset
    pub data_dir: String,
}

impl BackendConfig {
    fn validate(&self) -> Result<(), String> {
        if self.data_dir.trim().is_empty() {
            return Err("backend.data_dir must not be empty".to_string());
        }
        Ok(())
    }
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default destination pattern, overridable per run from the CLI
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Worker pool size for per-series tasks (1 disables concurrency)
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Allow exporting into a non-empty pre-existing export root
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            workers: default_workers(),
            overwrite: false,
        }
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.pattern.trim().is_empty() {
            return Err("export.pattern must not be empty".to_string());
        }
        if self.workers == 0 {
            return Err("export.workers must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for rotated log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: "daily" or "hourly"
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must not be empty when file logging is enabled".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> TsexportConfig {
        toml::from_str(
            r#"
            [storage]
            base_dir = "/data/ts"

            [backend]
            data_dir = "/data/datasets"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = minimal();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.export.pattern, "{DSname}/{fid}.csv");
        assert_eq!(config.export.workers, DEFAULT_WORKERS);
        assert!(!config.export.overwrite);
        assert!(!config.logging.local_enabled);
        config.validate().unwrap();
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = minimal();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_base_dir_rejected() {
        let mut config = minimal();
        config.storage.base_dir = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let mut config = minimal();
        config.export.pattern = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = minimal();
        config.export.workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config = minimal();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }
}
