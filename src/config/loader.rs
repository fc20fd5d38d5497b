//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::TsexportConfig;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into TsexportConfig
/// 4. Applies environment variable overrides (TSEXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use tsexport::config::load_config;
///
/// let config = load_config("tsexport.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<TsexportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: TsexportConfig = toml::from_str(&contents)
        .map_err(|e| ExportError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ExportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched so documentation examples in the file
/// don't require the variables they mention.
///
/// # Errors
///
/// Returns an error naming every referenced environment variable that is
/// not set.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the TSEXPORT_* prefix
///
/// Environment variables follow the pattern: TSEXPORT_<SECTION>_<KEY>
/// For example: TSEXPORT_STORAGE_BASE_DIR, TSEXPORT_EXPORT_WORKERS
fn apply_env_overrides(config: &mut TsexportConfig) {
    if let Ok(val) = std::env::var("TSEXPORT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("TSEXPORT_STORAGE_BASE_DIR") {
        config.storage.base_dir = val;
    }

    if let Ok(val) = std::env::var("TSEXPORT_BACKEND_DATA_DIR") {
        config.backend.data_dir = val;
    }

    if let Ok(val) = std::env::var("TSEXPORT_EXPORT_PATTERN") {
        config.export.pattern = val;
    }
    if let Ok(val) = std::env::var("TSEXPORT_EXPORT_WORKERS") {
        if let Ok(workers) = val.parse() {
            config.export.workers = workers;
        }
    }
    if let Ok(val) = std::env::var("TSEXPORT_EXPORT_OVERWRITE") {
        config.export.overwrite = val.parse().unwrap_or(false);
    }

    if let Ok(val) = std::env::var("TSEXPORT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("TSEXPORT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
