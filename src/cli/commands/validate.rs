//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating the
//! tsexport configuration file.

use crate::config::load_config;
use crate::core::path::validate_pattern;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // The loader already validated the schema; also check the default
        // pattern's placeholder syntax so a bad pattern fails here instead
        // of at export time.
        if let Err(e) = validate_pattern(&config.export.pattern) {
            println!("❌ Configured export pattern is invalid");
            println!("   Error: {e}");
            return Ok(2);
        }

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Base Directory: {}", config.storage.base_dir);
        println!("  Dataset Directory: {}", config.backend.data_dir);
        println!("  Pattern: {}", config.export.pattern);
        println!("  Workers: {}", config.export.workers);
        println!("  Overwrite: {}", config.export.overwrite);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );

        Ok(0)
    }
}
