//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "tsexport.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing tsexport configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set the TSDATA environment variable (or edit storage.base_dir)");
                println!("  3. Validate configuration: tsexport validate-config");
                println!("  4. Run export: tsexport export <DATASET>");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# tsexport Configuration File
# Timeseries dataset CSV export tool

[application]
log_level = "info"  # trace | debug | info | warn | error

[storage]
# Base storage directory. Export roots are created beneath it and the
# resulting path is reported relative to it.
base_dir = "${TSDATA}"

[backend]
# Directory holding one <dsname>.json document per dataset.
data_dir = "/var/lib/tsexport/datasets"

[export]
# Destination pattern. {fid} and {DSname} are always resolvable; any other
# placeholder is a metadata key lookup. A series whose metadata misses a
# referenced key falls back to "{fid}.csv".
pattern = "{DSname}/{fid}.csv"
# Worker pool size for per-series tasks (1 disables concurrency).
workers = 8
# Allow exporting into a non-empty pre-existing export root.
overwrite = false

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_creates_parseable_config() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("tsexport.toml");
        let args = InitArgs {
            output: output.to_str().unwrap().to_string(),
            force: false,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 0);

        // The generated file must parse once TSDATA is substituted.
        let contents = std::fs::read_to_string(&output)
            .unwrap()
            .replace("${TSDATA}", "/data/ts");
        let config: crate::config::TsexportConfig = toml::from_str(&contents).unwrap();
        config.validate().unwrap();
    }

    #[tokio::test]
    async fn test_init_refuses_existing_file_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("tsexport.toml");
        std::fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_str().unwrap().to_string(),
            force: false,
        };
        let code = args.execute().await.unwrap();
        assert_eq!(code, 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "existing");
    }

    #[tokio::test]
    async fn test_init_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("tsexport.toml");
        std::fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_str().unwrap().to_string(),
            force: true,
        };
        let code = args.execute().await.unwrap();
        assert_eq!(code, 0);
        assert!(std::fs::read_to_string(&output)
            .unwrap()
            .contains("[storage]"));
    }
}
