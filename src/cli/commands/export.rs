//! Export command implementation
//!
//! This module implements the `export` command for exporting all series of
//! a dataset to a CSV directory tree.

use crate::adapters::backend::LocalJsonBackend;
use crate::config::load_config;
use crate::core::export::ExportCoordinator;
use crate::domain::{DatasetName, ExportError};
use clap::Args;
use std::str::FromStr;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Name of the dataset to export
    pub dataset: String,

    /// Override the destination pattern, e.g. "{DSname}/{city}/{fid}.csv"
    #[arg(long)]
    pub pattern: Option<String>,

    /// Override the worker pool size (1 disables concurrency)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Allow exporting into a non-empty pre-existing export root
    #[arg(long)]
    pub overwrite: bool,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(pattern) = &self.pattern {
            tracing::info!(pattern = %pattern, "Overriding pattern from CLI");
            config.export.pattern = pattern.clone();
        }
        if let Some(workers) = self.workers {
            tracing::info!(workers, "Overriding worker count from CLI");
            config.export.workers = workers.max(1);
        }
        if self.overwrite {
            tracing::info!("Enabling overwrite from CLI");
            config.export.overwrite = true;
        }

        let dataset = match DatasetName::from_str(&self.dataset) {
            Ok(dataset) => dataset,
            Err(e) => {
                eprintln!("Invalid dataset name: {e}");
                return Ok(2);
            }
        };

        // Confirmation prompt (unless --yes)
        if !self.yes {
            println!("Export Configuration:");
            println!("  Dataset: {}", dataset);
            println!("  Pattern: {}", config.export.pattern);
            println!("  Base directory: {}", config.storage.base_dir);
            println!("  Workers: {}", config.export.workers);
            println!("  Overwrite: {}", config.export.overwrite);
            println!();
            print!("Proceed with export? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        let backend = Arc::new(LocalJsonBackend::new(&config.backend.data_dir));
        let coordinator = ExportCoordinator::new(backend, &config.storage.base_dir)
            .with_pattern(&config.export.pattern)
            .with_workers(config.export.workers)
            .with_overwrite(config.export.overwrite);

        println!("🚀 Starting export...");
        println!();

        let outcome = match coordinator.execute_export(&dataset).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(match e {
                    ExportError::Backend(_) => 4, // Backend error exit code
                    _ => 1,                       // Export failure exit code
                });
            }
        };

        println!("📊 Export Summary:");
        println!("  Output directory: {}", outcome.root.display());
        println!("  Series exported: {}", outcome.series_count);
        println!("  Points written: {}", outcome.points_count);
        println!("  Duration: {:.2}s", outcome.duration.as_secs_f64());
        println!();
        println!("✅ Export completed successfully!");

        Ok(0)
    }
}
