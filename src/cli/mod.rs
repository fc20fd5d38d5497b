//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for tsexport using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// tsexport - Timeseries dataset CSV export tool
#[derive(Parser, Debug)]
#[command(name = "tsexport")]
#[command(version, about, long_about = None)]
#[command(author = "Tsexport Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "tsexport.toml", env = "TSEXPORT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TSEXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export all timeseries of a dataset to a CSV directory tree
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
