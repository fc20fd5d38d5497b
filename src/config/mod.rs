//! Configuration management for tsexport.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! tsexport uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [storage]
//! # Base storage directory; export roots are created and reported
//! # relative to it. ${TSDATA} is substituted from the environment.
//! base_dir = "${TSDATA}"
//!
//! [backend]
//! data_dir = "/var/lib/tsexport/datasets"
//!
//! [export]
//! pattern = "{DSname}/{fid}.csv"
//! workers = 8
//! overwrite = false
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, BackendConfig, ExportConfig, LoggingConfig, StorageConfig, TsexportConfig,
};
