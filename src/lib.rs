// tsexport - Timeseries dataset CSV export tool
// Copyright (c) 2026 Tsexport Contributors
// Licensed under the MIT License

//! # tsexport - Timeseries dataset → CSV tree export
//!
//! tsexport exports all timeseries of a named dataset into a directory tree
//! of CSV files, one file per series. The destination of each file is
//! computed from a user-supplied pattern containing `{placeholder}` tokens
//! resolved against the series metadata plus two reserved keywords.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Resolving** `{placeholder}` patterns against series metadata, with
//!   the reserved `{fid}` and `{DSname}` keywords always available
//! - **Sanitizing** resolved paths into filesystem-safe relative paths that
//!   cannot escape the export root
//! - **Falling back** deterministically to `{fid}.csv` when a pattern
//!   references metadata a series does not carry
//! - **Detecting collisions** between series that resolve to the same path,
//!   aborting the run instead of silently overwriting
//! - **Writing** two-column `;`-delimited CSV files, one per series
//!
//! ## Architecture
//!
//! tsexport follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (path engine, export orchestration)
//! - [`adapters`] - External integrations (dataset backends)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tsexport::adapters::backend::LocalJsonBackend;
//! use tsexport::core::export::ExportCoordinator;
//! use tsexport::domain::DatasetName;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = Arc::new(LocalJsonBackend::new("/var/lib/tsexport/datasets"));
//!     let coordinator = ExportCoordinator::new(backend, "/data/ts")
//!         .with_pattern("{DSname}/{city}/{fid}.csv");
//!
//!     let dataset = DatasetName::new("PORTFOLIO")?;
//!     let outcome = coordinator.execute_export(&dataset).await?;
//!
//!     println!("Exported {} series to {}", outcome.series_count, outcome.root.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! tsexport uses the [`domain::ExportError`] type for all errors. The only
//! locally recovered condition is a per-series pattern resolution failure,
//! which switches that series to the `{fid}.csv` fallback; everything else
//! (duplicate paths, I/O failures, backend failures) aborts the run.
//!
//! ## Logging
//!
//! tsexport uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(dataset = "PORTFOLIO", "Starting export");
//! warn!(fid = "WS1_FLIGHT_7", "Pattern did not resolve, using fallback");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
