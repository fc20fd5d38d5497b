//! Core business logic
//!
//! This module contains the export pipeline:
//! - [`path`] - placeholder resolution, sanitization, collision detection
//! - [`export`] - CSV writing and run orchestration

pub mod export;
pub mod path;
