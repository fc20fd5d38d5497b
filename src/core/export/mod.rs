//! Export orchestration
//!
//! This module contains the run driver and its collaborators:
//! - [`coordinator`] - per-run state machine and worker pool
//! - [`writer`] - CSV file writing
//! - [`summary`] - run outcome reporting

pub mod coordinator;
pub mod summary;
pub mod writer;

pub use coordinator::ExportCoordinator;
pub use summary::ExportOutcome;
pub use writer::write_csv;
