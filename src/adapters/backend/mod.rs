//! Dataset backend adapters
//!
//! The export core fetches series identifiers, metadata and points through
//! the [`DatasetBackend`] trait and never second-guesses the backend's own
//! timeout or retry policy; any backend failure is fatal to the run.
//!
//! Two implementations ship with the crate:
//! - [`LocalJsonBackend`] - datasets stored as one JSON document per
//!   dataset in a local directory
//! - [`InMemoryBackend`] - programmatically populated, used in tests and
//!   for embedding

pub mod local;
pub mod memory;
pub mod traits;

pub use local::LocalJsonBackend;
pub use memory::InMemoryBackend;
pub use traits::DatasetBackend;
