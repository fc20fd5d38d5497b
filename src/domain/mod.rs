//! Domain models and types for tsexport.
//!
//! This module contains the core domain types and business rules:
//!
//! - **Strongly-typed identifiers** ([`DatasetName`], [`SeriesFid`])
//! - **Series data** ([`Series`], [`DataPoint`], [`Metadata`], [`MetaValue`])
//! - **Error types** ([`ExportError`], [`BackendError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! tsexport uses the newtype pattern for identifiers to prevent mixing
//! different kinds of names:
//!
//! ```rust
//! use tsexport::domain::{DatasetName, SeriesFid};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dsname = DatasetName::new("DS1")?;
//! let fid = SeriesFid::new("WS1_FLIGHT_7")?;
//!
//! // This won't compile - type safety prevents mixing names
//! // let wrong: DatasetName = fid;  // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ExportError>`]:
//!
//! ```rust
//! use tsexport::domain::{ExportError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(ExportError::Pattern("pattern must not be empty".to_string()))
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod series;

// Re-export commonly used types for convenience
pub use errors::{BackendError, ExportError};
pub use ids::{DatasetName, SeriesFid};
pub use result::Result;
pub use series::{DataPoint, MetaValue, Metadata, Series};
