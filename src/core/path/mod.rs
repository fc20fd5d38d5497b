//! Destination path engine
//!
//! Everything that turns a user pattern plus series metadata into a safe,
//! collision-free relative path:
//!
//! - [`resolver`] - `{placeholder}` substitution against reserved keywords
//!   and series metadata
//! - [`builder`] - segment sanitization and the `{fid}.csv` fallback
//! - [`collision`] - run-scoped duplicate path detection

pub mod builder;
pub mod collision;
pub mod resolver;

pub use builder::{build_path, validate_pattern, FALLBACK_PATTERN};
pub use collision::CollisionGuard;
pub use resolver::{resolve, ResolveContext, ResolveError};
