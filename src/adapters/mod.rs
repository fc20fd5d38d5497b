//! External integrations
//!
//! Adapters wrap everything outside the export core. Currently that is the
//! dataset backend boundary: where series identifiers, metadata and points
//! come from.

pub mod backend;
