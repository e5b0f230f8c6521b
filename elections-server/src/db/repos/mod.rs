//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Uses JOINs for list operations (no N+1)
//! - Uses transactions for multi-row writes

pub mod divisions;

pub use divisions::{DbError, DivisionRepository, PgDivisionRepo};
