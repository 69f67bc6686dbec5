//! SQLite bootstrap for the school document store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Apply schema migrations before handing a connection out.
//!
//! Failures surface as `StoreError`; this layer has no error type of its own.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// Logical database name used in diagnostics.
pub const DB_NAME: &str = "SchoolDB";
