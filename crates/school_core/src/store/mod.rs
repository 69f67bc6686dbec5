//! Keyed document store over SQLite and the generic access object.
//!
//! # Responsibility
//! - Own the lazily opened store handle (`Store`).
//! - Map typed entities to named collections (`Record`, `Dao`).
//! - Keep SQL and JSON encoding inside the persistence boundary.
//!
//! # Invariants
//! - The underlying database is opened at most once per `Store`.
//! - Every write runs in its own transaction; a failed write leaves the
//!   collection unchanged.
//! - Derived queries scan `get_all()`; no secondary index exists.

use crate::db::DB_NAME;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod dao;
mod filters;
mod handle;

pub use dao::{Dao, Record};
pub use handle::{Store, StoreLocation};

pub type StoreResult<T> = Result<T, StoreError>;

/// Named record collection inside the school database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Students,
    Courses,
    Services,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Self::Students, Self::Courses, Self::Services];

    /// Table name; also the collection's stable external name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Courses => "courses",
            Self::Services => "services",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage failure for any store, migration or access-object operation.
#[derive(Debug)]
pub enum StoreError {
    /// An operation ran before `Store::open` completed.
    NotInitialized,
    /// Open, migration or write transaction failed inside SQLite.
    Sqlite(rusqlite::Error),
    /// The database was written by a newer collection schema.
    UnsupportedSchema { found: u32, supported: u32 },
    Serialization(serde_json::Error),
    /// A previous operation panicked while holding the connection.
    Poisoned,
    Task(tokio::task::JoinError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "{DB_NAME} not initialized"),
            Self::Sqlite(err) => write!(f, "{DB_NAME} error: {err}"),
            Self::UnsupportedSchema { found, supported } => write!(
                f,
                "{DB_NAME} collections use schema version {found}; this build reads up to {supported}"
            ),
            Self::Serialization(err) => write!(f, "invalid record encoding: {err}"),
            Self::Poisoned => write!(f, "{DB_NAME} connection poisoned by an earlier panic"),
            Self::Task(err) => write!(f, "storage task failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::Task(err) => Some(err),
            Self::NotInitialized | Self::UnsupportedSchema { .. } | Self::Poisoned => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Task(value)
    }
}
