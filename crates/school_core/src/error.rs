//! Domain error surface shared by model, registries and the facade.
//!
//! # Responsibility
//! - Name the four failure kinds callers are expected to branch on.
//! - Carry storage failures through unchanged via `Storage`.
//!
//! # Invariants
//! - Errors are surfaced to the immediate caller; core never retries.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SchoolResult<T> = Result<T, SchoolError>;

/// Entity family used to qualify `NotFound` lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Student,
    Course,
    Resource,
    Service,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Course => "course",
            Self::Resource => "resource",
            Self::Service => "service",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum SchoolError {
    /// Lookup by id failed in a registry or arena.
    NotFound { kind: EntityKind, id: String },
    /// Service enrollment attempted at full capacity.
    CapacityExceeded { service_id: String, capacity: u32 },
    /// Reserve attempted on an already reserved resource.
    ResourceUnavailable(String),
    /// Store not initialized, open failure or aborted transaction.
    Storage(StoreError),
}

impl SchoolError {
    pub(crate) fn not_found(kind: EntityKind, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl Display for SchoolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} with id `{id}` not found"),
            Self::CapacityExceeded {
                service_id,
                capacity,
            } => write!(
                f,
                "service `{service_id}` is at full capacity ({capacity})"
            ),
            Self::ResourceUnavailable(id) => write!(f, "resource `{id}` is not available"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SchoolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for SchoolError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityKind, SchoolError};
    use crate::store::StoreError;

    #[test]
    fn display_names_the_entity_kind_and_id() {
        let err = SchoolError::not_found(EntityKind::Service, "sv-1");
        assert_eq!(err.to_string(), "service with id `sv-1` not found");
    }

    #[test]
    fn storage_errors_keep_their_source() {
        let err = SchoolError::from(StoreError::NotInitialized);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("not initialized"));
    }
}
