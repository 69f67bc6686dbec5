//! School domain model.
//!
//! # Responsibility
//! - Define the entities recorded by the school core.
//! - Keep relationship mutation inside the owning entity's methods.
//!
//! # Invariants
//! - Every entity is identified by a caller-supplied string id.
//! - Relationships are stored as ids and resolved through registries or
//!   the facade arenas, never as live handles.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod additional_service;
pub mod course;
pub mod person;
pub mod resource;
pub mod student;
pub mod teacher;

/// Rejected string value for one of the model's closed enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindParseError {
    pub family: &'static str,
    pub value: String,
}

impl Display for KindParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported {} `{}`", self.family, self.value)
    }
}

impl Error for KindParseError {}
