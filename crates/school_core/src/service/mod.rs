//! Use-case layer composed over the model, registries and store.
//!
//! # Responsibility
//! - Build subject-specific courses (`CourseFactory`).
//! - Expose the single entry point used by UI/CLI collaborators (`School`).
//!
//! # Invariants
//! - Collaborators never reach the store or registries except through here.

pub mod course_factory;
pub mod school;
