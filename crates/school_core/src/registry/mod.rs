//! In-memory registries that own live resources and services.
//!
//! # Responsibility
//! - Act as the authoritative arena for reservation and enrollment state.
//! - Stay independent of persistence; callers snapshot into the store.
//!
//! # Invariants
//! - Entities are keyed by id; inserting an existing id replaces it.
//! - Listing order is id order.

pub mod resource_registry;
pub mod service_registry;

pub use resource_registry::{
    ResourceRegistry, HISTORY_PROJECTOR_ID, MATH_CALCULATOR_ID, SCIENCE_LAB_ID,
};
pub use service_registry::ServiceRegistry;
