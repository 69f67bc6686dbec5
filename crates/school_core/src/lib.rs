//! Core domain logic for the school records system.
//! This crate owns enrollment, reservation and capacity invariants and the
//! persistence of entity snapshots.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod registry;
pub mod service;
pub mod store;

pub use config::{ConfigError, SchoolConfig};
pub use error::{EntityKind, SchoolError, SchoolResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::additional_service::{AdditionalService, ServiceType};
pub use model::course::Course;
pub use model::person::Person;
pub use model::resource::{Resource, ResourceType};
pub use model::student::Student;
pub use model::teacher::Teacher;
pub use model::KindParseError;
pub use registry::{ResourceRegistry, ServiceRegistry};
pub use service::course_factory::CourseFactory;
pub use service::school::{School, SchoolStatistics};
pub use store::{Collection, Dao, Record, Store, StoreError, StoreLocation, StoreResult};
