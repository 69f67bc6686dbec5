//! Additional-service arena with capacity-bounded enrollment.
//!
//! # Invariants
//! - Enrollment updates the service before the student; a capacity failure
//!   leaves both untouched.

use crate::error::{EntityKind, SchoolError, SchoolResult};
use crate::model::additional_service::{AdditionalService, ServiceType};
use crate::model::student::Student;
use log::info;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct ServiceRegistry {
    services: BTreeMap<String, AdditionalService>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new service and returns it. An existing id is replaced.
    pub fn create_service(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ServiceType,
        schedule: impl Into<String>,
        location: impl Into<String>,
        capacity: u32,
    ) -> &AdditionalService {
        self.insert_service(AdditionalService::new(
            id, name, kind, schedule, location, capacity,
        ))
    }

    /// Registers an already built service, replacing any with the same id.
    pub fn insert_service(&mut self, service: AdditionalService) -> &AdditionalService {
        let id = service.id.clone();
        self.services.insert(id.clone(), service);
        &self.services[&id]
    }

    pub fn delete_service(&mut self, id: &str) -> Option<AdditionalService> {
        self.services.remove(id)
    }

    pub fn get_service(&self, id: &str) -> Option<&AdditionalService> {
        self.services.get(id)
    }

    pub fn get_all_services(&self) -> Vec<&AdditionalService> {
        self.services.values().collect()
    }

    pub fn get_services_by_type(&self, kind: ServiceType) -> Vec<&AdditionalService> {
        self.services
            .values()
            .filter(|service| service.kind == kind)
            .collect()
    }

    pub fn enroll_student_in_service(
        &mut self,
        service_id: &str,
        student: &mut Student,
    ) -> SchoolResult<()> {
        let service = self.service_mut(service_id)?;
        service.enroll_student(student.id())?;
        student.add_service(service_id);
        info!(
            "event=service_enroll module=registry status=ok service_id={service_id} student_id={} enrolled={}",
            student.id(),
            service.enrolled_count()
        );
        Ok(())
    }

    pub fn unenroll_student_from_service(
        &mut self,
        service_id: &str,
        student: &mut Student,
    ) -> SchoolResult<()> {
        let service = self.service_mut(service_id)?;
        service.unenroll_student(student.id());
        student.drop_service(service_id);
        info!(
            "event=service_unenroll module=registry status=ok service_id={service_id} student_id={}",
            student.id()
        );
        Ok(())
    }

    /// Services with at least one open slot.
    pub fn get_available_services(&self) -> Vec<&AdditionalService> {
        self.services
            .values()
            .filter(|service| service.has_open_slot())
            .collect()
    }

    fn service_mut(&mut self, id: &str) -> SchoolResult<&mut AdditionalService> {
        self.services
            .get_mut(id)
            .ok_or_else(|| SchoolError::not_found(EntityKind::Service, id))
    }
}
