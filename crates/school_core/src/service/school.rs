//! School facade.
//!
//! # Responsibility
//! - Compose registries, course factory and access objects into one API.
//! - Keep the in-session arenas (student roster, course catalog) that
//!   relationship operations resolve ids through.
//!
//! # Invariants
//! - Create/delete operations write the store first and touch the arena only
//!   after the write succeeded.
//! - Relationship operations mutate memory first, then persist both sides.
//!   A failed save is not rolled back; repeating the same operation re-saves
//!   both snapshots without mutating again.
//! - Entities read back from the store are plain snapshots and are never
//!   merged into the arenas.

use crate::error::{EntityKind, SchoolError, SchoolResult};
use crate::model::additional_service::{AdditionalService, ServiceType};
use crate::model::course::Course;
use crate::model::student::Student;
use crate::model::teacher::Teacher;
use crate::registry::{ResourceRegistry, ServiceRegistry};
use crate::service::course_factory::CourseFactory;
use crate::store::{Dao, Store};
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Aggregate counts over the persisted collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SchoolStatistics {
    pub total_students: usize,
    pub total_courses: usize,
    /// Persisted services that still have an open slot.
    pub total_services: usize,
    /// Distinct teacher ids referenced by persisted courses.
    pub total_teachers: usize,
}

/// Single entry point for UI/CLI collaborators.
pub struct School {
    store: Arc<Store>,
    students: Dao<Student>,
    courses: Dao<Course>,
    services: Dao<AdditionalService>,
    resources: ResourceRegistry,
    service_registry: ServiceRegistry,
    roster: BTreeMap<String, Student>,
    catalog: BTreeMap<String, Course>,
}

impl School {
    /// Wires a facade from explicitly constructed collaborators.
    pub fn new(
        store: Arc<Store>,
        resources: ResourceRegistry,
        service_registry: ServiceRegistry,
    ) -> Self {
        Self {
            students: Dao::new(Arc::clone(&store)),
            courses: Dao::new(Arc::clone(&store)),
            services: Dao::new(Arc::clone(&store)),
            store,
            resources,
            service_registry,
            roster: BTreeMap::new(),
            catalog: BTreeMap::new(),
        }
    }

    /// Facade with the default resources registered and no services.
    pub fn with_defaults(store: Arc<Store>) -> Self {
        Self::new(
            store,
            ResourceRegistry::with_default_resources(),
            ServiceRegistry::new(),
        )
    }

    /// Opens the store. Safe to call repeatedly and concurrently.
    pub async fn initialize(&self) -> SchoolResult<()> {
        self.store.open().await?;
        Ok(())
    }

    pub async fn create_student(
        &mut self,
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        grade_level: u8,
    ) -> SchoolResult<Student> {
        let student = Student::new(id, first_name, last_name, email, date_of_birth, grade_level);
        self.students.save(&student).await?;
        self.roster.insert(student.id().to_string(), student.clone());
        info!(
            "event=student_create module=school status=ok student_id={} grade_level={grade_level}",
            student.id()
        );
        Ok(student)
    }

    pub async fn delete_student(&mut self, id: &str) -> SchoolResult<()> {
        self.students.delete(id).await?;
        self.roster.remove(id);
        info!("event=student_delete module=school status=ok student_id={id}");
        Ok(())
    }

    /// Creates a course through the factory, dispatching on the lower-cased
    /// subject.
    pub async fn create_course(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        subject: &str,
        teacher: Teacher,
        schedule: impl Into<String>,
        classroom: impl Into<String>,
    ) -> SchoolResult<Course> {
        let course = CourseFactory::new(&self.resources)
            .create_course(id, name, subject, teacher, schedule, classroom);
        self.courses.save(&course).await?;
        self.catalog.insert(course.id.clone(), course.clone());
        info!(
            "event=course_create module=school status=ok course_id={} subject={} resources={}",
            course.id,
            course.subject,
            course.required_resources().len()
        );
        Ok(course)
    }

    pub async fn delete_course(&mut self, id: &str) -> SchoolResult<()> {
        self.courses.delete(id).await?;
        self.catalog.remove(id);
        info!("event=course_delete module=school status=ok course_id={id}");
        Ok(())
    }

    pub async fn create_additional_service(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ServiceType,
        schedule: impl Into<String>,
        location: impl Into<String>,
        capacity: u32,
    ) -> SchoolResult<AdditionalService> {
        let service = AdditionalService::new(id, name, kind, schedule, location, capacity);
        self.services.save(&service).await?;
        let service = self.service_registry.insert_service(service).clone();
        info!(
            "event=service_create module=school status=ok service_id={} type={} capacity={capacity}",
            service.id, service.kind
        );
        Ok(service)
    }

    pub async fn delete_service(&mut self, id: &str) -> SchoolResult<()> {
        self.services.delete(id).await?;
        self.service_registry.delete_service(id);
        info!("event=service_delete module=school status=ok service_id={id}");
        Ok(())
    }

    /// Enrolls a rostered student and persists both the student and the
    /// service snapshot.
    ///
    /// An existing enrollment is only re-persisted, so a call that failed
    /// while saving can be repeated even when it took the last slot.
    pub async fn enroll_student_in_service(
        &mut self,
        service_id: &str,
        student_id: &str,
    ) -> SchoolResult<()> {
        let student = self
            .roster
            .get_mut(student_id)
            .ok_or_else(|| SchoolError::not_found(EntityKind::Student, student_id))?;
        let already_enrolled = self
            .service_registry
            .get_service(service_id)
            .is_some_and(|service| service.is_student_enrolled(student_id));
        if already_enrolled {
            student.add_service(service_id);
        } else {
            self.service_registry
                .enroll_student_in_service(service_id, student)?;
        }

        let student = student.clone();
        let service = self.registered_service(service_id)?;
        tokio::try_join!(self.students.save(&student), self.services.save(&service))?;
        Ok(())
    }

    pub async fn unenroll_student_from_service(
        &mut self,
        service_id: &str,
        student_id: &str,
    ) -> SchoolResult<()> {
        let student = self
            .roster
            .get_mut(student_id)
            .ok_or_else(|| SchoolError::not_found(EntityKind::Student, student_id))?;
        self.service_registry
            .unenroll_student_from_service(service_id, student)?;

        let student = student.clone();
        let service = self.registered_service(service_id)?;
        tokio::try_join!(self.students.save(&student), self.services.save(&service))?;
        Ok(())
    }

    /// Links a rostered student and a catalogued course, then persists both.
    pub async fn enroll_student_in_course(
        &mut self,
        course_id: &str,
        student_id: &str,
    ) -> SchoolResult<()> {
        let course = self
            .catalog
            .get_mut(course_id)
            .ok_or_else(|| SchoolError::not_found(EntityKind::Course, course_id))?;
        let student = self
            .roster
            .get_mut(student_id)
            .ok_or_else(|| SchoolError::not_found(EntityKind::Student, student_id))?;
        course.add_student(student);

        let course = course.clone();
        let student = student.clone();
        tokio::try_join!(self.courses.save(&course), self.students.save(&student))?;
        info!(
            "event=course_enroll module=school status=ok course_id={course_id} student_id={student_id}"
        );
        Ok(())
    }

    pub async fn set_grade(
        &mut self,
        student_id: &str,
        course_id: &str,
        grade: f64,
    ) -> SchoolResult<()> {
        let student = self
            .roster
            .get_mut(student_id)
            .ok_or_else(|| SchoolError::not_found(EntityKind::Student, student_id))?;
        student.set_grade(course_id, grade);

        let student = student.clone();
        self.students.save(&student).await?;
        Ok(())
    }

    pub fn reserve_resource(&mut self, resource_id: &str) -> SchoolResult<()> {
        self.resources.reserve_resource(resource_id)
    }

    pub fn release_resource(&mut self, resource_id: &str) -> SchoolResult<()> {
        self.resources.release_resource(resource_id)
    }

    pub async fn get_all_students(&self) -> SchoolResult<Vec<Student>> {
        Ok(self.students.get_all().await?)
    }

    pub async fn get_all_courses(&self) -> SchoolResult<Vec<Course>> {
        Ok(self.courses.get_all().await?)
    }

    pub async fn get_students_by_grade(&self, grade_level: u8) -> SchoolResult<Vec<Student>> {
        Ok(self.students.students_by_grade(grade_level).await?)
    }

    pub async fn get_students_by_course(&self, course_id: &str) -> SchoolResult<Vec<Student>> {
        Ok(self.students.students_by_course(course_id).await?)
    }

    pub async fn get_students_by_service(&self, service_id: &str) -> SchoolResult<Vec<Student>> {
        Ok(self.students.students_by_service(service_id).await?)
    }

    pub async fn get_courses_by_subject(&self, subject: &str) -> SchoolResult<Vec<Course>> {
        Ok(self.courses.courses_by_subject(subject).await?)
    }

    pub async fn get_courses_by_teacher(&self, teacher_id: &str) -> SchoolResult<Vec<Course>> {
        Ok(self.courses.courses_by_teacher(teacher_id).await?)
    }

    pub async fn get_courses_by_resource(&self, resource_id: &str) -> SchoolResult<Vec<Course>> {
        Ok(self.courses.courses_by_resource(resource_id).await?)
    }

    /// Registered services with an open slot.
    pub fn get_available_services(&self) -> Vec<AdditionalService> {
        self.service_registry
            .get_available_services()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Counts over the persisted collections, read concurrently.
    pub async fn get_statistics(&self) -> SchoolResult<SchoolStatistics> {
        let (students, courses, open_services) = tokio::try_join!(
            self.students.get_all(),
            self.courses.get_all(),
            self.services.services_with_open_slots(),
        )?;

        let teachers: HashSet<&str> = courses.iter().map(|course| course.teacher.id()).collect();

        Ok(SchoolStatistics {
            total_students: students.len(),
            total_courses: courses.len(),
            total_services: open_services.len(),
            total_teachers: teachers.len(),
        })
    }

    /// Live in-session student, if created through this facade.
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.roster.get(id)
    }

    /// Live in-session course, if created through this facade.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.catalog.get(id)
    }

    pub fn service(&self, id: &str) -> Option<&AdditionalService> {
        self.service_registry.get_service(id)
    }

    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    pub fn services(&self) -> &ServiceRegistry {
        &self.service_registry
    }

    fn registered_service(&self, id: &str) -> SchoolResult<AdditionalService> {
        self.service_registry
            .get_service(id)
            .cloned()
            .ok_or_else(|| SchoolError::not_found(EntityKind::Service, id))
    }
}
