//! Derived read filters.
//!
//! Each query loads the whole collection and filters in memory, which is
//! O(n) per call and fine for school-sized record counts.

use super::{Dao, StoreResult};
use crate::model::additional_service::AdditionalService;
use crate::model::course::Course;
use crate::model::student::Student;

impl Dao<Student> {
    pub async fn students_by_grade(&self, grade_level: u8) -> StoreResult<Vec<Student>> {
        self.filter(|student| student.grade_level == grade_level).await
    }

    pub async fn students_by_course(&self, course_id: &str) -> StoreResult<Vec<Student>> {
        self.filter(|student| student.is_enrolled_in(course_id)).await
    }

    pub async fn students_by_service(&self, service_id: &str) -> StoreResult<Vec<Student>> {
        self.filter(|student| student.is_subscribed_to(service_id)).await
    }
}

impl Dao<Course> {
    /// Exact, case-sensitive match on the stored subject.
    pub async fn courses_by_subject(&self, subject: &str) -> StoreResult<Vec<Course>> {
        self.filter(|course| course.subject == subject).await
    }

    pub async fn courses_by_teacher(&self, teacher_id: &str) -> StoreResult<Vec<Course>> {
        self.filter(|course| course.teacher.id() == teacher_id).await
    }

    pub async fn courses_by_resource(&self, resource_id: &str) -> StoreResult<Vec<Course>> {
        self.filter(|course| course.requires_resource(resource_id)).await
    }
}

impl Dao<AdditionalService> {
    pub async fn services_with_open_slots(&self) -> StoreResult<Vec<AdditionalService>> {
        self.filter(AdditionalService::has_open_slot).await
    }
}
