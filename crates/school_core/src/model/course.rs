//! Course entity.
//!
//! # Responsibility
//! - Own the teacher record and the enrolled/required-resource id links.
//!
//! # Invariants
//! - `add_student` updates the course and the student in one call.
//! - Required resources keep insertion order and may repeat.

use super::student::Student;
use super::teacher::Teacher;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub teacher: Teacher,
    pub schedule: String,
    pub classroom: String,
    #[serde(default)]
    enrolled_students: BTreeSet<String>,
    #[serde(default)]
    required_resources: Vec<String>,
}

impl Course {
    /// Builds a course and records its id on the embedded teacher.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        subject: impl Into<String>,
        mut teacher: Teacher,
        schedule: impl Into<String>,
        classroom: impl Into<String>,
    ) -> Self {
        let id = id.into();
        teacher.assign_course(id.clone());
        Self {
            id,
            name: name.into(),
            subject: subject.into(),
            teacher,
            schedule: schedule.into(),
            classroom: classroom.into(),
            enrolled_students: BTreeSet::new(),
            required_resources: Vec::new(),
        }
    }

    /// Enrolls `student` and records the reciprocal link on the student.
    pub fn add_student(&mut self, student: &mut Student) {
        self.enrolled_students.insert(student.id().to_string());
        student.enroll_in_course(self.id.clone());
    }

    pub fn add_required_resource(&mut self, resource_id: impl Into<String>) {
        self.required_resources.push(resource_id.into());
    }

    /// Enrolled student ids. The returned vector is a copy.
    pub fn enrolled_students(&self) -> Vec<String> {
        self.enrolled_students.iter().cloned().collect()
    }

    pub fn has_student(&self, student_id: &str) -> bool {
        self.enrolled_students.contains(student_id)
    }

    /// Required resource ids in attachment order. The returned vector is a copy.
    pub fn required_resources(&self) -> Vec<String> {
        self.required_resources.clone()
    }

    pub fn requires_resource(&self, resource_id: &str) -> bool {
        self.required_resources.iter().any(|id| id == resource_id)
    }
}
