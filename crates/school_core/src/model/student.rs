//! Student entity.
//!
//! # Responsibility
//! - Hold enrollment, service subscription and grade links by id.
//!
//! # Invariants
//! - Public mutators are additive only; removal is reserved to the crate's
//!   registries so both sides of a link change together.
//! - Grade entries are not checked against enrolled courses.

use super::person::Person;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    pub person: Person,
    pub grade_level: u8,
    #[serde(default)]
    courses: BTreeSet<String>,
    #[serde(default)]
    services: BTreeSet<String>,
    #[serde(default)]
    grades: BTreeMap<String, f64>,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        grade_level: u8,
    ) -> Self {
        Self {
            person: Person::new(id, first_name, last_name, email, date_of_birth),
            grade_level,
            courses: BTreeSet::new(),
            services: BTreeSet::new(),
            grades: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.person.id
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }

    /// Records the reciprocal side of `Course::add_student`.
    pub fn enroll_in_course(&mut self, course_id: impl Into<String>) {
        self.courses.insert(course_id.into());
    }

    pub fn add_service(&mut self, service_id: impl Into<String>) {
        self.services.insert(service_id.into());
    }

    pub(crate) fn drop_service(&mut self, service_id: &str) {
        self.services.remove(service_id);
    }

    /// Overwrites any previous grade for `course_id`.
    pub fn set_grade(&mut self, course_id: impl Into<String>, grade: f64) {
        self.grades.insert(course_id.into(), grade);
    }

    /// Enrolled course ids. The returned vector is a copy.
    pub fn courses(&self) -> Vec<String> {
        self.courses.iter().cloned().collect()
    }

    pub fn is_enrolled_in(&self, course_id: &str) -> bool {
        self.courses.contains(course_id)
    }

    /// Subscribed service ids. The returned vector is a copy.
    pub fn services(&self) -> Vec<String> {
        self.services.iter().cloned().collect()
    }

    pub fn is_subscribed_to(&self, service_id: &str) -> bool {
        self.services.contains(service_id)
    }

    pub fn grade(&self, course_id: &str) -> Option<f64> {
        self.grades.get(course_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::Student;
    use chrono::NaiveDate;

    fn student() -> Student {
        Student::new(
            "s-1",
            "Ada",
            "Lovelace",
            "ada@school.test",
            NaiveDate::from_ymd_opt(2010, 12, 10).unwrap(),
            9,
        )
    }

    #[test]
    fn returned_collections_are_copies() {
        let mut student = student();
        student.enroll_in_course("c-1");

        let mut courses = student.courses();
        courses.push("c-2".to_string());

        assert_eq!(student.courses(), vec!["c-1".to_string()]);
    }

    #[test]
    fn set_grade_overwrites_previous_value() {
        let mut student = student();
        student.set_grade("c-1", 71.5);
        student.set_grade("c-1", 88.0);

        assert_eq!(student.grade("c-1"), Some(88.0));
        assert_eq!(student.grade("c-2"), None);
    }

    #[test]
    fn person_fields_are_flattened_on_the_wire() {
        let mut student = student();
        student.add_service("sv-1");

        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["id"], "s-1");
        assert_eq!(json["date_of_birth"], "2010-12-10");
        assert_eq!(json["grade_level"], 9);
        assert_eq!(json["services"][0], "sv-1");
        assert_eq!(student.full_name(), "Ada Lovelace");
    }
}
