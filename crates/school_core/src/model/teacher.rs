//! Teacher entity.

use super::person::Person;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(flatten)]
    pub person: Person,
    pub subject: String,
    pub years_of_experience: u32,
    #[serde(default)]
    assigned_courses: BTreeSet<String>,
}

impl Teacher {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        subject: impl Into<String>,
        years_of_experience: u32,
    ) -> Self {
        Self {
            person: Person::new(id, first_name, last_name, email, date_of_birth),
            subject: subject.into(),
            years_of_experience,
            assigned_courses: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.person.id
    }

    pub fn assign_course(&mut self, course_id: impl Into<String>) {
        self.assigned_courses.insert(course_id.into());
    }

    /// Assigned course ids. The returned vector is a copy.
    pub fn assigned_courses(&self) -> Vec<String> {
        self.assigned_courses.iter().cloned().collect()
    }
}
