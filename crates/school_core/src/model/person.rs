//! Identity fields shared by students and teachers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Common personal record embedded in `Student` and `Teacher`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Serialized as ISO `YYYY-MM-DD`.
    pub date_of_birth: NaiveDate,
}

impl Person {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            date_of_birth,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
