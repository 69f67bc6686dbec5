//! Capacity-bounded additional service (tutoring, sports, arts, clubs).
//!
//! # Invariants
//! - Enrolled count never exceeds `capacity`.
//! - Enrollment is keyed by student id; re-adding an id is a no-op.

use super::KindParseError;
use crate::error::{SchoolError, SchoolResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    Tutoring,
    Sports,
    Arts,
    Clubs,
}

impl ServiceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tutoring => "TUTORING",
            Self::Sports => "SPORTS",
            Self::Arts => "ARTS",
            Self::Clubs => "CLUBS",
        }
    }
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = KindParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "TUTORING" => Ok(Self::Tutoring),
            "SPORTS" => Ok(Self::Sports),
            "ARTS" => Ok(Self::Arts),
            "CLUBS" => Ok(Self::Clubs),
            _ => Err(KindParseError {
                family: "service type",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalService {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ServiceType,
    pub schedule: String,
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    enrolled_students: BTreeSet<String>,
}

impl AdditionalService {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ServiceType,
        schedule: impl Into<String>,
        location: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            schedule: schedule.into(),
            location: location.into(),
            capacity,
            enrolled_students: BTreeSet::new(),
        }
    }

    /// Adds `student_id` to the enrolled set.
    ///
    /// The capacity check runs before the membership check, so a full service
    /// rejects even an already enrolled id.
    pub fn enroll_student(&mut self, student_id: impl Into<String>) -> SchoolResult<()> {
        if self.enrolled_count() >= self.capacity as usize {
            return Err(SchoolError::CapacityExceeded {
                service_id: self.id.clone(),
                capacity: self.capacity,
            });
        }
        self.enrolled_students.insert(student_id.into());
        Ok(())
    }

    pub fn unenroll_student(&mut self, student_id: &str) {
        self.enrolled_students.remove(student_id);
    }

    pub fn enrolled_count(&self) -> usize {
        self.enrolled_students.len()
    }

    pub fn is_student_enrolled(&self, student_id: &str) -> bool {
        self.enrolled_students.contains(student_id)
    }

    pub fn has_open_slot(&self) -> bool {
        self.enrolled_count() < self.capacity as usize
    }

    /// Enrolled student ids. The returned vector is a copy.
    pub fn enrolled_students(&self) -> Vec<String> {
        self.enrolled_students.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AdditionalService, ServiceType};
    use crate::error::SchoolError;

    fn chess_club(capacity: u32) -> AdditionalService {
        AdditionalService::new(
            "sv-chess",
            "Chess Club",
            ServiceType::Clubs,
            "Fri 15:00",
            "Library",
            capacity,
        )
    }

    #[test]
    fn enrollment_stops_at_capacity() {
        let mut club = chess_club(3);
        for id in ["s-1", "s-2", "s-3"] {
            club.enroll_student(id).unwrap();
        }
        assert!(!club.has_open_slot());

        let err = club.enroll_student("s-4").unwrap_err();
        match err {
            SchoolError::CapacityExceeded {
                service_id,
                capacity,
            } => {
                assert_eq!(service_id, "sv-chess");
                assert_eq!(capacity, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(club.enrolled_count(), 3);
        assert!(!club.is_student_enrolled("s-4"));
    }

    #[test]
    fn re_enrolling_does_not_grow_the_set() {
        let mut club = chess_club(5);
        club.enroll_student("s-1").unwrap();
        club.enroll_student("s-1").unwrap();
        assert_eq!(club.enrolled_count(), 1);
    }

    #[test]
    fn zero_capacity_rejects_everyone() {
        let mut club = chess_club(0);
        assert!(club.enroll_student("s-1").is_err());
        assert_eq!(club.enrolled_count(), 0);
    }

    #[test]
    fn unenroll_of_absent_id_is_silent() {
        let mut club = chess_club(1);
        club.unenroll_student("ghost");
        club.enroll_student("s-1").unwrap();
        club.unenroll_student("s-1");
        assert_eq!(club.enrolled_count(), 0);
        assert!(club.has_open_slot());
    }

    #[test]
    fn wire_shape_uses_upper_case_type() {
        let json = serde_json::to_value(chess_club(2)).unwrap();
        assert_eq!(json["type"], "CLUBS");
        assert_eq!(json["capacity"], 2);
        assert!(json["enrolled_students"].as_array().unwrap().is_empty());
    }
}
