//! Subject-specific course construction.
//!
//! # Invariants
//! - Known subjects attach exactly one default resource when it is
//!   registered, and none otherwise. A missing default is not an error.
//! - Unknown subjects produce a bare course with the caller's subject.

use crate::model::course::Course;
use crate::model::teacher::Teacher;
use crate::registry::{
    ResourceRegistry, HISTORY_PROJECTOR_ID, MATH_CALCULATOR_ID, SCIENCE_LAB_ID,
};
use log::debug;

/// Course builder that reads default resources from a registry.
#[derive(Debug, Clone, Copy)]
pub struct CourseFactory<'r> {
    resources: &'r ResourceRegistry,
}

impl<'r> CourseFactory<'r> {
    pub fn new(resources: &'r ResourceRegistry) -> Self {
        Self { resources }
    }

    pub fn create_math_course(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        teacher: Teacher,
        schedule: impl Into<String>,
        classroom: impl Into<String>,
    ) -> Course {
        let course = Course::new(id, name, "Math", teacher, schedule, classroom);
        self.with_default_resource(course, MATH_CALCULATOR_ID)
    }

    pub fn create_science_course(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        teacher: Teacher,
        schedule: impl Into<String>,
        classroom: impl Into<String>,
    ) -> Course {
        let course = Course::new(id, name, "Science", teacher, schedule, classroom);
        self.with_default_resource(course, SCIENCE_LAB_ID)
    }

    pub fn create_history_course(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        teacher: Teacher,
        schedule: impl Into<String>,
        classroom: impl Into<String>,
    ) -> Course {
        let course = Course::new(id, name, "History", teacher, schedule, classroom);
        self.with_default_resource(course, HISTORY_PROJECTOR_ID)
    }

    /// Dispatches on the lower-cased `subject`; unknown subjects get a bare
    /// course.
    pub fn create_course(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        subject: &str,
        teacher: Teacher,
        schedule: impl Into<String>,
        classroom: impl Into<String>,
    ) -> Course {
        match subject.to_lowercase().as_str() {
            "math" => self.create_math_course(id, name, teacher, schedule, classroom),
            "science" => self.create_science_course(id, name, teacher, schedule, classroom),
            "history" => self.create_history_course(id, name, teacher, schedule, classroom),
            _ => Course::new(id, name, subject, teacher, schedule, classroom),
        }
    }

    fn with_default_resource(&self, mut course: Course, resource_id: &str) -> Course {
        match self.resources.get_resource(resource_id) {
            Some(resource) => course.add_required_resource(resource.id.clone()),
            None => debug!(
                "event=course_default_resource module=factory status=skipped course_id={} resource_id={resource_id}",
                course.id
            ),
        }
        course
    }
}

#[cfg(test)]
mod tests {
    use super::CourseFactory;
    use crate::model::teacher::Teacher;
    use crate::registry::{ResourceRegistry, MATH_CALCULATOR_ID, SCIENCE_LAB_ID};
    use chrono::NaiveDate;

    fn teacher() -> Teacher {
        Teacher::new(
            "t-1",
            "Grace",
            "Hopper",
            "grace@school.test",
            NaiveDate::from_ymd_opt(1975, 12, 9).unwrap(),
            "Science",
            15,
        )
    }

    #[test]
    fn known_subjects_attach_their_default_resource() {
        let resources = ResourceRegistry::with_default_resources();
        let factory = CourseFactory::new(&resources);

        let math = factory.create_math_course("c-1", "Algebra", teacher(), "Mon", "B1");
        assert_eq!(math.subject, "Math");
        assert_eq!(math.required_resources(), vec![MATH_CALCULATOR_ID.to_string()]);

        let science = factory.create_course("c-2", "Biology", "SCIENCE", teacher(), "Tue", "Lab");
        assert_eq!(science.subject, "Science");
        assert_eq!(science.required_resources(), vec![SCIENCE_LAB_ID.to_string()]);

        let history = factory.create_course("c-3", "Rome", "History", teacher(), "Wed", "C2");
        assert_eq!(history.subject, "History");
        assert_eq!(history.required_resources().len(), 1);
    }

    #[test]
    fn missing_default_resource_is_skipped_silently() {
        let resources = ResourceRegistry::new();
        let factory = CourseFactory::new(&resources);

        let math = factory.create_math_course("c-1", "Algebra", teacher(), "Mon", "B1");
        assert!(math.required_resources().is_empty());
    }

    #[test]
    fn unknown_subject_builds_a_bare_course() {
        let resources = ResourceRegistry::with_default_resources();
        let factory = CourseFactory::new(&resources);

        let art = factory.create_course("c-9", "Painting", "Art", teacher(), "Fri", "Studio");
        assert_eq!(art.subject, "Art");
        assert!(art.required_resources().is_empty());
    }
}
