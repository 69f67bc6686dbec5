use chrono::NaiveDate;
use school_core::{
    AdditionalService, Resource, ResourceType, SchoolError, ServiceRegistry, ServiceType, Student,
};

fn student(id: String) -> Student {
    Student::new(
        id,
        "First",
        "Last",
        "student@school.test",
        NaiveDate::from_ymd_opt(2012, 6, 30).unwrap(),
        7,
    )
}

#[test]
fn capacity_admits_exactly_c_distinct_students() {
    for capacity in 0..6u32 {
        let mut service = AdditionalService::new(
            "sv",
            "Tutoring",
            ServiceType::Tutoring,
            "Mon",
            "Room 1",
            capacity,
        );
        for n in 0..capacity {
            service.enroll_student(format!("s-{n}")).unwrap();
        }

        let err = service.enroll_student("late").unwrap_err();
        assert!(matches!(err, SchoolError::CapacityExceeded { .. }));
        assert_eq!(service.enrolled_count(), capacity as usize);
    }
}

#[test]
fn re_enrollment_never_grows_the_count() {
    let mut service =
        AdditionalService::new("sv", "Art", ServiceType::Arts, "Tue", "Studio", 3);
    service.enroll_student("s-1").unwrap();
    service.enroll_student("s-2").unwrap();

    service.enroll_student("s-1").unwrap();
    assert_eq!(service.enrolled_count(), 2);

    service.enroll_student("s-3").unwrap();
    assert!(service.enroll_student("s-1").is_err());
    assert_eq!(service.enrolled_count(), 3);
}

#[test]
fn available_services_match_open_slots_for_mixed_fill_levels() {
    let mut registry = ServiceRegistry::new();
    let fills = [(0u32, 0usize), (1, 0), (1, 1), (3, 2), (3, 3), (4, 1)];
    for (index, (capacity, _)) in fills.iter().enumerate() {
        registry.create_service(
            format!("sv-{index}"),
            "Club",
            ServiceType::Clubs,
            "Fri",
            "Hall",
            *capacity,
        );
    }
    for (index, (_, enrolled)) in fills.iter().enumerate() {
        for n in 0..*enrolled {
            let mut s = student(format!("s-{index}-{n}"));
            registry
                .enroll_student_in_service(&format!("sv-{index}"), &mut s)
                .unwrap();
        }
    }

    let available: Vec<&str> = registry
        .get_available_services()
        .into_iter()
        .map(|service| service.id.as_str())
        .collect();
    let expected: Vec<String> = fills
        .iter()
        .enumerate()
        .filter(|(_, (capacity, enrolled))| *enrolled < *capacity as usize)
        .map(|(index, _)| format!("sv-{index}"))
        .collect();
    assert_eq!(available, expected);
}

#[test]
fn reserve_release_cycle_holds_for_every_resource_type() {
    for kind in [
        ResourceType::Classroom,
        ResourceType::Equipment,
        ResourceType::Supplies,
    ] {
        let mut resource = Resource::new("r", "Thing", kind, "Store room");
        resource.reserve().unwrap();
        assert!(!resource.is_available());
        assert!(matches!(
            resource.reserve(),
            Err(SchoolError::ResourceUnavailable(_))
        ));
        resource.release();
        assert!(resource.is_available());
    }
}
