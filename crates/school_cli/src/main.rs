//! CLI collaborator for school core.
//!
//! # Responsibility
//! - Translate command-line input into facade calls.
//! - Print results; surface failures as the error message and a non-zero exit.

mod commands;

use anyhow::Context;
use chrono::NaiveDate;
use commands::{
    CommandLine, Commands, CourseArgs, CourseCommand, ServiceArgs, ServiceCommand,
    StudentArgs, StudentCommand,
};
use log::info;
use school_core::{
    init_logging, Course, School, SchoolConfig, SchoolStatistics, ServiceType, Store, Student,
    Teacher,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse_args();
    let config = resolve_config(&cli)?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).context("initializing logging")?;
    }

    let store = Arc::new(Store::new(config.store_location()));
    let mut school = School::with_defaults(store);
    school.initialize().await.context("opening school database")?;
    info!("event=cli_start module=cli status=ok");

    match cli.command {
        Commands::Demo => run_demo(&mut school).await?,
        Commands::Stats => print_statistics(&school.get_statistics().await?),
        Commands::Student(command) => run_student(&mut school, command).await?,
        Commands::Course(command) => run_course(&mut school, command).await?,
        Commands::Service(command) => run_service(&mut school, command).await?,
    }
    Ok(())
}

fn resolve_config(cli: &CommandLine) -> anyhow::Result<SchoolConfig> {
    let mut config = SchoolConfig::from_env()?;
    if let Some(db) = &cli.db {
        config.db_path = Some(db.clone());
    }
    if let Some(level) = &cli.log_level {
        config.set_log_level(level)?;
    }
    if let Some(dir) = &cli.log_dir {
        config.set_log_dir(dir.clone())?;
    }
    Ok(config)
}

async fn run_student(school: &mut School, command: StudentCommand) -> anyhow::Result<()> {
    match command {
        StudentCommand::Add(StudentArgs {
            id,
            first_name,
            last_name,
            email,
            dob,
            grade,
        }) => {
            let student = school
                .create_student(id, first_name, last_name, email, dob, grade)
                .await?;
            println!("created student {} ({})", student.full_name(), student.id());
        }
        StudentCommand::List { grade } => {
            let students = match grade {
                Some(grade) => school.get_students_by_grade(grade).await?,
                None => school.get_all_students().await?,
            };
            students.iter().for_each(print_student);
        }
        StudentCommand::Delete { id } => {
            school.delete_student(&id).await?;
            println!("deleted student {id}");
        }
    }
    Ok(())
}

async fn run_course(school: &mut School, command: CourseCommand) -> anyhow::Result<()> {
    match command {
        CourseCommand::Add(args) => {
            let CourseArgs {
                id,
                name,
                subject,
                schedule,
                classroom,
                ..
            } = &args;
            let teacher = Teacher::new(
                args.teacher_id.clone(),
                args.teacher_first_name.clone(),
                args.teacher_last_name.clone(),
                args.teacher_email.clone(),
                args.teacher_dob,
                subject.clone(),
                args.teacher_experience,
            );
            let course = school
                .create_course(
                    id.clone(),
                    name.clone(),
                    subject,
                    teacher,
                    schedule.clone(),
                    classroom.clone(),
                )
                .await?;
            println!("created course");
            print_course(&course);
        }
        CourseCommand::List { subject } => {
            let courses = match subject {
                Some(subject) => school.get_courses_by_subject(&subject).await?,
                None => school.get_all_courses().await?,
            };
            courses.iter().for_each(print_course);
        }
        CourseCommand::Delete { id } => {
            school.delete_course(&id).await?;
            println!("deleted course {id}");
        }
    }
    Ok(())
}

async fn run_service(school: &mut School, command: ServiceCommand) -> anyhow::Result<()> {
    match command {
        ServiceCommand::Add(ServiceArgs {
            id,
            name,
            kind,
            schedule,
            location,
            capacity,
        }) => {
            let service = school
                .create_additional_service(id, name, kind, schedule, location, capacity)
                .await?;
            println!(
                "created service {} [{}] capacity={}",
                service.id, service.kind, service.capacity
            );
        }
        ServiceCommand::Delete { id } => {
            school.delete_service(&id).await?;
            println!("deleted service {id}");
        }
    }
    Ok(())
}

/// Seeds the walkthrough school: two students, two math courses taught by one
/// teacher, one tutoring service.
async fn run_demo(school: &mut School) -> anyhow::Result<()> {
    let dob = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).context("invalid demo date");
    let teacher = Teacher::new(
        "T1",
        "Alan",
        "Turing",
        "alan@school.test",
        dob(1982, 6, 23)?,
        "Math",
        12,
    );

    school
        .create_student(
            "S1",
            "Ada",
            "Lovelace",
            "ada@school.test",
            dob(2010, 12, 10)?,
            9,
        )
        .await?;
    school
        .create_student(
            "S2",
            "Grace",
            "Hopper",
            "grace@school.test",
            dob(2009, 12, 9)?,
            10,
        )
        .await?;
    school
        .create_course(
            "C1",
            "Algebra I",
            "math",
            teacher.clone(),
            "Mon 09:00",
            "B12",
        )
        .await?;
    school
        .create_course("C2", "Geometry", "math", teacher, "Wed 09:00", "B14")
        .await?;
    school
        .create_additional_service(
            "SV1",
            "Math Tutoring",
            ServiceType::Tutoring,
            "Tue 15:00",
            "Library",
            2,
        )
        .await?;

    school.enroll_student_in_course("C1", "S1").await?;
    school.enroll_student_in_service("SV1", "S1").await?;

    for course in school.get_all_courses().await? {
        print_course(&course);
    }
    for student in school.get_all_students().await? {
        print_student(&student);
    }
    print_statistics(&school.get_statistics().await?);
    Ok(())
}

fn print_student(student: &Student) {
    println!(
        "student {:<8} {:<24} grade={:<2} courses={:?} services={:?}",
        student.id(),
        student.full_name(),
        student.grade_level,
        student.courses(),
        student.services()
    );
}

fn print_course(course: &Course) {
    println!(
        "course  {:<8} {:<24} subject={} teacher={} resources={:?} students={:?}",
        course.id,
        course.name,
        course.subject,
        course.teacher.id(),
        course.required_resources(),
        course.enrolled_students()
    );
}

fn print_statistics(stats: &SchoolStatistics) {
    println!(
        "students={} courses={} services={} teachers={}",
        stats.total_students, stats.total_courses, stats.total_services, stats.total_teachers
    );
}
