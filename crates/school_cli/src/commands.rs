//! Command-line surface.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use school_core::ServiceType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "school")]
#[command(about = "Record students, courses and additional services.")]
pub struct CommandLine {
    /// Database file. Defaults to $SCHOOL_DB_PATH, then an in-memory store.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seed a small school and print its statistics
    Demo,
    /// Print aggregate counts
    Stats,
    #[command(subcommand)]
    Student(StudentCommand),
    #[command(subcommand)]
    Course(CourseCommand),
    #[command(subcommand)]
    Service(ServiceCommand),
}

#[derive(Subcommand)]
pub enum StudentCommand {
    Add(StudentArgs),
    /// List persisted students, optionally for one grade level
    List {
        #[arg(long)]
        grade: Option<u8>,
    },
    Delete { id: String },
}

#[derive(Args)]
pub struct StudentArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub dob: NaiveDate,
    #[arg(long)]
    pub grade: u8,
}

#[derive(Subcommand)]
pub enum CourseCommand {
    Add(CourseArgs),
    /// List persisted courses, optionally for one subject
    List {
        #[arg(long)]
        subject: Option<String>,
    },
    Delete { id: String },
}

#[derive(Args)]
pub struct CourseArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: String,
    /// math, science and history get a default resource
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub teacher_id: String,
    #[arg(long, default_value = "")]
    pub teacher_first_name: String,
    #[arg(long, default_value = "")]
    pub teacher_last_name: String,
    #[arg(long, default_value = "")]
    pub teacher_email: String,
    #[arg(long, default_value = "1970-01-01")]
    pub teacher_dob: NaiveDate,
    #[arg(long, default_value_t = 0)]
    pub teacher_experience: u32,
    #[arg(long)]
    pub schedule: String,
    #[arg(long)]
    pub classroom: String,
}

#[derive(Subcommand)]
pub enum ServiceCommand {
    Add(ServiceArgs),
    Delete { id: String },
}

#[derive(Args)]
pub struct ServiceArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: String,
    /// tutoring|sports|arts|clubs
    #[arg(long = "type")]
    pub kind: ServiceType,
    #[arg(long)]
    pub schedule: String,
    #[arg(long)]
    pub location: String,
    #[arg(long)]
    pub capacity: u32,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
