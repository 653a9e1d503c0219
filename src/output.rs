//! Output formatting for human and JSON modes
//!
//! Query results can be rendered either as the console text of the menu or as
//! machine-parseable JSON.

use std::io::{self, Write};

use serde::Serialize;

use crate::manager::AttendanceManager;
use crate::models::{Student, Subject};

/// Output mode for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an attendance query
#[derive(Debug, Serialize)]
pub struct AttendanceResult {
    /// Queried student id
    pub student_id: i64,
    /// Queried subject name
    pub subject: String,
    /// Attendance count (zero for unknown student or subject)
    pub attendance: u32,
}

/// Result of listing all students
#[derive(Debug, Serialize)]
pub struct StudentListResult {
    /// Number of students
    pub total: usize,
    /// Students in ascending id order
    pub students: Vec<StudentInfo>,
    /// Console rendering from [`AttendanceManager::display_all_students`]
    #[serde(skip)]
    pub details: String,
}

/// Information about a student
#[derive(Debug, Serialize)]
pub struct StudentInfo {
    /// Student id
    pub id: i64,
    /// Student name
    pub name: String,
    /// Subjects in ascending name order
    pub subjects: Vec<SubjectInfo>,
}

/// Information about a subject
#[derive(Debug, Serialize)]
pub struct SubjectInfo {
    /// Subject name
    pub name: String,
    /// Attendance count
    pub attendance: u32,
}

impl From<&Subject> for SubjectInfo {
    fn from(subject: &Subject) -> Self {
        Self {
            name: subject.name().to_string(),
            attendance: subject.attendance(),
        }
    }
}

impl From<&Student> for StudentInfo {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id(),
            name: student.name().to_string(),
            subjects: student.subjects().map(SubjectInfo::from).collect(),
        }
    }
}

impl From<&AttendanceManager> for StudentListResult {
    fn from(manager: &AttendanceManager) -> Self {
        let students: Vec<StudentInfo> = manager.students().map(StudentInfo::from).collect();
        Self {
            total: students.len(),
            students,
            details: manager.display_all_students(),
        }
    }
}

fn render_json<T: Serialize>(value: &T, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value).unwrap_or_default())
}

impl AttendanceResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, out: &mut impl Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => writeln!(
                out,
                "Attendance for student {} in {}: {}",
                self.student_id, self.subject, self.attendance
            ),
            OutputMode::Json => render_json(self, out),
        }
    }
}

impl StudentListResult {
    /// Render the result based on output mode
    ///
    /// Human mode prints nothing when there are no students.
    pub fn render(&self, mode: OutputMode, out: &mut impl Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => write!(out, "{}", self.details),
            OutputMode::Json => render_json(self, out),
        }
    }
}
