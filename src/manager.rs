//! Attendance manager
//!
//! Owns every student for the lifetime of a session. Operations on an unknown
//! student id have no effect and reads return zero.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use log::debug;

use crate::models::{AddOutcome, DuplicatePolicy, Student};

/// In-memory registry of students keyed by id
#[derive(Debug, Clone, Default)]
pub struct AttendanceManager {
    students: BTreeMap<i64, Student>,
    policy: DuplicatePolicy,
}

impl AttendanceManager {
    /// Create an empty manager that overwrites duplicates
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager with an explicit duplicate policy
    #[must_use]
    pub const fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            students: BTreeMap::new(),
            policy,
        }
    }

    /// Duplicate policy applied to students and subjects
    #[must_use]
    pub const fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register a student
    pub fn add_student(&mut self, id: i64, name: &str) -> AddOutcome {
        debug!("add student {id} ({name}), policy {}", self.policy);
        match self.students.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(Student::new(id, name));
                AddOutcome::Added
            },
            Entry::Occupied(mut slot) => match self.policy {
                DuplicatePolicy::Overwrite => {
                    slot.insert(Student::new(id, name));
                    AddOutcome::Replaced
                },
                DuplicatePolicy::Keep => AddOutcome::Kept,
            },
        }
    }

    /// Enroll a student in a subject, `None` if the student is unknown
    pub fn add_subject_to_student(&mut self, id: i64, subject: &str) -> Option<AddOutcome> {
        debug!("add subject {subject} to student {id}");
        let policy = self.policy;
        self.students.get_mut(&id).map(|student| student.add_subject(subject, policy))
    }

    /// Record attendance, returns false if the student or subject is unknown
    pub fn mark_student_attendance(&mut self, id: i64, subject: &str) -> bool {
        debug!("mark attendance for student {id} in {subject}");
        self.students.get_mut(&id).is_some_and(|student| student.mark_attendance(subject))
    }

    /// Attendance of a student in a subject, zero if either is unknown
    #[must_use]
    pub fn student_attendance(&self, id: i64, subject: &str) -> u32 {
        self.students.get(&id).map_or(0, |student| student.attendance(subject))
    }

    /// Look up a student by id
    #[must_use]
    pub fn student(&self, id: i64) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Students in ascending id order
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Number of registered students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether no students are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Details of every student, one block each, in ascending id order
    #[must_use]
    pub fn display_all_students(&self) -> String {
        self.students.values().map(Student::display_details).collect()
    }
}
