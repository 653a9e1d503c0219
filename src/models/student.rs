//! Student model
//!
//! A student owns its subjects, keyed by name. Lookups of unknown subjects are
//! not errors: marks are dropped and reads return zero.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use super::policy::{AddOutcome, DuplicatePolicy};
use super::subject::Subject;

/// A student and the subjects they attend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Identifier, unique within a manager
    id: i64,

    /// Display name
    name: String,

    /// Enrolled subjects, ordered by name
    subjects: BTreeMap<String, Subject>,
}

impl Student {
    /// Create a student with no subjects
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            subjects: BTreeMap::new(),
        }
    }

    /// Student id
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Student name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enroll in a subject with zero attendance
    ///
    /// An existing subject of the same name is reset or kept depending on `policy`.
    pub fn add_subject(&mut self, name: &str, policy: DuplicatePolicy) -> AddOutcome {
        match self.subjects.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(Subject::new(name));
                AddOutcome::Added
            },
            Entry::Occupied(mut slot) => match policy {
                DuplicatePolicy::Overwrite => {
                    slot.insert(Subject::new(name));
                    AddOutcome::Replaced
                },
                DuplicatePolicy::Keep => AddOutcome::Kept,
            },
        }
    }

    /// Record attendance for a subject, returns false if the subject is unknown
    pub fn mark_attendance(&mut self, subject: &str) -> bool {
        self.subjects.get_mut(subject).map(Subject::mark_attendance).is_some()
    }

    /// Attendance for a subject, zero if unknown
    #[must_use]
    pub fn attendance(&self, subject: &str) -> u32 {
        self.subjects.get(subject).map_or(0, Subject::attendance)
    }

    /// Subjects in ascending name order
    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.values()
    }

    /// Whether the student is enrolled in `subject`
    #[must_use]
    pub fn has_subject(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }

    /// Multi-line human-readable rendering
    #[must_use]
    pub fn display_details(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student ID: {}, Name: {}", self.id, self.name)?;
        for subject in self.subjects.values() {
            writeln!(f, "  Subject: {}, Attendance: {}", subject.name(), subject.attendance())?;
        }
        Ok(())
    }
}
