//! Subject model
//!
//! A subject is a named attendance counter owned by exactly one student.

use serde::Serialize;

/// A subject a student is enrolled in, with its attendance counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    /// Subject name (unique within its student)
    name: String,

    /// Number of sessions attended
    attendance_count: u32,
}

impl Subject {
    /// Create a subject with zero attendance
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attendance_count: 0,
        }
    }

    /// Subject name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record one attended session
    pub const fn mark_attendance(&mut self) {
        self.attendance_count = self.attendance_count.saturating_add(1);
    }

    /// Current attendance count
    #[must_use]
    pub const fn attendance(&self) -> u32 {
        self.attendance_count
    }
}
