//! Duplicate-key handling
//!
//! Adding a student id or subject name that already exists either replaces the
//! existing record (the historical behavior) or keeps it.

use serde::{Deserialize, Serialize};

/// What to do when an add targets a key that already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Replace the existing record with a fresh one, discarding its attendance
    #[default]
    Overwrite,
    /// Leave the existing record untouched
    Keep,
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::Keep => write!(f, "keep"),
        }
    }
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "keep" => Ok(Self::Keep),
            _ => Err(format!("Invalid duplicate policy: {s}. Use: overwrite, keep")),
        }
    }
}

/// Result of adding a student or subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The key was new
    Added,
    /// The key existed and its record was replaced
    Replaced,
    /// The key existed and its record was kept
    Kept,
}
