//! Data models for attendease
//!
//! Core abstractions:
//! - Subject: a named attendance counter
//! - Student: an id, a name and the subjects they attend
//! - `DuplicatePolicy`: how re-adding an existing key behaves

mod policy;
mod student;
mod subject;

pub use policy::{AddOutcome, DuplicatePolicy};
pub use student::Student;
pub use subject::Subject;
