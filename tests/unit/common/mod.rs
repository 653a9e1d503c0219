//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing attendease components.

use std::io::Cursor;

use attendease::AttendanceManager;
use attendease::models::DuplicatePolicy;
use attendease::output::OutputMode;
use attendease::session::Session;

/// A manager with one student (1, "Ann") enrolled in "Math" and marked `marks` times
pub fn ann_in_math(marks: usize) -> AttendanceManager {
    let mut manager = AttendanceManager::new();
    manager.add_student(1, "Ann");
    manager.add_subject_to_student(1, "Math");
    for _ in 0..marks {
        manager.mark_student_attendance(1, "Math");
    }
    manager
}

/// Run a scripted session and return the final manager and everything printed
pub fn run_script(
    policy: DuplicatePolicy,
    mode: OutputMode,
    lines: &[&str],
) -> (AttendanceManager, String) {
    let mut input = lines.join("\n");
    input.push('\n');

    let mut session = Session::new(
        AttendanceManager::with_policy(policy),
        Cursor::new(input),
        Vec::new(),
        mode,
    );
    session.run().expect("session failed");

    let (manager, out) = session.into_parts();
    (manager, String::from_utf8(out).expect("output is not utf-8"))
}

/// Run a session over raw input bytes with the default policy and human output
pub fn run_bytes(input: &[u8]) -> (AttendanceManager, String) {
    let mut session = Session::new(
        AttendanceManager::new(),
        Cursor::new(input.to_vec()),
        Vec::new(),
        OutputMode::Human,
    );
    session.run().expect("session failed");

    let (manager, out) = session.into_parts();
    (manager, String::from_utf8(out).expect("output is not utf-8"))
}

/// Run a scripted session with the default policy and human output
pub fn run_default(lines: &[&str]) -> (AttendanceManager, String) {
    run_script(DuplicatePolicy::Overwrite, OutputMode::Human, lines)
}
