//! Tests for the attendance manager

use attendease::AttendanceManager;
use attendease::models::{AddOutcome, DuplicatePolicy};

use crate::common::ann_in_math;

// =============================================================================
// LOOKUP TESTS
// =============================================================================

#[test]
fn test_marks_accumulate() {
    let manager = ann_in_math(3);
    assert_eq!(manager.student_attendance(1, "Math"), 3);
}

#[test]
fn test_unknown_subject_reads_zero() {
    let manager = ann_in_math(3);
    assert_eq!(manager.student_attendance(1, "Sci"), 0);
}

#[test]
fn test_unknown_student_reads_zero() {
    let manager = ann_in_math(3);
    assert_eq!(manager.student_attendance(2, "Math"), 0);
}

#[test]
fn test_mark_unknown_student_is_noop() {
    let mut manager = ann_in_math(1);
    assert!(!manager.mark_student_attendance(2, "Math"));
    assert_eq!(manager.len(), 1);
    assert!(manager.student(2).is_none());
}

#[test]
fn test_mark_unknown_subject_is_noop() {
    let mut manager = ann_in_math(1);
    assert!(!manager.mark_student_attendance(1, "Sci"));
    assert_eq!(manager.student_attendance(1, "Sci"), 0);
    assert!(!manager.student(1).unwrap().has_subject("Sci"));
}

#[test]
fn test_add_subject_to_unknown_student_is_noop() {
    let mut manager = AttendanceManager::new();
    assert_eq!(manager.add_subject_to_student(9, "Math"), None);
    assert!(manager.is_empty());
}

// =============================================================================
// DUPLICATE POLICY TESTS
// =============================================================================

#[test]
fn test_default_policy_is_overwrite() {
    assert_eq!(AttendanceManager::new().policy(), DuplicatePolicy::Overwrite);
}

#[test]
fn test_readding_subject_resets_attendance() {
    let mut manager = ann_in_math(4);
    assert_eq!(manager.add_subject_to_student(1, "Math"), Some(AddOutcome::Replaced));
    assert_eq!(manager.student_attendance(1, "Math"), 0);
}

#[test]
fn test_readding_student_discards_subjects() {
    let mut manager = ann_in_math(2);
    assert_eq!(manager.add_student(1, "Annie"), AddOutcome::Replaced);

    let student = manager.student(1).unwrap();
    assert_eq!(student.name(), "Annie");
    assert_eq!(student.subjects().count(), 0);
    assert_eq!(manager.student_attendance(1, "Math"), 0);
}

#[test]
fn test_keep_policy_preserves_student() {
    let mut manager = AttendanceManager::with_policy(DuplicatePolicy::Keep);
    assert_eq!(manager.add_student(1, "Ann"), AddOutcome::Added);
    manager.add_subject_to_student(1, "Math");
    manager.mark_student_attendance(1, "Math");

    assert_eq!(manager.add_student(1, "Annie"), AddOutcome::Kept);
    assert_eq!(manager.student(1).unwrap().name(), "Ann");
    assert_eq!(manager.student_attendance(1, "Math"), 1);
}

#[test]
fn test_keep_policy_preserves_subject() {
    let mut manager = AttendanceManager::with_policy(DuplicatePolicy::Keep);
    manager.add_student(1, "Ann");
    manager.add_subject_to_student(1, "Math");
    manager.mark_student_attendance(1, "Math");

    assert_eq!(manager.add_subject_to_student(1, "Math"), Some(AddOutcome::Kept));
    assert_eq!(manager.student_attendance(1, "Math"), 1);
}

// =============================================================================
// DISPLAY TESTS
// =============================================================================

#[test]
fn test_display_all_orders_by_id() {
    let mut manager = AttendanceManager::new();
    manager.add_student(3, "Cy");
    manager.add_student(1, "Ann");
    manager.add_student(2, "Bo");
    manager.add_subject_to_student(1, "Math");
    manager.mark_student_attendance(1, "Math");

    assert_eq!(
        manager.display_all_students(),
        "Student ID: 1, Name: Ann\n  Subject: Math, Attendance: 1\n\
         Student ID: 2, Name: Bo\n\
         Student ID: 3, Name: Cy\n"
    );
}

#[test]
fn test_display_all_empty() {
    assert_eq!(AttendanceManager::new().display_all_students(), "");
}

#[test]
fn test_negative_ids_sort_first() {
    let mut manager = AttendanceManager::new();
    manager.add_student(5, "Five");
    manager.add_student(-1, "Minus");

    let ids: Vec<i64> = manager.students().map(|s| s.id()).collect();
    assert_eq!(ids, vec![-1, 5]);
}

#[test]
fn test_with_policy_in_const_context() {
    const EMPTY: AttendanceManager = AttendanceManager::with_policy(DuplicatePolicy::Keep);

    assert_eq!(EMPTY.len(), 0);
    assert!(EMPTY.is_empty());
    assert_eq!(EMPTY.policy(), DuplicatePolicy::Keep);
}
