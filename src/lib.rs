//! attendease - A console attendance tracker
//!
//! This library keeps students, the subjects they are enrolled in and a
//! per-subject attendance counter in memory, and provides the interactive
//! menu session that drives them.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod manager;
pub mod models;
pub mod output;
pub mod session;

pub use manager::AttendanceManager;
