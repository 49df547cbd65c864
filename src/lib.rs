//! # gradebook
//!
//! Test grade records for students in an address-book style application.
//! Each student owns a [`GradeList`], which keeps at most one [`Grade`] per
//! test name.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Logging setup
pub mod config;
/// Constant values used throughout the crate
pub mod constants;
/// The student-facing model: grades and grade lists
pub mod person;

pub use person::{Grade, GradeError, GradeList, GradeListError};
