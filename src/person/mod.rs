#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// A single test grade.
pub mod grade;
/// The per-student collection of grades.
pub mod grade_list;

pub use grade::{Grade, GradeError};
pub use grade_list::{GradeList, GradeListError};
