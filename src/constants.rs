#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment variable (or `.env` entry) selecting the log level.
pub const LOG_LEVEL_ENV: &str = "GRADEBOOK_LOG_LEVEL";

/// Header panel shown above [`crate::GradeList::to_table`] output.
pub const GRADE_TABLE_HEADER: &str = "Grades";
