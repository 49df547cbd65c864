#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Errors raised while building a [`Grade`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    /// The test name was empty or only whitespace.
    #[error("Test name cannot be blank.")]
    EmptyTestName,
    /// The grade value was empty or only whitespace.
    #[error("Grade value cannot be blank.")]
    EmptyValue,
    /// A field contained a line break or other control character.
    #[error("Grade fields cannot contain control characters: `{0:?}`")]
    ControlCharacter(String),
    /// The test name contained the `:` that separates it from the value.
    #[error("Test name `{0}` cannot contain `:`.")]
    SeparatorInTestName(String),
    /// The string could not be read as `<test name>: <value>`.
    #[error("Could not read `{0}` as a grade, expected `<test name>: <value>`.")]
    Malformed(String),
}

#[derive(Tabled, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GradeFields")]
/// A grade recorded for one test
pub struct Grade {
    #[tabled(rename = "Test")]
    /// * `test_name`: the test this grade belongs to, matched case-insensitively
    pub(crate) test_name: String,
    #[tabled(rename = "Grade")]
    /// * `value`: the grade received, eg. `A-` or `87/100`
    pub(crate) value:     String,
}

/// Unvalidated shape of a serialized [`Grade`].
#[derive(Deserialize)]
struct GradeFields {
    /// Raw test name
    test_name: String,
    /// Raw grade value
    value:     String,
}

impl TryFrom<GradeFields> for Grade {
    type Error = GradeError;

    fn try_from(fields: GradeFields) -> Result<Self, Self::Error> {
        Grade::new(fields.test_name, fields.value)
    }
}

impl Grade {
    /// Creates a new grade -
    /// * `test_name` - The name of the test, surrounding whitespace is dropped
    /// * `value` - The grade received, surrounding whitespace is dropped
    ///
    /// Neither field may contain control characters, and the test name may
    /// not contain `:`, so the displayed form always reads back with
    /// [`FromStr`].
    pub fn new(test_name: impl Into<String>, value: impl Into<String>) -> Result<Self, GradeError> {
        let test_name = test_name.into().trim().to_string();
        let value = value.into().trim().to_string();

        if test_name.is_empty() {
            return Err(GradeError::EmptyTestName);
        }
        if value.is_empty() {
            return Err(GradeError::EmptyValue);
        }
        if let Some(field) = [&test_name, &value]
            .into_iter()
            .find(|f| f.chars().any(char::is_control))
        {
            return Err(GradeError::ControlCharacter(field.clone()));
        }
        if test_name.contains(':') {
            return Err(GradeError::SeparatorInTestName(test_name));
        }

        Ok(Self { test_name, value })
    }

    /// Returns the test name as it was recorded.
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Returns the grade value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this grade belongs to `test_name`, ignoring case.
    pub fn is_for(&self, test_name: &str) -> bool {
        eq_ignore_case(&self.test_name, test_name)
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.test_name, self.value)
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    /// Reads a grade in its displayed form, eg. `Midterm: A-`. Only the first
    /// `:` separates the name from the value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (test_name, value) = s
            .split_once(':')
            .ok_or_else(|| GradeError::Malformed(s.to_string()))?;
        Grade::new(test_name, value)
    }
}

/// Compares two strings character by character, treating characters as equal
/// when they match directly, after upper-casing, or after lower-casing. No
/// locale rules apply.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y
                || x.to_uppercase().eq(y.to_uppercase())
                || x.to_lowercase().eq(y.to_lowercase())
        })
}
