#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use super::grade::Grade;
use crate::constants::GRADE_TABLE_HEADER;

/// Errors raised while updating a [`GradeList`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GradeListError {
    /// No grade was given to record.
    #[error("Grade cannot be null")]
    NullArgument,
}

/// The grades recorded for one student.
///
/// Holds at most one [`Grade`] per test name, compared case-insensitively.
/// Grades keep the order they were recorded in, except that recording a new
/// grade for an existing test moves that test to the end.
///
/// Two lists are equal when they hold equal grades in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Grade>", into = "Vec<Grade>")]
pub struct GradeList {
    /// Recorded grades, in sequence order
    grades: Vec<Grade>,
}

impl GradeList {
    /// Creates an empty `GradeList`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or updates the grade for a test.
    ///
    /// Any grade already recorded for the same test (ignoring case) is
    /// removed and returned, and `grade` is appended. Passing `None` fails
    /// with [`GradeListError::NullArgument`] and leaves the list untouched.
    pub fn add_grade(
        &mut self,
        grade: impl Into<Option<Grade>>,
    ) -> Result<Option<Grade>, GradeListError> {
        let grade = grade.into().ok_or(GradeListError::NullArgument)?;
        Ok(self.insert(grade))
    }

    /// Replaces any grade for the same test and appends `grade`.
    fn insert(&mut self, grade: Grade) -> Option<Grade> {
        let replaced = self.take(grade.test_name());
        match &replaced {
            Some(old) => tracing::debug!(
                test = grade.test_name(),
                old = old.value(),
                new = grade.value(),
                "updated grade"
            ),
            None => tracing::debug!(test = grade.test_name(), value = grade.value(), "added grade"),
        }

        self.grades.push(grade);
        replaced
    }

    /// Returns the grade recorded for `test_name`, ignoring case.
    pub fn get_grade(&self, test_name: &str) -> Option<&Grade> {
        self.grades.iter().find(|g| g.is_for(test_name))
    }

    /// Whether a grade is recorded for `test_name`, ignoring case.
    pub fn has_grade(&self, test_name: &str) -> bool {
        self.get_grade(test_name).is_some()
    }

    /// Removes and returns the grade recorded for `test_name`, if any.
    pub fn remove_grade(&mut self, test_name: &str) -> Option<Grade> {
        let removed = self.take(test_name);
        if let Some(grade) = &removed {
            tracing::debug!(test = grade.test_name(), "removed grade");
        }
        removed
    }

    /// Number of recorded grades.
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// Whether no grades are recorded.
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Iterates over the grades in sequence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Grade> {
        self.grades.iter()
    }

    /// Iterates over the recorded test names in sequence order.
    pub fn test_names(&self) -> impl Iterator<Item = &str> {
        self.grades.iter().map(Grade::test_name)
    }

    /// Renders the grades as a table for terminal display.
    pub fn to_table(&self) -> String {
        Table::new(&self.grades)
            .with(Panel::header(GRADE_TABLE_HEADER))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string()
    }

    /// Pulls the entry for `test_name` out of the sequence.
    fn take(&mut self, test_name: &str) -> Option<Grade> {
        self.grades
            .iter()
            .position(|g| g.is_for(test_name))
            .map(|i| self.grades.remove(i))
    }
}

impl Display for GradeList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grades.iter().join("\n"))
    }
}

impl Extend<Grade> for GradeList {
    fn extend<I: IntoIterator<Item = Grade>>(&mut self, iter: I) {
        for grade in iter {
            self.insert(grade);
        }
    }
}

impl FromIterator<Grade> for GradeList {
    fn from_iter<I: IntoIterator<Item = Grade>>(iter: I) -> Self {
        let mut list = GradeList::new();
        list.extend(iter);
        list
    }
}

impl From<Vec<Grade>> for GradeList {
    fn from(grades: Vec<Grade>) -> Self {
        grades.into_iter().collect()
    }
}

impl From<GradeList> for Vec<Grade> {
    fn from(list: GradeList) -> Self {
        list.grades
    }
}

impl IntoIterator for GradeList {
    type IntoIter = std::vec::IntoIter<Grade>;
    type Item = Grade;

    fn into_iter(self) -> Self::IntoIter {
        self.grades.into_iter()
    }
}

impl<'a> IntoIterator for &'a GradeList {
    type IntoIter = std::slice::Iter<'a, Grade>;
    type Item = &'a Grade;

    fn into_iter(self) -> Self::IntoIter {
        self.grades.iter()
    }
}
