//! Data model for student records

use thiserror::Error;

use super::store::StoreError;

/// Inclusive bounds for a subject score.
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Why an add operation was rejected or failed.
///
/// Callers branch on the variant rather than inspecting message text.
/// Format and range errors are shown to the user; storage errors are
/// logged and never surfaced.
#[derive(Error, Debug)]
pub enum AddError {
    #[error("Please enter valid numbers for marks.")]
    Format { field: &'static str },
    #[error("Marks must be between 0 and 100.")]
    Range { field: &'static str, value: i32 },
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
    #[error("An unexpected error occurred: {0}")]
    Unknown(String),
}

/// A single student record: identifying strings plus three subject marks.
///
/// Records are immutable after creation; there are no edit or delete
/// operations anywhere in the program.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub reg_number: String,
    pub math_marks: i32,
    pub java_marks: i32,
    pub php_marks: i32,
}

impl Student {
    /// Construct a record from already-trusted values (database rows, tests).
    pub fn new(
        name: impl Into<String>,
        reg_number: impl Into<String>,
        math_marks: i32,
        java_marks: i32,
        php_marks: i32,
    ) -> Self {
        Self {
            name: name.into(),
            reg_number: reg_number.into(),
            math_marks,
            java_marks,
            php_marks,
        }
    }

    /// Construct a record from raw form input.
    ///
    /// Trims every field, parses the three mark fields as integers, and
    /// checks each against [MIN_SCORE, MAX_SCORE]. The first failing field
    /// wins, checked in form order: math, java, php.
    pub fn from_input(
        name: &str,
        reg_number: &str,
        math: &str,
        java: &str,
        php: &str,
    ) -> Result<Self, AddError> {
        let math_marks = parse_marks(math, "math")?;
        let java_marks = parse_marks(java, "java")?;
        let php_marks = parse_marks(php, "php")?;

        check_range(math_marks, "math")?;
        check_range(java_marks, "java")?;
        check_range(php_marks, "php")?;

        Ok(Self {
            name: name.trim().to_string(),
            reg_number: reg_number.trim().to_string(),
            math_marks,
            java_marks,
            php_marks,
        })
    }

    /// Unweighted mean of the three subject marks. Not stored anywhere.
    pub fn average(&self) -> f64 {
        (self.math_marks + self.java_marks + self.php_marks) as f64 / 3.0
    }
}

fn parse_marks(raw: &str, field: &'static str) -> Result<i32, AddError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AddError::Format { field })
}

fn check_range(value: i32, field: &'static str) -> Result<(), AddError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(())
    } else {
        Err(AddError::Range { field, value })
    }
}
