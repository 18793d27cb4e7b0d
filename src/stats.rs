//! Aggregate statistics over the loaded student records
//!
//! Pure functions over a slice; nothing here touches the database.

use crate::data::Student;

/// Mean of every student's average. Returns 0 for an empty class to avoid
/// dividing by zero.
pub fn class_average(students: &[Student]) -> f64 {
    if students.is_empty() {
        return 0.0;
    }
    let total: f64 = students.iter().map(Student::average).sum();
    total / students.len() as f64
}

/// The student with the strictly greatest average, or None for an empty
/// class. Ties go to whichever student appears first in the slice.
pub fn top_student(students: &[Student]) -> Option<&Student> {
    let mut top: Option<&Student> = None;
    for student in students {
        match top {
            Some(current) if student.average() <= current.average() => {}
            _ => top = Some(student),
        }
    }
    top
}
