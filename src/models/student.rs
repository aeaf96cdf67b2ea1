//! Student record.

use std::io::{self, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{RecordError, RecordResult};

use super::person::{DisplayLayout, Person, RULE, format_amount, require_text};

/// Lowest grade that counts as a pass.
pub const PASS_MARK: f64 = 50.0;

/// A student enrolled in a course.
///
/// # Examples
///
/// ```
/// use campus_records::models::{Person, Student};
///
/// let student = Student::new("Ahmed Ali", 2021001, "CS101", 95.5).unwrap();
/// assert!(student.is_pass());
/// assert_eq!(student.name(), "Ahmed Ali");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    id: i32,
    course: String,
    grade: f64,
}

impl Student {
    /// Creates a student, rejecting an empty name or course and grades outside [0, 100].
    pub fn new(
        name: impl Into<String>,
        id: i32,
        course: impl Into<String>,
        grade: f64,
    ) -> RecordResult<Self> {
        Ok(Self {
            name: require_text("name", name.into())?,
            id,
            course: require_text("course", course.into())?,
            grade: Self::validate_grade(grade)?,
        })
    }

    /// Checks that a grade lies within [0, 100]. NaN is rejected.
    pub fn validate_grade(grade: f64) -> RecordResult<f64> {
        if (0.0..=100.0).contains(&grade) {
            Ok(grade)
        } else {
            Err(RecordError::invalid(
                "grade",
                "Grade must be between 0 and 100.",
            ))
        }
    }

    /// The course code.
    pub fn course(&self) -> &str {
        &self.course
    }

    /// The grade in [0, 100].
    pub fn grade(&self) -> f64 {
        self.grade
    }

    /// Returns true if the grade is at least [`PASS_MARK`].
    pub fn is_pass(&self) -> bool {
        self.grade >= PASS_MARK
    }

    /// `PASS` or `FAIL`.
    pub fn status(&self) -> &'static str {
        if self.is_pass() { "PASS" } else { "FAIL" }
    }
}

impl Person for Student {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn write_details(&self, _layout: &DisplayLayout, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Type: Student")?;
        writeln!(out, "Name: {}", self.name)?;
        writeln!(out, "ID: {}", self.id)?;
        writeln!(out, "Course: {}", self.course)?;
        writeln!(out, "Grade: {}", format_grade(self.grade))?;
        writeln!(out, "Status: {}", self.status())?;
        writeln!(out, "{}", RULE)
    }
}

/// Two-decimal grade, rounding half up on the shortest decimal form of the value.
fn format_grade(grade: f64) -> String {
    match Decimal::from_str(&grade.to_string()) {
        Ok(exact) => format_amount(exact),
        Err(_) => format!("{:.2}", grade),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_with_grade(grade: f64) -> Student {
        Student::new("Test Student", 1, "CS101", grade).unwrap()
    }

    fn render(student: &Student) -> String {
        let mut out = Vec::new();
        student.display_details(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_grade_exactly_fifty_is_pass() {
        assert!(student_with_grade(50.0).is_pass());
    }

    #[test]
    fn test_grade_just_below_fifty_is_fail() {
        assert!(!student_with_grade(49.999).is_pass());
    }

    #[test]
    fn test_grade_just_above_fifty_is_pass() {
        assert!(student_with_grade(50.001).is_pass());
    }

    #[test]
    fn test_grade_bounds_are_inclusive() {
        assert!(Student::new("A", 1, "C", 0.0).is_ok());
        assert!(Student::new("A", 1, "C", 100.0).is_ok());
    }

    #[test]
    fn test_grade_out_of_range_is_rejected() {
        for grade in [-0.01, 100.01, f64::NAN] {
            match Student::new("A", 1, "C", grade) {
                Err(RecordError::InvalidArgument { field, .. }) => assert_eq!(field, "grade"),
                other => panic!("Expected InvalidArgument for {}, got {:?}", grade, other),
            }
        }
    }

    #[test]
    fn test_empty_course_is_rejected() {
        let err = Student::new("A", 1, "", 70.0).unwrap_err();
        assert_eq!(err.user_message(), "Course must not be empty.");
    }

    #[test]
    fn test_display_passing_student() {
        let student = Student::new("Ahmed Ali", 2021001, "CS101", 95.5).unwrap();
        let expected = format!(
            "{rule}\nType: Student\nName: Ahmed Ali\nID: 2021001\nCourse: CS101\nGrade: 95.50\nStatus: PASS\n{rule}\n",
            rule = RULE
        );
        assert_eq!(render(&student), expected);
    }

    #[test]
    fn test_format_grade_rounds_ties_up() {
        assert_eq!(format_grade(50.125), "50.13");
        assert_eq!(format_grade(0.125), "0.13");
        assert_eq!(format_grade(2.675), "2.68");
        assert_eq!(format_grade(72.124), "72.12");
        assert_eq!(format_grade(100.0), "100.00");
    }

    #[test]
    fn test_display_rounds_grade_ties_up() {
        let student = student_with_grade(50.125);
        assert!(render(&student).contains("Grade: 50.13\n"));
    }

    #[test]
    fn test_display_failing_student() {
        let student = Student::new("Sara Noor", 2021002, "CS230", 45.0).unwrap();
        let output = render(&student);
        assert!(output.contains("Grade: 45.00\n"));
        assert!(output.contains("Status: FAIL\n"));
    }
}
