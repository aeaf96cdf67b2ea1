//! The closed set of stored record types.

use std::fmt;
use std::io::{self, Write};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::employee::{FullTimeEmployee, PartTimeEmployee};
use super::person::{DisplayLayout, Person, Salaried, format_amount};
use super::student::Student;

/// Discriminates the record variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// A [`Student`].
    Student,
    /// A [`FullTimeEmployee`].
    FullTimeEmployee,
    /// A [`PartTimeEmployee`].
    PartTimeEmployee,
}

impl RecordKind {
    /// Stable snake_case name used in logs and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::FullTimeEmployee => "full_time_employee",
            Self::PartTimeEmployee => "part_time_employee",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored record.
///
/// Dispatch over the variants replaces virtual overriding: every call goes
/// through [`Person`], and salary queries through [`Record::as_salaried`].
///
/// # Examples
///
/// ```
/// use campus_records::models::{Person, Record, Student};
///
/// let record = Record::from(Student::new("Sara Noor", 2021002, "CS230", 45.0).unwrap());
/// assert_eq!(record.id(), 2021002);
/// assert!(record.salary().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// A student record.
    Student(Student),
    /// A full-time employee record.
    FullTime(FullTimeEmployee),
    /// A part-time employee record.
    PartTime(PartTimeEmployee),
}

impl Record {
    /// Which variant this record is.
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Student(_) => RecordKind::Student,
            Self::FullTime(_) => RecordKind::FullTimeEmployee,
            Self::PartTime(_) => RecordKind::PartTimeEmployee,
        }
    }

    /// Returns the salary capability for employee records.
    pub fn as_salaried(&self) -> Option<&dyn Salaried> {
        match self {
            Self::Student(_) => None,
            Self::FullTime(e) => Some(e as &dyn Salaried),
            Self::PartTime(e) => Some(e as &dyn Salaried),
        }
    }

    /// Computed salary for employee records, `None` for students.
    pub fn salary(&self) -> Option<Decimal> {
        self.as_salaried().map(|e| e.calculate_salary())
    }

    /// Builds a JSON summary including derived values.
    ///
    /// Money is rendered as two-decimal strings.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Student(s) => serde_json::json!({
                "type": self.kind().as_str(),
                "name": s.name(),
                "id": s.id(),
                "course": s.course(),
                "grade": s.grade(),
                "status": s.status(),
            }),
            Self::FullTime(e) => serde_json::json!({
                "type": self.kind().as_str(),
                "name": e.name(),
                "id": e.id(),
                "monthly_salary": format_amount(e.monthly_salary()),
                "salary": format_amount(e.calculate_salary()),
            }),
            Self::PartTime(e) => serde_json::json!({
                "type": self.kind().as_str(),
                "name": e.name(),
                "id": e.id(),
                "hourly_rate": format_amount(e.hourly_rate()),
                "hours_worked": e.hours_worked(),
                "salary": format_amount(e.calculate_salary()),
            }),
        }
    }

    fn inner(&self) -> &dyn Person {
        match self {
            Self::Student(s) => s,
            Self::FullTime(e) => e,
            Self::PartTime(e) => e,
        }
    }
}

impl Person for Record {
    fn id(&self) -> i32 {
        self.inner().id()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn write_details(&self, layout: &DisplayLayout, out: &mut dyn Write) -> io::Result<()> {
        self.inner().write_details(layout, out)
    }
}

impl From<Student> for Record {
    fn from(student: Student) -> Self {
        Self::Student(student)
    }
}

impl From<FullTimeEmployee> for Record {
    fn from(employee: FullTimeEmployee) -> Self {
        Self::FullTime(employee)
    }
}

impl From<PartTimeEmployee> for Record {
    fn from(employee: PartTimeEmployee) -> Self {
        Self::PartTime(employee)
    }
}
