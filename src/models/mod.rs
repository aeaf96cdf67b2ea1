//! Record model for the record manager.
//!
//! This module contains the person and salary capabilities, the concrete
//! student and employee types, and the [`Record`] union the store holds.

mod employee;
mod person;
mod record;
mod student;

pub use employee::{FullTimeEmployee, PartTimeEmployee};
pub use person::{DEFAULT_CURRENCY, DisplayLayout, Person, RULE, Salaried, format_amount};
pub use record::{Record, RecordKind};
pub use student::{PASS_MARK, Student};
