//! Configuration types for the record manager.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::RecordResult;
use crate::models::{DisplayLayout, FullTimeEmployee, PartTimeEmployee, Record, Student};

/// The complete configuration.
///
/// Every section is optional in the file and falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rendering settings.
    pub display: DisplayLayout,
    /// Records loaded into the store at startup.
    pub seed: SeedConfig,
}

/// Startup seed data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Whether the seed records are loaded at all.
    pub enabled: bool,
    /// Records to append, in order.
    pub records: Vec<SeedRecord>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            records: SeedRecord::samples(),
        }
    }
}

/// A record as written in the configuration file.
///
/// Values are checked by the record constructors when converted with
/// [`SeedRecord::into_record`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeedRecord {
    /// Seed for a [`Student`].
    Student {
        /// Student name.
        name: String,
        /// Student id.
        id: i32,
        /// Course code.
        course: String,
        /// Grade in [0, 100].
        grade: f64,
    },
    /// Seed for a [`FullTimeEmployee`].
    FullTimeEmployee {
        /// Employee name.
        name: String,
        /// Employee id.
        id: i32,
        /// Monthly salary.
        monthly_salary: Decimal,
    },
    /// Seed for a [`PartTimeEmployee`].
    PartTimeEmployee {
        /// Employee name.
        name: String,
        /// Employee id.
        id: i32,
        /// Hourly rate.
        hourly_rate: Decimal,
        /// Hours worked.
        hours_worked: u32,
    },
}

impl SeedRecord {
    /// The four sample records loaded when no configuration overrides them.
    pub fn samples() -> Vec<Self> {
        vec![
            Self::Student {
                name: "Ahmed Ali".to_string(),
                id: 2021001,
                course: "CS101".to_string(),
                grade: 95.5,
            },
            Self::Student {
                name: "Sara Noor".to_string(),
                id: 2021002,
                course: "CS230".to_string(),
                grade: 45.0,
            },
            Self::FullTimeEmployee {
                name: "Dr. Omar".to_string(),
                id: 101,
                monthly_salary: Decimal::new(15000, 0),
            },
            Self::PartTimeEmployee {
                name: "Eng. Khalid".to_string(),
                id: 102,
                hourly_rate: Decimal::new(1000, 1),
                hours_worked: 20,
            },
        ]
    }

    /// Builds the record through its validating constructor.
    pub fn into_record(self) -> RecordResult<Record> {
        let record = match self {
            Self::Student {
                name,
                id,
                course,
                grade,
            } => Student::new(name, id, course, grade)?.into(),
            Self::FullTimeEmployee {
                name,
                id,
                monthly_salary,
            } => FullTimeEmployee::new(name, id, monthly_salary)?.into(),
            Self::PartTimeEmployee {
                name,
                id,
                hourly_rate,
                hours_worked,
            } => PartTimeEmployee::new(name, id, hourly_rate, hours_worked)?.into(),
        };
        Ok(record)
    }
}
