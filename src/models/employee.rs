//! Employee records.
//!
//! This module defines the two salaried record types: [`FullTimeEmployee`]
//! paid a fixed monthly amount and [`PartTimeEmployee`] paid by the hour.

use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::error::{RecordError, RecordResult};

use super::person::{DisplayLayout, Person, RULE, Salaried, format_amount, require_text};

/// An employee on a fixed monthly salary.
///
/// # Examples
///
/// ```
/// use campus_records::models::{FullTimeEmployee, Salaried};
/// use rust_decimal::Decimal;
///
/// let employee = FullTimeEmployee::new("Dr. Omar", 101, Decimal::new(15000, 0)).unwrap();
/// assert_eq!(employee.calculate_salary(), Decimal::new(15000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullTimeEmployee {
    name: String,
    id: i32,
    monthly_salary: Decimal,
}

impl FullTimeEmployee {
    /// Creates a full-time employee. The monthly salary must be strictly positive.
    pub fn new(name: impl Into<String>, id: i32, monthly_salary: Decimal) -> RecordResult<Self> {
        Ok(Self {
            name: require_text("name", name.into())?,
            id,
            monthly_salary: Self::validate_monthly_salary(monthly_salary)?,
        })
    }

    /// Checks that a monthly salary is strictly positive.
    pub fn validate_monthly_salary(monthly_salary: Decimal) -> RecordResult<Decimal> {
        if monthly_salary > Decimal::ZERO {
            Ok(monthly_salary)
        } else {
            Err(RecordError::invalid(
                "monthly_salary",
                "Salary must be positive.",
            ))
        }
    }

    /// The configured monthly salary.
    pub fn monthly_salary(&self) -> Decimal {
        self.monthly_salary
    }
}

impl Person for FullTimeEmployee {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn write_details(&self, layout: &DisplayLayout, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Type: Full-Time Employee")?;
        writeln!(out, "{}", layout.name_id_line(&self.name, self.id))?;
        writeln!(out, "Monthly Salary: {}", layout.money(self.calculate_salary()))?;
        writeln!(out, "{}", RULE)
    }
}

impl Salaried for FullTimeEmployee {
    fn calculate_salary(&self) -> Decimal {
        self.monthly_salary
    }
}

/// An employee paid for the hours they worked.
///
/// # Examples
///
/// ```
/// use campus_records::models::{PartTimeEmployee, Salaried};
/// use rust_decimal::Decimal;
///
/// let employee = PartTimeEmployee::new("Eng. Khalid", 102, Decimal::new(100, 0), 20).unwrap();
/// assert_eq!(employee.calculate_salary(), Decimal::new(2000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartTimeEmployee {
    name: String,
    id: i32,
    hourly_rate: Decimal,
    hours_worked: u32,
}

impl PartTimeEmployee {
    /// Creates a part-time employee.
    ///
    /// The hourly rate and hours worked must both be strictly positive, and
    /// their product must be representable.
    pub fn new(
        name: impl Into<String>,
        id: i32,
        hourly_rate: Decimal,
        hours_worked: u32,
    ) -> RecordResult<Self> {
        let name = require_text("name", name.into())?;
        let hourly_rate = Self::validate_hourly_rate(hourly_rate)?;
        if hours_worked == 0 {
            return Err(hours_error());
        }
        let hours_worked = Self::validate_total_salary(hourly_rate, hours_worked)?;
        Ok(Self {
            name,
            id,
            hourly_rate,
            hours_worked,
        })
    }

    /// Checks that an hourly rate is strictly positive.
    pub fn validate_hourly_rate(hourly_rate: Decimal) -> RecordResult<Decimal> {
        if hourly_rate > Decimal::ZERO {
            Ok(hourly_rate)
        } else {
            Err(RecordError::invalid("hourly_rate", "Rate must be positive."))
        }
    }

    /// Checks that a raw hours value is strictly positive.
    pub fn validate_hours_worked(hours: i32) -> RecordResult<u32> {
        u32::try_from(hours)
            .ok()
            .filter(|h| *h > 0)
            .ok_or_else(hours_error)
    }

    /// Checks that `hourly_rate * hours` fits in a [`Decimal`], returning the hours.
    pub fn validate_total_salary(hourly_rate: Decimal, hours: u32) -> RecordResult<u32> {
        match hourly_rate.checked_mul(Decimal::from(hours)) {
            Some(_) => Ok(hours),
            None => Err(RecordError::invalid(
                "hours_worked",
                "Total salary is out of range.",
            )),
        }
    }

    /// The hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Hours worked in the period.
    pub fn hours_worked(&self) -> u32 {
        self.hours_worked
    }
}

fn hours_error() -> RecordError {
    RecordError::invalid("hours_worked", "Hours must be positive.")
}

impl Person for PartTimeEmployee {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn write_details(&self, layout: &DisplayLayout, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Type: Part-Time Employee")?;
        writeln!(out, "{}", layout.name_id_line(&self.name, self.id))?;
        writeln!(
            out,
            "Rate: {} | Hours: {}",
            format_amount(self.hourly_rate),
            self.hours_worked
        )?;
        writeln!(out, "Total Salary: {}", layout.money(self.calculate_salary()))?;
        writeln!(out, "{}", RULE)
    }
}

impl Salaried for PartTimeEmployee {
    // Overflow is ruled out at construction.
    fn calculate_salary(&self) -> Decimal {
        self.hourly_rate * Decimal::from(self.hours_worked)
    }
}
