//! Shared record capabilities.
//!
//! Every stored record implements [`Person`]; the employee variants also
//! implement [`Salaried`]. Rendering goes through a [`DisplayLayout`] so the
//! currency suffix and column widths can be configured.

use std::io::{self, Write};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};

/// Separator printed above and below every record block.
pub const RULE: &str = "----------------------------------------";

/// Currency suffix used when no layout is configured.
pub const DEFAULT_CURRENCY: &str = "SAR";

/// Column and currency settings used when rendering records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayLayout {
    /// Suffix appended to every salary figure.
    pub currency: String,
    /// Minimum width of the name column on employee lines.
    pub name_width: usize,
    /// Minimum width of the id column on employee lines.
    pub id_width: usize,
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            name_width: 15,
            id_width: 10,
        }
    }
}

impl DisplayLayout {
    /// Formats the `Name: ... | ID: ...` line shared by employee records.
    ///
    /// Values are left-aligned and padded, never truncated.
    pub fn name_id_line(&self, name: &str, id: i32) -> String {
        format!(
            "Name: {:<name_w$} | ID: {:<id_w$}",
            name,
            id,
            name_w = self.name_width,
            id_w = self.id_width
        )
    }

    /// Formats an amount to two decimals followed by the currency suffix.
    pub fn money(&self, amount: Decimal) -> String {
        format!("{} {}", format_amount(amount), self.currency)
    }
}

/// Formats an amount with exactly two decimal places, rounding half away from zero.
///
/// # Examples
///
/// ```
/// use campus_records::models::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(15000, 0)), "15000.00");
/// assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// The capability every stored record provides.
pub trait Person {
    /// Caller-supplied identifier. Not required to be unique.
    fn id(&self) -> i32;

    /// Display name.
    fn name(&self) -> &str;

    /// Writes the record's block using the given layout.
    fn write_details(&self, layout: &DisplayLayout, out: &mut dyn Write) -> io::Result<()>;

    /// Writes the record's block using the default layout.
    fn display_details(&self, out: &mut dyn Write) -> io::Result<()> {
        self.write_details(&DisplayLayout::default(), out)
    }
}

/// The capability shared by paid employees.
pub trait Salaried: Person {
    /// Computes the salary from the current field values. Never cached.
    fn calculate_salary(&self) -> Decimal;
}

/// Rejects empty or whitespace-only text fields.
pub(crate) fn require_text(field: &str, value: String) -> RecordResult<String> {
    if value.trim().is_empty() {
        return Err(RecordError::invalid(field, format!("{} must not be empty.", title(field))));
    }
    Ok(value)
}

fn title(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
