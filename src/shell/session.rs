//! The interactive control loop.
//!
//! A [`Shell`] borrows the caller's [`RecordStore`] for the whole session,
//! reads menu choices, collects validated field values, constructs records
//! and renders the store on request.

use std::io::{BufRead, Write};

use tracing::{info, info_span};
use uuid::Uuid;

use crate::error::{RecordError, RecordResult};
use crate::models::{DisplayLayout, FullTimeEmployee, PartTimeEmployee, Student};
use crate::store::RecordStore;

use super::menu::{MenuChoice, write_menu};
use super::prompt::Prompter;

/// How "Display All Records" renders the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One text block per record.
    #[default]
    Text,
    /// A pretty-printed JSON array.
    Json,
}

/// An interactive session over one store.
///
/// # Example
///
/// ```
/// use campus_records::shell::Shell;
/// use campus_records::store::RecordStore;
///
/// let mut store = RecordStore::new();
/// let input = "1\nLina\n7\nMATH101\n88\n5\n";
/// let mut output = Vec::new();
///
/// Shell::new(&mut store, input.as_bytes(), &mut output).run().unwrap();
/// assert_eq!(store.len(), 1);
/// ```
pub struct Shell<'s, R, W> {
    store: &'s mut RecordStore,
    prompter: Prompter<R, W>,
    layout: DisplayLayout,
    format: OutputFormat,
    session_id: Uuid,
}

impl<'s, R: BufRead, W: Write> Shell<'s, R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub fn new(store: &'s mut RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            prompter: Prompter::new(input, output),
            layout: DisplayLayout::default(),
            format: OutputFormat::default(),
            session_id: Uuid::new_v4(),
        }
    }

    /// Sets the layout used to render records.
    pub fn with_layout(mut self, layout: DisplayLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the display format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// Running out of input ends the session normally.
    pub fn run(&mut self) -> RecordResult<()> {
        let span = info_span!("session", session_id = %self.session_id);
        let _guard = span.enter();
        info!(records = self.store.len(), "Session started");

        match self.menu_loop() {
            Err(RecordError::InputClosed) => {
                info!(records = self.store.len(), "Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> RecordResult<()> {
        loop {
            write_menu(self.prompter.output())?;
            let number = self.prompter.ask_int("Enter your choice: ")?;
            match MenuChoice::from_number(number) {
                Some(MenuChoice::AddStudent) => self.add_student()?,
                Some(MenuChoice::AddFullTimeEmployee) => self.add_full_time_employee()?,
                Some(MenuChoice::AddPartTimeEmployee) => self.add_part_time_employee()?,
                Some(MenuChoice::DisplayAll) => self.display_all()?,
                Some(MenuChoice::Exit) => {
                    self.prompter.say("Exiting system. Goodbye!")?;
                    info!(records = self.store.len(), "Session ended by user");
                    return Ok(());
                }
                None => self.prompter.say("Invalid choice. Please select 1-5.")?,
            }
        }
    }

    /// Prompts for a student and appends it.
    pub fn add_student(&mut self) -> RecordResult<()> {
        self.prompter.say("\n--- Add Student ---")?;
        let name = self.prompter.ask_text("Enter Name: ")?;
        let id = self.prompter.ask_int("Enter ID: ")?;
        let course = self.prompter.ask_text("Enter Course: ")?;
        let grade = self.prompter.ask_until(
            |p| p.ask_f64("Enter Grade (0-100): "),
            Student::validate_grade,
        )?;

        self.store.append(Student::new(name, id, course, grade)?);
        self.prompter.say("Student added successfully.")
    }

    /// Prompts for a full-time employee and appends it.
    pub fn add_full_time_employee(&mut self) -> RecordResult<()> {
        self.prompter.say("\n--- Add Full-time Employee ---")?;
        let name = self.prompter.ask_text("Enter Name: ")?;
        let id = self.prompter.ask_int("Enter ID: ")?;
        let salary = self.prompter.ask_until(
            |p| p.ask_decimal("Enter Monthly Salary: "),
            FullTimeEmployee::validate_monthly_salary,
        )?;

        self.store.append(FullTimeEmployee::new(name, id, salary)?);
        self.prompter.say("Full-time Employee added.")
    }

    /// Prompts for a part-time employee and appends it.
    pub fn add_part_time_employee(&mut self) -> RecordResult<()> {
        self.prompter.say("\n--- Add Part-time Employee ---")?;
        let name = self.prompter.ask_text("Enter Name: ")?;
        let id = self.prompter.ask_int("Enter ID: ")?;
        let rate = self.prompter.ask_until(
            |p| p.ask_decimal("Enter Hourly Rate: "),
            PartTimeEmployee::validate_hourly_rate,
        )?;
        let hours = self.prompter.ask_until(
            |p| p.ask_int("Enter Hours Worked: "),
            |hours: i32| {
                let hours = PartTimeEmployee::validate_hours_worked(hours)?;
                PartTimeEmployee::validate_total_salary(rate, hours)
            },
        )?;

        self.store
            .append(PartTimeEmployee::new(name, id, rate, hours)?);
        self.prompter.say("Part-time Employee added.")
    }

    /// Writes every record, or the empty-store message.
    pub fn display_all(&mut self) -> RecordResult<()> {
        self.prompter.say("\n--- All Records ---")?;
        match self.format {
            OutputFormat::Text => self
                .store
                .display_all(&self.layout, self.prompter.output())?,
            OutputFormat::Json => {
                let json = self.store.to_json_pretty()?;
                self.prompter.say(&json)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, RecordKind};
    use rust_decimal::Decimal;

    fn run_script(store: &mut RecordStore, script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(store, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_student_reprompts_out_of_range_grade() {
        let mut store = RecordStore::new();
        let output = run_script(&mut store, "1\nLina\n7\nMATH101\n101\n-1\n50\n5\n");

        assert_eq!(output.matches("Error: Grade must be between 0 and 100.").count(), 2);
        assert!(output.contains("Student added successfully."));
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().next().unwrap().kind(), RecordKind::Student);
    }

    #[test]
    fn test_add_full_time_rejects_non_positive_salary() {
        let mut store = RecordStore::new();
        let output = run_script(&mut store, "2\nDean\n1\n0\nabc\n9000\n5\n");

        assert!(output.contains("--- Add Full-time Employee ---"));
        assert!(output.contains("Error: Salary must be positive."));
        assert!(output.contains("Invalid input. Please enter a number."));
        assert!(output.contains("Full-time Employee added."));
        assert_eq!(store.iter().next().unwrap().salary(), Some(Decimal::new(9000, 0)));
    }

    #[test]
    fn test_add_part_time_validates_rate_and_hours() {
        let mut store = RecordStore::new();
        let output = run_script(&mut store, "3\nTutor\n9\n-2\n12.5\n0\n4\n5\n");

        assert!(output.contains("Error: Rate must be positive."));
        assert!(output.contains("Error: Hours must be positive."));
        assert!(output.contains("Part-time Employee added."));
        let record = store.iter().next().unwrap();
        assert_eq!(record.name(), "Tutor");
        assert_eq!(record.salary(), Some(Decimal::new(50, 0)));
    }

    #[test]
    fn test_add_part_time_reprompts_hours_when_total_overflows() {
        let mut store = RecordStore::new();
        let output = run_script(
            &mut store,
            "3\nBig\n1\n79228162514264337593543950335\n2\n1\n4\n5\n",
        );

        assert_eq!(output.matches("Error: Total salary is out of range.").count(), 1);
        assert!(output.contains("Part-time Employee added."));
        assert!(output.ends_with("Exiting system. Goodbye!\n"));
        assert_eq!(store.iter().next().unwrap().salary(), Some(Decimal::MAX));
    }

    #[test]
    fn test_invalid_menu_choices() {
        let mut store = RecordStore::new();
        let output = run_script(&mut store, "9\nx\n5\n");

        assert!(output.contains("Invalid choice. Please select 1-5."));
        assert!(output.contains("Invalid input. Please enter a valid number."));
        assert!(output.ends_with("Exiting system. Goodbye!\n"));
    }

    #[test]
    fn test_display_empty_store() {
        let mut store = RecordStore::new();
        let output = run_script(&mut store, "4\n5\n");
        assert!(output.contains("\n--- All Records ---\nNo records found.\n"));
    }

    #[test]
    fn test_display_json_format() {
        let mut store = RecordStore::new();
        store.append(Student::new("Sara Noor", 2021002, "CS230", 45.0).unwrap());

        let mut output = Vec::new();
        Shell::new(&mut store, "4\n5\n".as_bytes(), &mut output)
            .with_format(OutputFormat::Json)
            .run()
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("\"status\": \"FAIL\""));
        assert!(!output.contains("Type: Student"));
    }

    #[test]
    fn test_display_uses_configured_layout() {
        let mut store = RecordStore::new();
        store.append(FullTimeEmployee::new("Dr. Omar", 101, Decimal::new(15000, 0)).unwrap());

        let layout = DisplayLayout {
            currency: "EUR".to_string(),
            ..DisplayLayout::default()
        };
        let mut output = Vec::new();
        Shell::new(&mut store, "4\n5\n".as_bytes(), &mut output)
            .with_layout(layout)
            .run()
            .unwrap();

        assert!(String::from_utf8(output).unwrap().contains("15000.00 EUR"));
    }

    #[test]
    fn test_end_of_input_mid_prompt_discards_partial_record() {
        let mut store = RecordStore::new();
        let output = run_script(&mut store, "1\nLina\n");

        assert!(output.contains("Enter ID: "));
        assert!(store.is_empty());
    }
}
