//! Main menu.

use std::io::{self, Write};

/// Heading shown above the menu entries.
pub const MENU_TITLE: &str = "**** University Management System ****";

/// One main-menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a student record.
    AddStudent,
    /// Add a full-time employee record.
    AddFullTimeEmployee,
    /// Add a part-time employee record.
    AddPartTimeEmployee,
    /// Show all records.
    DisplayAll,
    /// Leave the shell.
    Exit,
}

impl MenuChoice {
    /// All entries in menu order. Entry `n` is selected by typing `n + 1`.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddStudent,
        MenuChoice::AddFullTimeEmployee,
        MenuChoice::AddPartTimeEmployee,
        MenuChoice::DisplayAll,
        MenuChoice::Exit,
    ];

    /// Maps a typed menu number to an entry.
    pub fn from_number(number: i32) -> Option<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddStudent => "Add Student",
            Self::AddFullTimeEmployee => "Add Full-time Employee",
            Self::AddPartTimeEmployee => "Add Part-time Employee",
            Self::DisplayAll => "Display All Records",
            Self::Exit => "Exit",
        }
    }
}

/// Writes the menu, preceded by a blank line.
pub fn write_menu(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", MENU_TITLE)?;
    for (index, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, choice.label())?;
    }
    Ok(())
}
