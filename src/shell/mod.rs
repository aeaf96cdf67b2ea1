//! Interactive console shell.
//!
//! The shell owns all user interaction: it prompts, validates and re-prompts,
//! constructs records, and asks the store to render itself. It works over any
//! `BufRead`/`Write` pair, so sessions can be scripted.

mod menu;
mod prompt;
mod session;

pub use menu::{MENU_TITLE, MenuChoice, write_menu};
pub use prompt::Prompter;
pub use session::{OutputFormat, Shell};
