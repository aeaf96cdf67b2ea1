//! Configuration loading for the record manager.
//!
//! This module loads the optional YAML configuration file, which controls
//! how records are rendered and which records are seeded at startup.
//!
//! # Example
//!
//! ```no_run
//! use campus_records::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/campus.yaml").unwrap();
//! println!("Currency: {}", loader.display().currency);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, SeedConfig, SeedRecord};
