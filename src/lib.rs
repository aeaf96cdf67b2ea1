//! Console record manager for students and employees.
//!
//! This crate stores student, full-time and part-time employee records in a
//! single insertion-ordered store, computes salaries, and renders every record
//! with its own type-specific layout. An interactive shell collects and
//! validates input.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod shell;
pub mod store;
