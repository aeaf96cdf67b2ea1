//! Insertion-ordered record storage.
//!
//! The [`RecordStore`] is the single owner of every record for the lifetime
//! of a session. It only grows: there is no removal, update or lookup by id.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::models::{DisplayLayout, Person, Record};

/// Message written by [`RecordStore::display_all`] when nothing has been added.
pub const NO_RECORDS_MESSAGE: &str = "No records found.";

/// An ordered collection of records.
///
/// Duplicate ids are allowed; records are kept exactly in the order they
/// were appended.
///
/// # Example
///
/// ```
/// use campus_records::models::{Record, Student};
/// use campus_records::store::RecordStore;
///
/// let mut store = RecordStore::new();
/// assert!(store.is_empty());
///
/// store.append(Student::new("Ahmed Ali", 2021001, "CS101", 95.5).unwrap());
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record to the end of the store.
    pub fn append(&mut self, record: impl Into<Record>) {
        let record = record.into();
        info!(
            kind = %record.kind(),
            id = record.id(),
            position = self.records.len(),
            "Record appended"
        );
        self.records.push(record);
    }

    /// Returns true if no record has ever been appended.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterates records in insertion order. Each call starts from the beginning.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Calls `visitor` on each record in insertion order.
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Record),
    {
        self.records.iter().for_each(visitor);
    }

    /// Writes every record block, or [`NO_RECORDS_MESSAGE`] when empty.
    pub fn display_all(&self, layout: &DisplayLayout, out: &mut dyn Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "{}", NO_RECORDS_MESSAGE);
        }
        debug!(count = self.records.len(), "Displaying records");
        for record in &self.records {
            record.write_details(layout, out)?;
        }
        Ok(())
    }

    /// Renders all records as a pretty-printed JSON array.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let values: Vec<serde_json::Value> = self.records.iter().map(Record::to_json).collect();
        serde_json::to_string_pretty(&values)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Record> for RecordStore {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.append(record);
        }
    }
}
