//! The address book: an in-memory, name-keyed collection of records.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::birthdays::{upcoming_birthdays, UpcomingBirthday};
use crate::record::Record;

/// In-memory contact store, keyed by the record's name.
///
/// The book owns its records for the lifetime of the process; there is no
/// persistence. Iteration order is not part of the contract. The book is
/// meant to be owned explicitly by the caller and passed into every
/// operation, never held as global state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any existing record with
    /// the same name (last write wins, including its phones and birthday).
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    /// Look up a record by exact name. A missing name is a normal outcome,
    /// not an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable variant of [`AddressBook::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record under `name`, if any.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    /// Iterate over all records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays occurring within the next seven days relative to `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(self.iter(), today)
    }
}
