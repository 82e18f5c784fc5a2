//! In-memory contact directory.
//!
//! The directory owns every `ContactRecord`, keyed by contact name. All
//! validation happens while a record is built, so a failed operation never
//! leaves the directory partially modified.

pub mod birthdays;

pub use birthdays::{weekday_name, BirthdayGroup, UpcomingBirthdays, BIRTHDAY_WINDOW_DAYS};

use crate::error::{AssistantError, AssistantResult};
use crate::models::ContactRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Registry of contacts keyed by name.
///
/// Iteration visits records in name order.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    contacts: BTreeMap<String, ContactRecord>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if a record with the same name is stored; the
    /// stored record is left untouched.
    pub fn add(&mut self, record: ContactRecord) -> AssistantResult<()> {
        let name = record.name().to_string();
        if self.contacts.contains_key(&name) {
            return Err(AssistantError::AlreadyExists(name));
        }

        debug!(name = name.as_str(), "Adding contact");
        self.contacts.insert(name, record);
        Ok(())
    }

    /// Overwrite the stored record with the same name.
    ///
    /// Phones and birthday are replaced wholesale, nothing is merged.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record with that name exists.
    pub fn replace(&mut self, record: ContactRecord) -> AssistantResult<()> {
        match self.contacts.get_mut(record.name().as_str()) {
            Some(existing) => {
                debug!(name = record.name().as_str(), "Replacing contact");
                *existing = record;
                Ok(())
            }
            None => Err(AssistantError::contact_not_found(record.name().as_str())),
        }
    }

    pub fn get(&self, name: &str) -> AssistantResult<&ContactRecord> {
        self.contacts
            .get(name)
            .ok_or_else(|| AssistantError::contact_not_found(name))
    }

    pub fn get_mut(&mut self, name: &str) -> AssistantResult<&mut ContactRecord> {
        self.contacts
            .get_mut(name)
            .ok_or_else(|| AssistantError::contact_not_found(name))
    }

    /// Phone numbers of `name`, joined with `"; "`.
    pub fn phones_of(&self, name: &str) -> AssistantResult<String> {
        self.get(name).map(|record| record.describe(true))
    }

    /// Stored birthday text of `name`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the contact does not exist
    /// - `NoBirthdaySet` if it exists without a birthday
    pub fn birthday_of(&self, name: &str) -> AssistantResult<String> {
        let record = self.get(name)?;
        record
            .birthday()
            .map(|birthday| birthday.as_str().to_string())
            .ok_or_else(|| AssistantError::NoBirthdaySet(name.to_string()))
    }

    /// Iterate over every stored record.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.contacts.values()
    }

    /// Full description line for every stored record.
    pub fn all(&self) -> Vec<String> {
        self.records().map(|record| record.describe(false)).collect()
    }

    /// Birthdays in the week starting at `today`, grouped by reminder weekday.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> UpcomingBirthdays {
        UpcomingBirthdays::compute(self.records(), today)
    }
}
