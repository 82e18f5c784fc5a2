//! Contact record: one person's name, phone numbers and optional birthday.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber};
use crate::error::{AssistantError, AssistantResult};
use std::fmt;

/// Separator used when rendering the phone list.
pub const PHONE_SEPARATOR: &str = "; ";

/// A single contact stored in the directory.
///
/// The name is the record's identity. Phones keep insertion order and may
/// contain duplicates. A birthday can be set once and is never replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create a record, validating every supplied field before building it.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::InvalidFormat` if the name is empty or the
    /// phone or birthday text is malformed.
    pub fn new(name: &str, phone: Option<&str>, birthday: Option<&str>) -> AssistantResult<Self> {
        let name = ContactName::new(name)?;
        let phones = phone
            .map(PhoneNumber::new)
            .transpose()?
            .into_iter()
            .collect();
        let birthday = birthday.map(BirthdayDate::new).transpose()?;

        Ok(Self {
            name,
            phones,
            birthday,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> AssistantResult<()> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first stored phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if `phone` is not a valid phone number
    /// - `NotFound` if no stored phone matches
    pub fn remove_phone(&mut self, phone: &str) -> AssistantResult<PhoneNumber> {
        let phone = PhoneNumber::new(phone)?;
        let position = self
            .phones
            .iter()
            .position(|stored| *stored == phone)
            .ok_or_else(|| AssistantError::phone_not_found(self.name.as_str(), phone.as_str()))?;

        Ok(self.phones.remove(position))
    }

    /// Set the birthday if none is present yet.
    ///
    /// An existing birthday is reported before the new text is validated.
    pub fn add_birthday(&mut self, birthday: &str) -> AssistantResult<()> {
        if self.birthday.is_some() {
            return Err(AssistantError::BirthdayAlreadySet(self.name.to_string()));
        }

        self.birthday = Some(BirthdayDate::new(birthday)?);
        Ok(())
    }

    /// Phone numbers joined with `"; "`.
    pub fn phones_line(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(PHONE_SEPARATOR)
    }

    /// Render either just the phone list or the full contact line.
    pub fn describe(&self, phones_only: bool) -> String {
        if phones_only {
            return self.phones_line();
        }

        match &self.birthday {
            Some(birthday) => format!(
                "Contact name: {}, phones: {}, birthday: {}",
                self.name,
                self.phones_line(),
                birthday
            ),
            None => format!(
                "Contact name: {}, phones: {}",
                self.name,
                self.phones_line()
            ),
        }
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(false))
    }
}
