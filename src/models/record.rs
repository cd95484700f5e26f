//! Record model representing a single contact.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: one validated name plus an ordered list of
/// validated phone numbers.
///
/// The name is the record's identity and does not change for the
/// record's lifetime; no rename operation is exposed. Phone numbers
/// keep insertion order and may contain duplicates.
///
/// # Example
///
/// ```
/// use address_book::Record;
///
/// let mut record = Record::new("John").unwrap();
/// record.add_phone("1234567890").unwrap();
/// assert_eq!(record.find_phone("1234567890").unwrap().as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The contact's name (immutable identity)
    name: ContactName,

    /// Phone numbers in insertion order
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a new record with no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
        })
    }

    /// Get the contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Get the phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// Duplicates are permitted; no uniqueness check is performed.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Validation` if `raw` is not a valid phone number.
    pub fn add_phone(&mut self, raw: impl Into<String>) -> RecordResult<()> {
        let phone = PhoneNumber::new(raw)?;
        tracing::trace!("Adding phone {} to record {}", phone, self.name);
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone entry whose value equals `raw` exactly.
    ///
    /// When duplicates exist only the first match is removed; the
    /// remaining entries keep their order. The removed entry is returned.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no entry matches.
    pub fn remove_phone(&mut self, raw: &str) -> RecordResult<PhoneNumber> {
        let index = self
            .position_of(raw)
            .ok_or(RecordError::PhoneNotFound)?;
        tracing::trace!("Removing phone {} from record {}", raw, self.name);
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone entry equal to `old` with a validated `new` value.
    ///
    /// The replacement happens in place, preserving the entry's position
    /// in the list. If validation of `new` fails the edit does not occur
    /// and the old entry remains untouched.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::EditTargetNotFound` if no entry equals `old`,
    /// or `RecordError::Validation` if `new` is not a valid phone number.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> RecordResult<()> {
        let index = self
            .position_of(old)
            .ok_or(RecordError::EditTargetNotFound)?;
        self.phones[index].set(new)?;
        tracing::trace!(
            "Edited phone {} -> {} on record {}",
            old,
            self.phones[index],
            self.name
        );
        Ok(())
    }

    /// Find the first phone entry whose value equals `raw` exactly.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == raw)
    }
}

// Display support - "Contact name: John, phones: 1112223333; 5555555555"
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
