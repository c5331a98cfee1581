//! Contact module - one directory entry with its audit history

use crate::change::{ChangeRecord, FieldUpdate};
use crate::field::ContactField;
use crate::timestamp::{self, Timestamp};
use std::fmt;

/// In-memory identity of a contact based on UUIDv7
///
/// Ids are assigned when a contact is constructed or restored and are not
/// persisted; two loads of the same file yield different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(u128);

impl ContactId {
    /// Generate a new UUIDv7-based ContactId
    ///
    /// # Examples
    ///
    /// ```
    /// use phonebook_domain::ContactId;
    ///
    /// assert_ne!(ContactId::new(), ContactId::new());
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Full-name key used for duplicate detection and name search
///
/// Lowercased concatenation of first and last name with all whitespace
/// removed, so `"Jane", "Doe"` and `"jane", " doe"` share a key.
///
/// ```
/// use phonebook_domain::full_name_key;
///
/// assert_eq!(full_name_key("Jane", " Doe"), "janedoe");
/// ```
pub fn full_name_key(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .chain(last_name.chars())
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A contact - five editable fields plus an append-only change history
///
/// Fields are private; every edit goes through a setter so the history
/// and `updated_at` stay consistent with the values.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone_number: String,
    email_address: String,
    address: String,
    created_at: Timestamp,
    updated_at: Timestamp,
    history: Vec<ChangeRecord>,
}

impl Contact {
    /// Create a fresh contact stamped with the current time
    ///
    /// The history starts with a single `Created` record whose message is
    /// `"{first} {last}, {phone}, {email}, {address}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use phonebook_domain::{Contact, Operation};
    ///
    /// let contact = Contact::new("Jane", "Doe", "(123) 456-7890", "", "");
    /// assert_eq!(contact.history().len(), 1);
    /// assert_eq!(contact.history()[0].operation(), Operation::Created);
    /// assert_eq!(contact.created_at(), contact.updated_at());
    /// ```
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        email_address: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        let now = timestamp::now();
        let mut contact = Self {
            id: ContactId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            email_address: email_address.into(),
            address: address.into(),
            created_at: now,
            updated_at: now,
            history: Vec::with_capacity(1),
        };
        let message = contact.summary();
        contact.history.push(ChangeRecord::created(message, now));
        contact
    }

    /// Rebuild a contact from persisted state
    ///
    /// Timestamps and history are taken as given; no `Created` record is
    /// synthesized. This is primarily for storage layer deserialization.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        first_name: String,
        last_name: String,
        phone_number: String,
        email_address: String,
        address: String,
        created_at: Timestamp,
        updated_at: Timestamp,
        history: Vec<ChangeRecord>,
    ) -> Self {
        Self {
            id: ContactId::new(),
            first_name,
            last_name,
            phone_number,
            email_address,
            address,
            created_at,
            updated_at,
            history,
        }
    }

    /// In-memory identity
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// First name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Phone number
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Email address (may be empty)
    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    /// Postal address (may be empty)
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Read any field by name
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::PhoneNumber => &self.phone_number,
            ContactField::EmailAddress => &self.email_address,
            ContactField::Address => &self.address,
        }
    }

    /// When the contact was constructed
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// When the last accepted edit happened (equals `created_at` until then)
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Full change log, oldest first
    pub fn history(&self) -> &[ChangeRecord] {
        &self.history
    }

    /// `"{first} {last}"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// See [`full_name_key`]
    pub fn full_name_key(&self) -> String {
        full_name_key(&self.first_name, &self.last_name)
    }

    /// One-line summary in the form used by the `Created` record
    pub fn summary(&self) -> String {
        format!(
            "{} {}, {}, {}, {}",
            self.first_name, self.last_name, self.phone_number, self.email_address, self.address
        )
    }

    /// Set a field, recording the change if the value differs
    ///
    /// Equal values (exact string comparison) leave the contact untouched and
    /// return [`FieldUpdate::Unchanged`]. No validation happens here.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) -> FieldUpdate {
        let value = value.into();
        if self.get(field) == value {
            return FieldUpdate::Unchanged(field);
        }

        // Clock skew must not move updated_at backwards
        let now = timestamp::now().max(self.updated_at);
        let old_value = std::mem::replace(self.field_mut(field), value.clone());
        let record = ChangeRecord::updated(field, old_value, value, now);
        self.history.push(record.clone());
        self.updated_at = now;

        FieldUpdate::Changed(record)
    }

    /// Set the first name
    pub fn set_first_name(&mut self, value: impl Into<String>) -> FieldUpdate {
        self.set(ContactField::FirstName, value)
    }

    /// Set the last name
    pub fn set_last_name(&mut self, value: impl Into<String>) -> FieldUpdate {
        self.set(ContactField::LastName, value)
    }

    /// Set the phone number
    pub fn set_phone_number(&mut self, value: impl Into<String>) -> FieldUpdate {
        self.set(ContactField::PhoneNumber, value)
    }

    /// Set the email address
    pub fn set_email_address(&mut self, value: impl Into<String>) -> FieldUpdate {
        self.set(ContactField::EmailAddress, value)
    }

    /// Set the postal address
    pub fn set_address(&mut self, value: impl Into<String>) -> FieldUpdate {
        self.set(ContactField::Address, value)
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::PhoneNumber => &mut self.phone_number,
            ContactField::EmailAddress => &mut self.email_address,
            ContactField::Address => &mut self.address,
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
