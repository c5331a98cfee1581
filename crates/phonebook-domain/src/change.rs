//! Change history for contacts
//!
//! Every contact carries an ordered, append-only log of [`ChangeRecord`]s:
//! one `Created` entry from construction and one `Updated` entry for each
//! edit that actually changed a value. Records are immutable once built.

use crate::field::ContactField;
use crate::timestamp::Timestamp;
use std::fmt;

/// Kind of mutation a change record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// The contact was constructed
    Created,

    /// One field was changed to a different value
    Updated,
}

impl Operation {
    /// Get the operation name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Created => "Created",
            Operation::Updated => "Updated",
        }
    }

    /// Parse an operation name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "created" => Some(Operation::Created),
            "updated" => Some(Operation::Updated),
            _ => None,
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid operation: {}", s))
    }
}

/// A single immutable entry in a contact's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    operation: Operation,
    field: Option<ContactField>,
    old_value: String,
    new_value: String,
    message: String,
    timestamp: Timestamp,
}

impl ChangeRecord {
    /// Record the construction of a contact
    pub fn created(message: String, timestamp: Timestamp) -> Self {
        Self {
            operation: Operation::Created,
            field: None,
            old_value: String::new(),
            new_value: String::new(),
            message,
            timestamp,
        }
    }

    /// Record a change of `field` from `old_value` to `new_value`
    pub fn updated(
        field: ContactField,
        old_value: String,
        new_value: String,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            operation: Operation::Updated,
            field: Some(field),
            old_value,
            new_value,
            message: String::new(),
            timestamp,
        }
    }

    /// Rebuild a record from persisted parts
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_parts(
        operation: Operation,
        field: Option<ContactField>,
        old_value: String,
        new_value: String,
        message: String,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            operation,
            field,
            old_value,
            new_value,
            message,
            timestamp,
        }
    }

    /// Kind of mutation
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Changed field, `None` for `Created`
    pub fn field(&self) -> Option<ContactField> {
        self.field
    }

    /// Value before the change (empty for `Created`)
    pub fn old_value(&self) -> &str {
        &self.old_value
    }

    /// Value after the change (empty for `Created`)
    pub fn new_value(&self) -> &str {
        &self.new_value
    }

    /// Free-text summary (set for `Created` only)
    pub fn message(&self) -> &str {
        &self.message
    }

    /// When the mutation happened
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.operation, self.field) {
            (Operation::Updated, Some(field)) => write!(
                f,
                "{} changed from '{}' to '{}'",
                capitalize(field.label()),
                self.old_value,
                self.new_value
            ),
            _ => write!(f, "Contact added: {}", self.message),
        }
    }
}

/// Outcome of a field setter
///
/// Setters never log; they hand this back so the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// The value differed and was replaced; carries the appended record
    Changed(ChangeRecord),

    /// The new value equalled the current one, nothing was recorded
    Unchanged(ContactField),
}

impl FieldUpdate {
    /// Whether the setter changed the contact
    pub fn is_changed(&self) -> bool {
        matches!(self, FieldUpdate::Changed(_))
    }

    /// Field the setter was called for
    pub fn field(&self) -> Option<ContactField> {
        match self {
            FieldUpdate::Changed(record) => record.field(),
            FieldUpdate::Unchanged(field) => Some(*field),
        }
    }
}

impl fmt::Display for FieldUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldUpdate::Changed(record) => fmt::Display::fmt(record, f),
            FieldUpdate::Unchanged(field) => {
                write!(f, "No changes were made to the {}.", field.label())
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
