//! JSON persistence for the directory (`database.json`)
//!
//! The document is an array with one object per contact. Timestamps are
//! ISO-8601 strings; each contact carries its full change history.
//!
//! ```json
//! [
//!   {
//!     "first_name": "Jane",
//!     "last_name": "Doe",
//!     "phone_number": "(123) 456-7890",
//!     "email_address": "",
//!     "address": "",
//!     "create_time": "2024-01-15T09:30:00.000000",
//!     "update_time": "2024-01-15T09:30:00.000000",
//!     "history": [
//!       {
//!         "operation": "Created",
//!         "message": "Jane Doe, (123) 456-7890, , ",
//!         "field": "",
//!         "old_value": "",
//!         "new_value": "",
//!         "change_time": "2024-01-15T09:30:00.000000"
//!       }
//!     ]
//!   }
//! ]
//! ```

use crate::directory::Directory;
use crate::error::{Result, StoreError};
use phonebook_domain::timestamp::{parse_iso, to_iso};
use phonebook_domain::traits::ContactRepository;
use phonebook_domain::{ChangeRecord, Contact, ContactField, Operation};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Persisted form of a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Phone number
    pub phone_number: String,
    /// Email address
    #[serde(default)]
    pub email_address: String,
    /// Postal address
    #[serde(default)]
    pub address: String,
    /// ISO-8601 creation time
    pub create_time: String,
    /// ISO-8601 time of the last accepted edit (defaults to `create_time`)
    #[serde(default)]
    pub update_time: Option<String>,
    /// Change history, oldest first
    #[serde(default)]
    pub history: Vec<ChangeEntry>,
}

/// Persisted form of a change record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// `Created` or `Updated`
    pub operation: String,
    /// Summary text (set for `Created`)
    #[serde(default)]
    pub message: String,
    /// Storage name of the changed field, empty for `Created`
    #[serde(default)]
    pub field: String,
    /// Value before the change
    #[serde(default)]
    pub old_value: String,
    /// Value after the change
    #[serde(default)]
    pub new_value: String,
    /// ISO-8601 time of the change
    pub change_time: String,
}

impl From<&ChangeRecord> for ChangeEntry {
    fn from(record: &ChangeRecord) -> Self {
        Self {
            operation: record.operation().as_str().to_string(),
            message: record.message().to_string(),
            field: record
                .field()
                .map(|f| f.as_str().to_string())
                .unwrap_or_default(),
            old_value: record.old_value().to_string(),
            new_value: record.new_value().to_string(),
            change_time: to_iso(&record.timestamp()),
        }
    }
}

impl TryFrom<ChangeEntry> for ChangeRecord {
    type Error = StoreError;

    fn try_from(entry: ChangeEntry) -> Result<Self> {
        let operation = entry.operation.parse::<Operation>().map_err(StoreError::Format)?;
        let field = if entry.field.is_empty() {
            None
        } else {
            Some(entry.field.parse::<ContactField>().map_err(StoreError::Format)?)
        };
        let timestamp = parse_iso(&entry.change_time).map_err(StoreError::Format)?;

        Ok(ChangeRecord::from_parts(
            operation,
            field,
            entry.old_value,
            entry.new_value,
            entry.message,
            timestamp,
        ))
    }
}

impl From<&Contact> for ContactRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            first_name: contact.first_name().to_string(),
            last_name: contact.last_name().to_string(),
            phone_number: contact.phone_number().to_string(),
            email_address: contact.email_address().to_string(),
            address: contact.address().to_string(),
            create_time: to_iso(&contact.created_at()),
            update_time: Some(to_iso(&contact.updated_at())),
            history: contact.history().iter().map(ChangeEntry::from).collect(),
        }
    }
}

impl TryFrom<ContactRecord> for Contact {
    type Error = StoreError;

    fn try_from(record: ContactRecord) -> Result<Self> {
        let created_at = parse_iso(&record.create_time).map_err(StoreError::Format)?;
        let updated_at = match &record.update_time {
            Some(text) => parse_iso(text).map_err(StoreError::Format)?,
            None => created_at,
        };

        let mut history = record
            .history
            .into_iter()
            .map(ChangeRecord::try_from)
            .collect::<Result<Vec<_>>>()?;

        // Files written before history was tracked have no log at all
        if history.is_empty() {
            let message = format!(
                "{} {}, {}, {}, {}",
                record.first_name,
                record.last_name,
                record.phone_number,
                record.email_address,
                record.address
            );
            history.push(ChangeRecord::created(message, created_at));
        }

        Ok(Contact::restore(
            record.first_name,
            record.last_name,
            record.phone_number,
            record.email_address,
            record.address,
            created_at,
            updated_at,
            history,
        ))
    }
}

/// Serialize contacts to the persisted JSON document
pub fn to_json(contacts: &[Contact]) -> Result<String> {
    let records: Vec<ContactRecord> = contacts.iter().map(ContactRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Parse the persisted JSON document into contacts
///
/// No validation or duplicate check is applied to the loaded contacts.
/// A blank document yields no contacts.
pub fn from_json(json: &str) -> Result<Vec<Contact>> {
    from_slice(json.as_bytes())
}

/// Parse the persisted JSON document from raw file bytes
///
/// Bytes that are not UTF-8 are a [`StoreError::Format`] like any other
/// malformed document.
pub fn from_slice(bytes: &[u8]) -> Result<Vec<Contact>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let records: Vec<ContactRecord> = serde_json::from_slice(bytes)?;
    records.into_iter().map(Contact::try_from).collect()
}

/// Serialize a directory
pub fn serialize(directory: &Directory) -> Result<String> {
    to_json(directory.contacts())
}

/// Rebuild a directory from its serialized form
///
/// # Errors
///
/// [`StoreError::Format`] if the document is not valid JSON or a record
/// has an unparseable timestamp, operation or field name. Nothing is
/// partially loaded.
pub fn deserialize(json: &str) -> Result<Directory> {
    from_json(json).map(Directory::from_contacts)
}

/// Load a directory from a file
///
/// # Errors
///
/// [`StoreError::NotFound`] if the file does not exist,
/// [`StoreError::Format`] if it cannot be parsed.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Directory> {
    JsonFile::new(path.as_ref()).load().map(Directory::from_contacts)
}

/// Write a directory to a file, creating parent directories as needed
pub fn save<P: AsRef<Path>>(directory: &Directory, path: P) -> Result<()> {
    JsonFile::new(path.as_ref()).save(directory.contacts())
}

/// A JSON file holding the persisted contact set
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Use the file at `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Location of the file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactRepository for JsonFile {
    type Error = StoreError;

    fn load(&self) -> Result<Vec<Contact>> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(self.path.display().to_string()),
            _ => StoreError::Io(e),
        })?;
        let contacts = from_slice(&bytes)?;
        tracing::debug!("Loaded {} contact(s) from {}", contacts.len(), self.path.display());
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, to_json(contacts)?)?;
        tracing::debug!("Saved {} contact(s) to {}", contacts.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_roundtrip_preserves_history() {
        let mut contact = Contact::new("Jane", "Doe", "(123) 456-7890", "", "");
        contact.set_email_address("jane@doe.com");
        contact.set_address("1 Main St");

        let record = ContactRecord::from(&contact);
        assert_eq!(record.history.len(), 3);
        assert_eq!(record.history[1].field, "email_address");

        let restored = Contact::try_from(record).unwrap();
        assert_eq!(restored.history(), contact.history());
        assert_eq!(restored.created_at(), contact.created_at());
        assert_eq!(restored.updated_at(), contact.updated_at());
        assert_eq!(restored.summary(), contact.summary());
    }

    #[test]
    fn test_missing_history_is_backfilled() {
        let json = r#"[{
            "first_name": "Jane",
            "last_name": "Doe",
            "phone_number": "(123) 456-7890",
            "create_time": "2024-01-01T10:00:00"
        }]"#;

        let contacts = from_json(json).unwrap();
        let contact = &contacts[0];
        assert_eq!(contact.updated_at(), contact.created_at());
        assert_eq!(contact.history().len(), 1);
        assert_eq!(contact.history()[0].operation(), Operation::Created);
        assert_eq!(contact.history()[0].timestamp(), contact.created_at());
        assert_eq!(contact.email_address(), "");
    }

    #[test]
    fn test_bad_timestamp_is_format_error() {
        let json = r#"[{
            "first_name": "Jane",
            "last_name": "Doe",
            "phone_number": "1",
            "create_time": "last tuesday"
        }]"#;
        assert!(matches!(from_json(json), Err(StoreError::Format(_))));
    }

    #[test]
    fn test_unknown_field_name_is_format_error() {
        let entry = ChangeEntry {
            operation: "Updated".to_string(),
            message: String::new(),
            field: "nickname".to_string(),
            old_value: "a".to_string(),
            new_value: "b".to_string(),
            change_time: "2024-01-01T10:00:00".to_string(),
        };
        assert!(matches!(
            ChangeRecord::try_from(entry),
            Err(StoreError::Format(_))
        ));
    }

    #[test]
    fn test_blank_document_is_empty() {
        assert!(from_json("").unwrap().is_empty());
        assert!(from_json("  \n").unwrap().is_empty());
        assert!(from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_format_error() {
        assert!(matches!(deserialize("{not json"), Err(StoreError::Format(_))));
        assert!(matches!(deserialize("{}"), Err(StoreError::Format(_))));
    }

    #[test]
    fn test_non_utf8_bytes_are_format_error() {
        assert!(matches!(
            from_slice(&[0xff, 0xfe, b'[', b']']),
            Err(StoreError::Format(_))
        ));
        assert!(from_slice(b" \n\t").unwrap().is_empty());
    }
}
