//! Phonebook Storage Layer
//!
//! Holds the in-memory contact directory and everything that moves contacts
//! in and out of it.
//!
//! # Architecture
//!
//! - [`Directory`]: insertion-ordered collection with the duplicate-name gate,
//!   search, sort and grouping
//! - [`validation`]: phone/email formats and mandatory fields
//! - [`codec`]: `database.json` persistence via [`JsonFile`]
//! - [`import`]: CSV batch import with per-row results
//!
//! # Examples
//!
//! ```no_run
//! use phonebook_store::{codec, ContactDraft, Directory, StoreError};
//!
//! let mut directory = match codec::load("database.json") {
//!     Ok(directory) => directory,
//!     Err(StoreError::NotFound(_)) => Directory::new(),
//!     Err(e) => panic!("{}", e),
//! };
//! directory
//!     .create_contact(ContactDraft::new("Jane", "Doe", "(123) 456-7890"))
//!     .unwrap();
//! codec::save(&directory, "database.json").unwrap();
//! ```

#![warn(missing_docs)]

pub mod codec;
pub mod directory;
pub mod error;
pub mod import;
pub mod validation;

pub use codec::{ChangeEntry, ContactRecord, JsonFile};
pub use directory::{Directory, UNNAMED_GROUP};
pub use error::{Result, StoreError, ValidationError};
pub use import::{import_csv, import_csv_file, ImportReport, RowRejection};
pub use validation::{validate_email, validate_field, validate_phone, ContactDraft};
