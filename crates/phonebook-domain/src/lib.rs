//! Phonebook Domain Layer
//!
//! This crate contains the core model of the phonebook: the contact record,
//! its append-only change history, and the small value types the directory
//! and shell layers share. It keeps its dependencies to two primitives
//! (`uuid` for identity, `chrono` for wall-clock time) and performs no I/O.
//!
//! ## Key Concepts
//!
//! - **Contact**: five editable string fields plus creation/update timestamps
//! - **Change Record**: one immutable audit entry per creation or accepted edit
//! - **Field Update**: the value a setter returns so callers can report or log it
//! - **Sort Key**: the orderings a directory can be re-sorted by
//!
//! ## Architecture
//!
//! - No logging and no file access here
//! - Validation and duplicate-name policy live in the directory (phonebook-store)
//! - Persistence crosses the [`traits::ContactRepository`] boundary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod change;
pub mod contact;
pub mod field;
pub mod sort;
pub mod timestamp;
pub mod traits;

// Re-exports for convenience
pub use change::{ChangeRecord, FieldUpdate, Operation};
pub use contact::{full_name_key, Contact, ContactId};
pub use field::ContactField;
pub use sort::SortKey;
pub use timestamp::Timestamp;
