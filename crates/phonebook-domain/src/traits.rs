//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the domain and infrastructure.
//! Implementations live in other crates.

use crate::Contact;

/// Trait for loading and saving the full contact set
///
/// Implemented by the infrastructure layer (phonebook-store)
pub trait ContactRepository {
    /// Error type for repository operations
    type Error;

    /// Load every persisted contact, in stored order
    fn load(&self) -> Result<Vec<Contact>, Self::Error>;

    /// Replace the persisted contact set with `contacts`
    fn save(&self, contacts: &[Contact]) -> Result<(), Self::Error>;
}
