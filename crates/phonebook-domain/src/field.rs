//! Editable contact fields

use std::fmt;

/// One of the five editable fields of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    /// Given name (mandatory at the directory level)
    FirstName,

    /// Family name (mandatory at the directory level)
    LastName,

    /// Phone number in `(DDD) DDD-DDDD` form (mandatory at the directory level)
    PhoneNumber,

    /// Email address, may be empty
    EmailAddress,

    /// Postal address, free text, may be empty
    Address,
}

impl ContactField {
    /// All fields in display order
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::PhoneNumber,
        ContactField::EmailAddress,
        ContactField::Address,
    ];

    /// Storage name of the field, as written in change records
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::PhoneNumber => "phone_number",
            ContactField::EmailAddress => "email_address",
            ContactField::Address => "address",
        }
    }

    /// Human-readable lowercase label ("first name")
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::FirstName => "first name",
            ContactField::LastName => "last name",
            ContactField::PhoneNumber => "phone number",
            ContactField::EmailAddress => "email address",
            ContactField::Address => "address",
        }
    }

    /// Whether the directory requires a non-empty value
    pub fn is_mandatory(&self) -> bool {
        matches!(
            self,
            ContactField::FirstName | ContactField::LastName | ContactField::PhoneNumber
        )
    }

    /// Whether a change to this field changes the full-name key
    pub fn is_name(&self) -> bool {
        matches!(self, ContactField::FirstName | ContactField::LastName)
    }

    /// Parse a field from its storage name or a common shorthand
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "first_name" | "first" | "firstname" => Some(ContactField::FirstName),
            "last_name" | "last" | "lastname" => Some(ContactField::LastName),
            "phone_number" | "phone" => Some(ContactField::PhoneNumber),
            "email_address" | "email" => Some(ContactField::EmailAddress),
            "address" => Some(ContactField::Address),
            _ => None,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid field: {}", s))
    }
}
