//! Input validation for contact fields
//!
//! The directory runs these checks before constructing or editing a
//! contact; the contact entity itself accepts any string.

use crate::error::ValidationError;
use phonebook_domain::ContactField;
use regex::Regex;
use std::sync::LazyLock;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{3}\) [0-9]{3}-[0-9]{4}$").expect("phone pattern compiles")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+(?:[._-][A-Za-z0-9]+)*@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Check a phone number against `(DDD) DDD-DDDD`
///
/// The whole string must match; an empty string is invalid.
///
/// ```
/// use phonebook_store::validate_phone;
///
/// assert!(validate_phone("(123) 456-7890"));
/// assert!(!validate_phone("123-456-7890"));
/// ```
pub fn validate_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

/// Check an email address against `local@domain.tld`
///
/// An empty string is valid and means "no email provided".
///
/// ```
/// use phonebook_store::validate_email;
///
/// assert!(validate_email(""));
/// assert!(validate_email("a.b@c.org"));
/// assert!(!validate_email("a@b"));
/// ```
pub fn validate_email(s: &str) -> bool {
    s.is_empty() || EMAIL_RE.is_match(s)
}

/// Validate a single field value as the directory would accept it
pub fn validate_field(field: ContactField, value: &str) -> Result<(), ValidationError> {
    if field.is_mandatory() && value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    match field {
        ContactField::PhoneNumber if !validate_phone(value) => {
            Err(ValidationError::InvalidPhone(value.to_string()))
        }
        ContactField::EmailAddress if !validate_email(value) => {
            Err(ValidationError::InvalidEmail(value.to_string()))
        }
        _ => Ok(()),
    }
}

/// Input values for a new contact, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    /// First name (mandatory)
    pub first_name: String,
    /// Last name (mandatory)
    pub last_name: String,
    /// Phone number (mandatory, `(DDD) DDD-DDDD`)
    pub phone_number: String,
    /// Email address (optional)
    pub email_address: String,
    /// Postal address (optional)
    pub address: String,
}

impl ContactDraft {
    /// Create a draft with the three mandatory fields
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            ..Default::default()
        }
    }

    /// Set the email address
    pub fn with_email(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = email_address.into();
        self
    }

    /// Set the postal address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Value of a field
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::PhoneNumber => &self.phone_number,
            ContactField::EmailAddress => &self.email_address,
            ContactField::Address => &self.address,
        }
    }

    /// Check every field, reporting the first failure in field order
    pub fn validate(&self) -> Result<(), ValidationError> {
        ContactField::ALL
            .into_iter()
            .try_for_each(|field| validate_field(field, self.get(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("(123) 456-7890"));
        assert!(!validate_phone("123-456-7890"));
        assert!(!validate_phone("(123)456-7890"));
        assert!(!validate_phone(""));
        assert!(!validate_phone(" (123) 456-7890"));
        assert!(!validate_phone("(123) 456-78901"));
        assert!(!validate_phone("(abc) 456-7890"));
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email(""));
        assert!(validate_email("a@b.com"));
        assert!(validate_email("a.b@c.org"));
        assert!(validate_email("first_last-1@my-host.io"));
        assert!(validate_email("x@mail.example.co"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a@b.c"));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email("a..b@c.org"));
        assert!(!validate_email("a@b.com "));
        assert!(!validate_email("a@b.c0m"));
    }

    #[test]
    fn test_validate_field_mandatory() {
        assert_eq!(
            validate_field(ContactField::FirstName, "  "),
            Err(ValidationError::MissingField(ContactField::FirstName))
        );
        assert_eq!(validate_field(ContactField::Address, ""), Ok(()));
        assert_eq!(
            validate_field(ContactField::PhoneNumber, ""),
            Err(ValidationError::MissingField(ContactField::PhoneNumber))
        );
    }

    #[test]
    fn test_draft_validation_reports_first_failure() {
        let draft = ContactDraft::new("Jane", "Doe", "555-1234").with_email("bad");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidPhone("555-1234".to_string()))
        );

        let draft = ContactDraft::new("Jane", "Doe", "(555) 123-4567").with_email("bad");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidEmail("bad".to_string()))
        );

        let draft = ContactDraft::new("Jane", "Doe", "(555) 123-4567")
            .with_email("jane@doe.com")
            .with_address("1 Main St");
        assert_eq!(draft.validate(), Ok(()));
    }
}
