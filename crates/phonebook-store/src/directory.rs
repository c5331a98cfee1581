//! The contact directory: an insertion-ordered, in-memory collection
//!
//! Uniqueness of names is a gate at the add/rename operations, not a
//! property of the storage. Contacts restored from disk are taken as they
//! are, duplicates included.

use crate::error::{Result, StoreError};
use crate::validation::{validate_field, ContactDraft};
use chrono::NaiveDate;
use phonebook_domain::{full_name_key, Contact, ContactField, ContactId, FieldUpdate, SortKey};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Group key for contacts whose last name is empty
pub const UNNAMED_GROUP: char = '#';

/// Owning collection of contacts
#[derive(Debug, Clone, Default)]
pub struct Directory {
    contacts: Vec<Contact>,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-built contacts without any policy checks
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Take the contacts out of the directory
    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }

    /// All contacts in their current order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Iterate contacts in their current order
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory holds no contacts
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact by id
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    fn position(&self, id: ContactId) -> Result<usize> {
        self.contacts
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| StoreError::NotFound(format!("contact {}", id)))
    }

    /// Whether a contact with this full name exists (case and whitespace insensitive)
    pub fn contact_exists(&self, first_name: &str, last_name: &str) -> bool {
        let key = full_name_key(first_name, last_name);
        self.contacts.iter().any(|c| c.full_name_key() == key)
    }

    /// Add a contact after the duplicate-name gate
    ///
    /// Field formats are not checked here; see [`Directory::create_contact`].
    ///
    /// # Errors
    ///
    /// [`StoreError::Duplicate`] if the full name is taken. The directory is
    /// left unchanged.
    pub fn add_contact(&mut self, draft: ContactDraft) -> Result<&Contact> {
        if self.contact_exists(&draft.first_name, &draft.last_name) {
            return Err(StoreError::Duplicate(format!(
                "{} {}",
                draft.first_name, draft.last_name
            )));
        }

        let contact = Contact::new(
            draft.first_name,
            draft.last_name,
            draft.phone_number,
            draft.email_address,
            draft.address,
        );
        let index = self.contacts.len();
        self.contacts.push(contact);
        Ok(&self.contacts[index])
    }

    /// Validate a draft, then add it
    ///
    /// This is the path both interactive entry and batch import take, so
    /// they apply the same rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use phonebook_store::{ContactDraft, Directory, StoreError};
    ///
    /// let mut directory = Directory::new();
    /// directory.create_contact(ContactDraft::new("Jane", "Doe", "(123) 456-7890")).unwrap();
    ///
    /// let again = directory.create_contact(ContactDraft::new("jane", " doe", "(123) 456-7890"));
    /// assert!(matches!(again, Err(StoreError::Duplicate(_))));
    /// assert_eq!(directory.len(), 1);
    /// ```
    pub fn create_contact(&mut self, draft: ContactDraft) -> Result<&Contact> {
        draft.validate()?;
        self.add_contact(draft)
    }

    /// Validate and apply a single field edit
    ///
    /// Renames go through the same duplicate gate as additions, ignoring the
    /// contact being renamed.
    pub fn update_field(
        &mut self,
        id: ContactId,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<FieldUpdate> {
        let value = value.into();
        let index = self.position(id)?;
        validate_field(field, &value)?;

        if field.is_name() {
            let contact = &self.contacts[index];
            let (first, last) = match field {
                ContactField::FirstName => (value.as_str(), contact.last_name()),
                _ => (contact.first_name(), value.as_str()),
            };
            let key = full_name_key(first, last);
            if self
                .contacts
                .iter()
                .any(|c| c.id() != id && c.full_name_key() == key)
            {
                return Err(StoreError::Duplicate(format!("{} {}", first, last)));
            }
        }

        Ok(self.contacts[index].set(field, value))
    }

    /// Remove a contact by id
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no contact has this id.
    pub fn remove_contact(&mut self, id: ContactId) -> Result<Contact> {
        let index = self.position(id)?;
        Ok(self.contacts.remove(index))
    }

    /// Remove every contact, returning how many were removed
    pub fn remove_all(&mut self) -> usize {
        let count = self.contacts.len();
        self.contacts.clear();
        count
    }

    /// Contacts whose full-name key contains the query's key
    ///
    /// An empty (or whitespace-only) query matches nothing.
    pub fn find_by_name(&self, query: &str) -> Vec<&Contact> {
        let needle = full_name_key(query, "");
        if needle.is_empty() {
            return Vec::new();
        }
        self.contacts
            .iter()
            .filter(|c| c.full_name_key().contains(&needle))
            .collect()
    }

    /// Contacts whose phone digits contain the query's digits
    ///
    /// Formatting is ignored on both sides: `"456-78"` finds `"(123) 456-7890"`.
    /// A query without digits matches nothing.
    pub fn find_by_phone(&self, query: &str) -> Vec<&Contact> {
        let needle = digits(query);
        if needle.is_empty() {
            return Vec::new();
        }
        self.contacts
            .iter()
            .filter(|c| digits(c.phone_number()).contains(&needle))
            .collect()
    }

    /// Contacts created on a date within `start..=end`
    ///
    /// Only the date part of `created_at` is compared. A reversed range
    /// matches nothing.
    pub fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| {
                let created = c.created_at().date();
                start <= created && created <= end
            })
            .collect()
    }

    /// Re-order the whole directory in place
    ///
    /// The sort is stable in both directions: contacts with equal keys keep
    /// their relative order.
    pub fn sort(&mut self, key: SortKey, descending: bool) {
        self.contacts.sort_by(|a, b| {
            let ordering = compare(a, b, key);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    /// Group contacts by the uppercased first letter of their last name
    ///
    /// Groups are ordered by key; within a group the directory's order is
    /// kept. Contacts with an empty last name go under [`UNNAMED_GROUP`].
    pub fn group_by_last_initial(&self) -> BTreeMap<char, Vec<&Contact>> {
        let mut groups: BTreeMap<char, Vec<&Contact>> = BTreeMap::new();
        for contact in &self.contacts {
            groups.entry(last_initial(contact)).or_default().push(contact);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

fn last_initial(contact: &Contact) -> char {
    contact
        .last_name()
        .trim_start()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or(UNNAMED_GROUP)
}

fn digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Compare digit strings by numeric value without parsing (any length)
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare(a: &Contact, b: &Contact, key: SortKey) -> Ordering {
    match key {
        SortKey::FirstName => a
            .first_name()
            .to_lowercase()
            .cmp(&b.first_name().to_lowercase()),
        SortKey::LastName => a
            .last_name()
            .to_lowercase()
            .cmp(&b.last_name().to_lowercase()),
        SortKey::PhoneNumber => {
            compare_numeric(&digits(a.phone_number()), &digits(b.phone_number()))
        }
        SortKey::CreatedAt => a.created_at().cmp(&b.created_at()),
        SortKey::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(first: &str, last: &str, phone: &str) -> ContactDraft {
        ContactDraft::new(first, last, phone)
    }

    fn names(contacts: &[&Contact]) -> Vec<String> {
        contacts.iter().map(|c| c.full_name()).collect()
    }

    #[test]
    fn test_compare_numeric() {
        assert_eq!(compare_numeric("10", "9"), Ordering::Greater);
        assert_eq!(compare_numeric("0009", "10"), Ordering::Less);
        assert_eq!(compare_numeric("007", "7"), Ordering::Equal);
        assert_eq!(compare_numeric("", "0"), Ordering::Equal);
        assert_eq!(
            compare_numeric("123456789012345678901234567890", "99"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits("(555) 000-0010"), "5550000010");
        assert_eq!(digits("no digits"), "");
    }

    #[test]
    fn test_add_rejects_duplicate_name() {
        let mut directory = Directory::new();
        directory
            .add_contact(draft("Jane", "Doe", "(123) 456-7890"))
            .unwrap();

        let result = directory.add_contact(draft("jane", " doe", "(999) 999-9999"));
        assert!(matches!(result, Err(StoreError::Duplicate(_))));
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.contacts()[0].phone_number(), "(123) 456-7890");
    }

    #[test]
    fn test_create_contact_validates_before_adding() {
        let mut directory = Directory::new();
        let result = directory.create_contact(draft("Jane", "Doe", "123-456-7890"));
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_find_by_name_substring() {
        let mut directory = Directory::new();
        directory.add_contact(draft("Jane", "Doe", "1")).unwrap();
        directory.add_contact(draft("John", "Doe", "2")).unwrap();
        directory.add_contact(draft("Ann", "Smith", "3")).unwrap();

        assert_eq!(
            names(&directory.find_by_name("DOE")),
            vec!["Jane Doe", "John Doe"]
        );
        assert_eq!(names(&directory.find_by_name("jane d")), vec!["Jane Doe"]);
        assert_eq!(names(&directory.find_by_name("nsmi")), vec!["Ann Smith"]);
        assert!(directory.find_by_name("").is_empty());
        assert!(directory.find_by_name("   ").is_empty());
        assert!(directory.find_by_name("zed").is_empty());
    }

    #[test]
    fn test_find_by_phone_ignores_formatting() {
        let mut directory = Directory::new();
        directory
            .add_contact(draft("Jane", "Doe", "(123) 456-7890"))
            .unwrap();
        directory
            .add_contact(draft("John", "Doe", "(555) 000-0001"))
            .unwrap();

        assert_eq!(names(&directory.find_by_phone("456-78")), vec!["Jane Doe"]);
        assert_eq!(names(&directory.find_by_phone("(555)")), vec!["John Doe"]);
        assert!(directory.find_by_phone("abc").is_empty());
        assert!(directory.find_by_phone("").is_empty());
    }

    #[test]
    fn test_update_field_rename_gate() {
        let mut directory = Directory::new();
        let jane = directory
            .add_contact(draft("Jane", "Doe", "(123) 456-7890"))
            .unwrap()
            .id();
        let john = directory
            .add_contact(draft("John", "Doe", "(123) 456-7891"))
            .unwrap()
            .id();

        let result = directory.update_field(john, ContactField::FirstName, "JANE");
        assert!(matches!(result, Err(StoreError::Duplicate(_))));
        assert_eq!(directory.get(john).unwrap().history().len(), 1);

        // Renaming to a different case of its own name is allowed
        let update = directory
            .update_field(jane, ContactField::FirstName, "JANE")
            .unwrap();
        assert!(update.is_changed());
    }

    #[test]
    fn test_update_field_validates() {
        let mut directory = Directory::new();
        let id = directory
            .add_contact(draft("Jane", "Doe", "(123) 456-7890"))
            .unwrap()
            .id();

        assert!(matches!(
            directory.update_field(id, ContactField::EmailAddress, "nope"),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            directory.update_field(id, ContactField::LastName, ""),
            Err(StoreError::Validation(_))
        ));

        let update = directory
            .update_field(id, ContactField::EmailAddress, "jane@doe.com")
            .unwrap();
        assert!(update.is_changed());

        let update = directory
            .update_field(id, ContactField::EmailAddress, "jane@doe.com")
            .unwrap();
        assert!(!update.is_changed());
        assert_eq!(directory.get(id).unwrap().history().len(), 2);
    }

    #[test]
    fn test_update_unknown_contact() {
        let mut directory = Directory::new();
        let result = directory.update_field(ContactId::new(), ContactField::Address, "x");
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_remove_contact() {
        let mut directory = Directory::new();
        let id = directory.add_contact(draft("Jane", "Doe", "1")).unwrap().id();
        directory.add_contact(draft("John", "Doe", "2")).unwrap();

        let removed = directory.remove_contact(id).unwrap();
        assert_eq!(removed.first_name(), "Jane");
        assert_eq!(directory.len(), 1);

        assert!(matches!(
            directory.remove_contact(id),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_remove_all() {
        let mut directory = Directory::new();
        directory.add_contact(draft("Jane", "Doe", "1")).unwrap();
        directory.add_contact(draft("John", "Doe", "2")).unwrap();

        assert_eq!(directory.remove_all(), 2);
        assert!(directory.is_empty());
        assert_eq!(directory.remove_all(), 0);
    }

    #[test]
    fn test_sort_by_phone_is_numeric() {
        let mut directory = Directory::new();
        directory.add_contact(draft("A", "One", "(555) 000-0001")).unwrap();
        directory.add_contact(draft("B", "Ten", "(555) 000-0010")).unwrap();
        directory.add_contact(draft("C", "Five", "(555) 000-0005")).unwrap();

        directory.sort(SortKey::PhoneNumber, true);
        let phones: Vec<_> = directory.iter().map(|c| c.phone_number()).collect();
        assert_eq!(
            phones,
            vec!["(555) 000-0010", "(555) 000-0005", "(555) 000-0001"]
        );
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive_and_stable() {
        let mut directory = Directory::new();
        directory.add_contact(draft("bob", "Zed", "1")).unwrap();
        directory.add_contact(draft("Alice", "Young", "2")).unwrap();
        directory.add_contact(draft("Bob", "Xavier", "3")).unwrap();

        directory.sort(SortKey::FirstName, false);
        let order: Vec<_> = directory.iter().map(|c| c.full_name()).collect();
        assert_eq!(order, vec!["Alice Young", "bob Zed", "Bob Xavier"]);

        directory.sort(SortKey::FirstName, true);
        let order: Vec<_> = directory.iter().map(|c| c.full_name()).collect();
        assert_eq!(order, vec!["bob Zed", "Bob Xavier", "Alice Young"]);

        directory.sort(SortKey::LastName, false);
        let order: Vec<_> = directory.iter().map(|c| c.last_name()).collect();
        assert_eq!(order, vec!["Xavier", "Young", "Zed"]);
    }

    #[test]
    fn test_group_by_last_initial() {
        let mut directory = Directory::new();
        directory.add_contact(draft("Amy", "Adams", "1")).unwrap();
        directory.add_contact(draft("Bo", "baker", "2")).unwrap();
        directory.add_contact(draft("Al", "Ackley", "3")).unwrap();

        let groups = directory.group_by_last_initial();
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!['A', 'B']);
        assert_eq!(names(&groups[&'A']), vec!["Amy Adams", "Al Ackley"]);
        assert_eq!(names(&groups[&'B']), vec!["Bo baker"]);
    }

    #[test]
    fn test_group_empty_last_name_uses_sentinel() {
        let directory = Directory::from_contacts(vec![
            Contact::new("Cher", "", "1", "", ""),
            Contact::new("Amy", "Adams", "2", "", ""),
        ]);

        let groups = directory.group_by_last_initial();
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec![UNNAMED_GROUP, 'A']);
        assert_eq!(groups[&UNNAMED_GROUP][0].first_name(), "Cher");
    }

    #[test]
    fn test_from_contacts_keeps_duplicates() {
        let directory = Directory::from_contacts(vec![
            Contact::new("Jane", "Doe", "1", "", ""),
            Contact::new("jane", "doe", "2", "", ""),
        ]);
        assert_eq!(directory.len(), 2);
        assert!(directory.contact_exists("JANE", "DOE"));
    }
}
