//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use phonebook_domain::timestamp::to_iso;
use phonebook_domain::Contact;
use phonebook_store::{ContactRecord, ImportReport};
use std::collections::BTreeMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const HEADERS: [&str; 5] = [
    "First Name",
    "Last Name",
    "Phone Number",
    "Email Address",
    "Address",
];

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of contacts.
    pub fn format_contacts<'a, I>(&self, contacts: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a Contact>,
    {
        let contacts: Vec<&Contact> = contacts.into_iter().collect();
        match self.format {
            OutputFormat::Json => self.format_contacts_json(&contacts),
            OutputFormat::Table => Ok(self.format_contacts_table(&contacts)),
        }
    }

    fn format_contacts_json(&self, contacts: &[&Contact]) -> Result<String> {
        let records: Vec<ContactRecord> = contacts.iter().map(|c| ContactRecord::from(*c)).collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }

    fn format_contacts_table(&self, contacts: &[&Contact]) -> String {
        if contacts.is_empty() {
            return self.colorize("No contacts available.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(HEADERS);

        for contact in contacts {
            builder.push_record([
                contact.first_name(),
                contact.last_name(),
                contact.phone_number(),
                contact.email_address(),
                contact.address(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the change history of one contact, oldest entry first.
    pub fn format_history(&self, contact: &Contact) -> Result<String> {
        if self.format == OutputFormat::Json {
            let record = ContactRecord::from(contact);
            return Ok(serde_json::to_string_pretty(&record.history)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Time", "Operation", "Change"]);
        for change in contact.history() {
            builder.push_record([
                to_iso(&change.timestamp()),
                change.operation().as_str().to_string(),
                change.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());

        let title = self.colorize(&format!("History of {}", contact.full_name()), "cyan");
        Ok(format!("{}\n{}", title, table))
    }

    /// Format contacts grouped by last-name initial.
    pub fn format_groups(&self, groups: &BTreeMap<char, Vec<&Contact>>) -> Result<String> {
        if self.format == OutputFormat::Json {
            let json: BTreeMap<String, Vec<ContactRecord>> = groups
                .iter()
                .map(|(initial, contacts)| {
                    let records = contacts.iter().map(|c| ContactRecord::from(*c)).collect();
                    (initial.to_string(), records)
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&json)?);
        }

        if groups.is_empty() {
            return Ok(self.colorize("No contacts available.", "yellow"));
        }

        let sections: Vec<String> = groups
            .iter()
            .map(|(initial, contacts)| {
                let heading = self.colorize(&format!("Group {}", initial), "magenta");
                format!("{}\n{}", heading, self.format_contacts_table(contacts))
            })
            .collect();
        Ok(sections.join("\n\n"))
    }

    /// Format the outcome of a CSV import.
    pub fn import_report(&self, report: &ImportReport) -> String {
        let mut lines = Vec::with_capacity(report.rejected.len() + 1);
        if report.rejected.is_empty() {
            lines.push(self.success(&report.summary()));
        } else {
            lines.push(self.warning(&report.summary()));
        }
        for rejection in &report.rejected {
            lines.push(format!("  line {}: {}", rejection.line, rejection.reason));
        }
        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook_domain::ContactField;
    use phonebook_store::{import_csv, Directory};

    fn create_test_contact() -> Contact {
        Contact::new("Jane", "Doe", "(123) 456-7890", "jane@doe.com", "1 Main St")
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let contact = create_test_contact();
        let output = formatter.format_contacts([&contact]).unwrap();
        assert!(output.contains("First Name"));
        assert!(output.contains("Email Address"));
        assert!(output.contains("jane@doe.com"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let contact = create_test_contact();
        let output = formatter.format_contacts([&contact]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["first_name"], "Jane");
        assert_eq!(value[0]["history"][0]["operation"], "Created");
    }

    #[test]
    fn test_empty_contacts() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_contacts(Directory::new().iter()).unwrap();
        assert!(output.contains("No contacts available"));
    }

    #[test]
    fn test_history_lists_every_change() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut contact = create_test_contact();
        contact.set(ContactField::Address, "2 Side St");

        let output = formatter.format_history(&contact).unwrap();
        assert!(output.contains("History of Jane Doe"));
        assert!(output.contains("Contact added: Jane Doe"));
        assert!(output.contains("Address changed from '1 Main St' to '2 Side St'"));
    }

    #[test]
    fn test_groups_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut directory = Directory::new();
        import_csv(
            &mut directory,
            "Amy,Adams,(555) 000-0001\nBo,Baker,(555) 000-0002\n".as_bytes(),
        )
        .unwrap();

        let output = formatter
            .format_groups(&directory.group_by_last_initial())
            .unwrap();
        assert!(output.contains("Group A"));
        assert!(output.contains("Group B"));
    }

    #[test]
    fn test_import_report_lists_rejections() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut directory = Directory::new();
        let report = import_csv(&mut directory, "Amy,Adams,bad phone\n".as_bytes()).unwrap();

        let output = formatter.import_report(&report);
        assert!(output.starts_with("⚠ 0 contact(s) imported, 1 row(s) rejected"));
        assert!(output.contains("line 1:"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
