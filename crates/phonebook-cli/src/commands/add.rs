//! Add command implementation.

use crate::cli::AddArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use phonebook_store::ContactDraft;

/// Execute the add command.
pub fn execute_add(args: AddArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let draft = ContactDraft::new(args.first_name, args.last_name, args.phone_number)
        .with_email(args.email)
        .with_address(args.address);

    let contact = session.directory_mut().create_contact(draft)?;
    let summary = contact.summary();
    tracing::info!(contact = %summary, "Contact added");

    session.mark_dirty();
    println!("{}", formatter.success(&format!("Contact added: {}", summary)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use phonebook_store::{StoreError, ValidationError};
    use tempfile::TempDir;

    fn args(first: &str, last: &str, phone: &str, email: &str) -> AddArgs {
        AddArgs {
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone_number: phone.to_string(),
            email: email.to_string(),
            address: String::new(),
        }
    }

    #[test]
    fn test_add_marks_session_dirty() {
        let dir = TempDir::new().unwrap();
        let (mut session, _) = Session::open(dir.path().join("db.json")).unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);

        execute_add(args("Jane", "Doe", "(123) 456-7890", ""), &mut session, &formatter).unwrap();

        assert!(session.is_dirty());
        assert_eq!(session.directory().len(), 1);
    }

    #[test]
    fn test_add_rejects_bad_email() {
        let dir = TempDir::new().unwrap();
        let (mut session, _) = Session::open(dir.path().join("db.json")).unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = execute_add(
            args("Jane", "Doe", "(123) 456-7890", "not-an-email"),
            &mut session,
            &formatter,
        );

        assert!(matches!(
            result,
            Err(CliError::Store(StoreError::Validation(ValidationError::InvalidEmail(_))))
        ));
        assert!(!session.is_dirty());
        assert!(session.directory().is_empty());
    }
}
