//! Update command implementation.

use crate::cli::UpdateArgs;
use crate::commands::select_contact;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use phonebook_domain::{ContactField, FieldUpdate};

/// Execute the update command.
pub fn execute_update(args: UpdateArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let id = select_contact(session.directory(), &args.name, args.pick)?;
    let field: ContactField = args.field.into();

    let update = session.directory_mut().update_field(id, field, args.value)?;
    match &update {
        FieldUpdate::Changed(record) => {
            tracing::info!(
                field = field.as_str(),
                old = record.old_value(),
                new = record.new_value(),
                "Contact updated"
            );
            session.mark_dirty();
            println!("{}", formatter.success(&update.to_string()));
        }
        FieldUpdate::Unchanged(_) => {
            tracing::info!(field = field.as_str(), "Update left contact unchanged");
            println!("{}", formatter.info(&update.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FieldArg;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use phonebook_store::{ContactDraft, StoreError};
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> Session {
        let (mut session, _) = Session::open(dir.path().join("db.json")).unwrap();
        for (first, last) in [("Jane", "Doe"), ("John", "Roe")] {
            session
                .directory_mut()
                .create_contact(ContactDraft::new(first, last, "(123) 456-7890"))
                .unwrap();
        }
        session
    }

    fn args(name: &str, field: FieldArg, value: &str) -> UpdateArgs {
        UpdateArgs {
            name: name.to_string(),
            field,
            value: value.to_string(),
            pick: None,
        }
    }

    #[test]
    fn test_update_changes_field() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        execute_update(args("jane", FieldArg::Phone, "(999) 888-7777"), &mut session, &formatter)
            .unwrap();

        let jane = &session.directory().contacts()[0];
        assert_eq!(jane.phone_number(), "(999) 888-7777");
        assert_eq!(jane.history().len(), 2);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_same_value_is_not_dirty() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        execute_update(args("jane", FieldArg::Phone, "(123) 456-7890"), &mut session, &formatter)
            .unwrap();

        assert!(!session.is_dirty());
        assert_eq!(session.directory().contacts()[0].history().len(), 1);
    }

    #[test]
    fn test_rename_onto_existing_name() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = execute_update(args("roe", FieldArg::First, "Jane"), &mut session, &formatter);
        assert!(result.is_ok());

        let result = execute_update(args("jane roe", FieldArg::Last, "Doe"), &mut session, &formatter);
        assert!(matches!(result, Err(CliError::Store(StoreError::Duplicate(_)))));
    }
}
