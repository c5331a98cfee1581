//! Delete command implementations.

use crate::cli::{DeleteAllArgs, DeleteArgs};
use crate::commands::{confirm, select_contact};
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the delete command.
pub fn execute_delete(args: DeleteArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let id = select_contact(session.directory(), &args.name, args.pick)?;

    if !args.yes {
        let summary = session
            .directory()
            .get(id)
            .map(|c| c.summary())
            .unwrap_or_default();
        println!("About to delete: {}", summary);
        if !confirm("Continue?")? {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    let removed = session.directory_mut().remove_contact(id)?;
    tracing::info!(contact = %removed.summary(), "Contact removed");

    session.mark_dirty();
    println!(
        "{}",
        formatter.success(&format!("Contact deleted: {}", removed.full_name()))
    );
    Ok(())
}

/// Execute the delete-all command.
pub fn execute_delete_all(
    args: DeleteAllArgs,
    session: &mut Session,
    formatter: &Formatter,
) -> Result<()> {
    if session.directory().is_empty() {
        println!("{}", formatter.info("No contacts to delete"));
        return Ok(());
    }

    if !args.yes {
        let prompt = format!("Delete all {} contact(s)?", session.directory().len());
        if !confirm(&prompt)? {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    let count = session.directory_mut().remove_all();
    tracing::info!(count, "All contacts removed");

    session.mark_dirty();
    println!("{}", formatter.success(&format!("Deleted {} contact(s)", count)));
    Ok(())
}
