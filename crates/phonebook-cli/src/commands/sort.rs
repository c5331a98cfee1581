//! Sort command implementation.

use crate::cli::SortArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the sort command.
///
/// The new order is kept, so it is saved with the directory.
pub fn execute_sort(args: SortArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let key = args.key;
    session.directory_mut().sort(key, args.desc);
    session.mark_dirty();
    tracing::info!(key = key.as_str(), descending = args.desc, "Contacts sorted");

    println!("{}", formatter.format_contacts(session.directory())?);
    Ok(())
}
