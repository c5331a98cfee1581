//! Group command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the group command.
pub fn execute_group(session: &Session, formatter: &Formatter) -> Result<()> {
    let groups = session.directory().group_by_last_initial();
    tracing::debug!(groups = groups.len(), "Contacts grouped");
    println!("{}", formatter.format_groups(&groups)?);
    Ok(())
}
