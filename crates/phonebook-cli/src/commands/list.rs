//! List command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the list command.
pub fn execute_list(session: &Session, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_contacts(session.directory())?);
    Ok(())
}
