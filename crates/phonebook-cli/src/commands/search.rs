//! Search and history command implementations.

use crate::cli::{HistoryArgs, SearchArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use chrono::NaiveDate;
use phonebook_domain::Contact;

/// Input format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| CliError::InvalidInput(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

/// Run the query described by `args` against the session.
pub fn find<'a>(args: &SearchArgs, session: &'a Session) -> Result<Vec<&'a Contact>> {
    let directory = session.directory();
    match (&args.name, &args.phone, &args.from, &args.to) {
        (Some(name), _, _, _) => Ok(directory.find_by_name(name)),
        (None, Some(phone), _, _) => Ok(directory.find_by_phone(phone)),
        (None, None, Some(from), Some(to)) => {
            Ok(directory.find_by_date_range(parse_date(from)?, parse_date(to)?))
        }
        _ => Err(CliError::InvalidInput(
            "Give --name, --phone, or --from with --to".to_string(),
        )),
    }
}

/// Execute the search command.
pub fn execute_search(args: SearchArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let found = find(&args, session)?;
    tracing::debug!(matches = found.len(), "Search finished");
    println!("{}", formatter.format_contacts(found)?);
    Ok(())
}

/// Execute the history command.
pub fn execute_history(args: HistoryArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let found = session.directory().find_by_name(&args.name);
    if found.is_empty() {
        return Err(CliError::NoMatch(args.name));
    }

    let histories = found
        .into_iter()
        .map(|contact| formatter.format_history(contact))
        .collect::<Result<Vec<_>>>()?;
    println!("{}", histories.join("\n\n"));
    Ok(())
}
