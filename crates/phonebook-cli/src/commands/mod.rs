//! Command implementations.

pub mod add;
pub mod delete;
pub mod group;
pub mod import;
pub mod list;
pub mod search;
pub mod sort;
pub mod update;

pub use self::add::execute_add;
pub use self::delete::{execute_delete, execute_delete_all};
pub use self::group::execute_group;
pub use self::import::execute_import;
pub use self::list::execute_list;
pub use self::search::{execute_history, execute_search};
pub use self::sort::execute_sort;
pub use self::update::execute_update;

use crate::error::{CliError, Result};
use phonebook_domain::ContactId;
use phonebook_store::Directory;
use std::io::{self, Write};

/// Resolve a name query to exactly one contact.
///
/// `pick` is the 1-based position among the matches; it may be omitted
/// when the query matches a single contact.
pub fn select_contact(directory: &Directory, query: &str, pick: Option<usize>) -> Result<ContactId> {
    let matches = directory.find_by_name(query);
    match (matches.len(), pick) {
        (0, _) => Err(CliError::NoMatch(query.to_string())),
        (1, None) => Ok(matches[0].id()),
        (count, None) => Err(CliError::Ambiguous {
            query: query.to_string(),
            count,
        }),
        (count, Some(n)) => matches
            .get(n.wrapping_sub(1))
            .map(|c| c.id())
            .ok_or_else(|| {
                CliError::InvalidInput(format!("--pick must be between 1 and {}", count))
            }),
    }
}

/// Ask a yes/no question on stdin. Anything but `y` means no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    Ok(response.trim().eq_ignore_ascii_case("y"))
}
