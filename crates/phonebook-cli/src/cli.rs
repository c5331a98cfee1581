//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use phonebook_domain::{ContactField, SortKey};
use std::path::PathBuf;

/// Phonebook - manage a personal contact directory.
#[derive(Debug, Parser)]
#[command(name = "phonebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Contact database file (JSON)
    #[arg(short, long, global = true, env = "PHONEBOOK_DATABASE")]
    pub database: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The command to run; no subcommand means the interactive menu.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Menu)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print all contacts
    List,

    /// Add a contact
    Add(AddArgs),

    /// Import contacts from a CSV file
    Import(ImportArgs),

    /// Search contacts by name, phone or creation date
    Search(SearchArgs),

    /// Show the change history of matching contacts
    History(HistoryArgs),

    /// Update one field of a contact
    Update(UpdateArgs),

    /// Delete a contact
    Delete(DeleteArgs),

    /// Delete every contact
    DeleteAll(DeleteAllArgs),

    /// Sort the directory
    Sort(SortArgs),

    /// Group contacts by the first letter of their last name
    Group,

    /// Enter the interactive menu
    Menu,
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Phone number, formatted (123) 456-7890
    pub phone_number: String,

    /// Email address
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Postal address
    #[arg(short, long, default_value = "")]
    pub address: String,
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// CSV file: first,last,phone[,email[,address]] per line, no header
    pub file: PathBuf,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Name substring (case-insensitive)
    #[arg(short, long, conflicts_with_all = ["phone", "from"])]
    pub name: Option<String>,

    /// Phone digits (formatting ignored)
    #[arg(short, long, conflicts_with = "from")]
    pub phone: Option<String>,

    /// First creation date, YYYY-MM-DD
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// Last creation date, YYYY-MM-DD (inclusive)
    #[arg(long, requires = "from")]
    pub to: Option<String>,
}

/// Arguments for the history command.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    /// Name substring
    pub name: String,
}

/// Arguments for the update command.
#[derive(Debug, Parser)]
pub struct UpdateArgs {
    /// Name substring selecting the contact
    pub name: String,

    /// Field to change
    #[arg(value_enum)]
    pub field: FieldArg,

    /// New value
    pub value: String,

    /// Which match to use when the name matches several contacts (1-based)
    #[arg(long)]
    pub pick: Option<usize>,
}

/// Arguments for the delete command.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Name substring selecting the contact
    pub name: String,

    /// Which match to use when the name matches several contacts (1-based)
    #[arg(long)]
    pub pick: Option<usize>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the delete-all command.
#[derive(Debug, Parser)]
pub struct DeleteAllArgs {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the sort command.
#[derive(Debug, Parser)]
pub struct SortArgs {
    /// Sort key: first_name, last_name, phone_number, created_at or updated_at
    pub key: SortKey,

    /// Sort in descending order
    #[arg(long, alias = "descending")]
    pub desc: bool,
}

/// Field argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FieldArg {
    /// First name
    First,
    /// Last name
    Last,
    /// Phone number
    Phone,
    /// Email address
    Email,
    /// Postal address
    Address,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<FieldArg> for ContactField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::First => ContactField::FirstName,
            FieldArg::Last => ContactField::LastName,
            FieldArg::Phone => ContactField::PhoneNumber,
            FieldArg::Email => ContactField::EmailAddress,
            FieldArg::Address => ContactField::Address,
        }
    }
}
