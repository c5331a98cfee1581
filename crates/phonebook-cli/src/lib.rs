//! Phonebook CLI library.
//!
//! This library provides the command-line interface for the phonebook,
//! including configuration management, command execution, the interactive
//! menu, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod repl;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::{LoadStatus, Session};
