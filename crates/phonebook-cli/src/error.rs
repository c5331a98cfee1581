//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Directory or persistence error
    #[error("{0}")]
    Store(#[from] phonebook_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No contact matched a name query
    #[error("No contact matches '{0}'")]
    NoMatch(String),

    /// A name query matched several contacts and no pick was given
    #[error("'{query}' matches {count} contacts; choose one with --pick")]
    Ambiguous {
        /// The name query
        query: String,
        /// Number of matches
        count: usize,
    },
}
