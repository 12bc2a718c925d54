//! Error types for the command language.

use thiserror::Error;

/// Errors that can occur when parsing a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing to parse.
    #[error("empty command")]
    Empty,

    /// The first element names no known group.
    #[error("unknown command group: {0}")]
    UnknownGroup(String),

    /// A key that takes a value was given none.
    #[error("missing value for {0}")]
    MissingValue(String),

    /// A value is not a number or does not fit in 32 bits.
    #[error("invalid value for {key}: {text}")]
    InvalidValue {
        /// Key the value was given for.
        key: String,
        /// Offending text.
        text: String,
    },
}

/// Result type alias for command parsing.
pub type CommandResult<T> = Result<T, CommandError>;
