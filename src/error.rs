//! Error types for apiconsole
//!
//! Uses `thiserror` for library errors. Navigation resolution itself never
//! fails; these cover configuration loading and operation invocation.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ClientError;

/// Result type alias for apiconsole operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Main error type for apiconsole operations
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The selected key does not name an operation screen
    #[error("'{key}' is not an operation (expected '<service>-<method>')")]
    NotAnOperation { key: String },

    /// The selected operation is not part of the menu
    #[error("operation '{key}' is not in the menu")]
    UnknownOperation { key: String },

    /// Form parameters are not valid JSON
    #[error("invalid parameters: {message}")]
    InvalidParams { message: String },

    /// The SDK client reported an error
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// Interactive session was aborted by the user
    #[error("aborted by user")]
    Aborted,
}
