//! # Error Types
//!
//! Errors raised while turning flags and prompts into a generation request.

use aruco_dict::DictionaryError;
use thiserror::Error;

/// Errors raised while resolving what to generate.
#[derive(Error, Debug)]
pub enum CliError {
    /// The user entered the quit string at a prompt.
    #[error("cancelled by user")]
    Cancelled,

    /// Standard input closed while a prompt was waiting.
    #[error("input closed before a value was entered")]
    InputClosed,

    /// The dictionary name, file or marker id is invalid.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Reading from or writing to the terminal failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for request resolution.
pub type CliResult<T> = Result<T, CliError>;
