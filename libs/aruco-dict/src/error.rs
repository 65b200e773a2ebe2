//! # Error Types
//!
//! Errors raised while resolving a marker from a dictionary.
//!
//! ## Error Policy
//!
//! - Unknown names and out-of-range ids are reported, never clamped
//! - Missing code tables are distinguished from invalid ids so callers can
//!   point users at `--dictionary_file`

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while looking up markers.
///
/// ## Example
///
/// ```rust
/// use aruco_dict::{generate_occupancy_grid, DictionaryError};
///
/// match generate_occupancy_grid("DICT_9X9_50", 0) {
///     Err(DictionaryError::UnknownDictionary(name)) => assert_eq!(name, "DICT_9X9_50"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary name is not one of the predefined dictionaries.
    #[error("Invalid dictionary type: {0}")]
    UnknownDictionary(String),

    /// The marker id is outside the dictionary.
    #[error("marker id {id} is out of range for {dictionary} (valid ids: 0..{count})")]
    IdOutOfRange {
        /// Dictionary name
        dictionary: String,
        /// Requested id
        id: u32,
        /// Number of markers in the dictionary
        count: usize,
    },

    /// The id is valid but its code is not in the loaded code table.
    #[error(
        "no code for marker {id} of {dictionary}: only {available} codes are embedded; \
         load the full dictionary with --dictionary_file"
    )]
    CodeUnavailable {
        /// Dictionary name
        dictionary: String,
        /// Requested id
        id: u32,
        /// Number of codes available
        available: usize,
    },

    /// A dictionary file disagrees with the dictionary it claims to describe.
    #[error("dictionary file has {found}x{found} markers but {dictionary} uses {expected}x{expected}")]
    MarkerSizeMismatch {
        /// Dictionary name
        dictionary: String,
        /// Marker size of the predefined dictionary
        expected: usize,
        /// Marker size found in the file
        found: usize,
    },

    /// A dictionary file could not be interpreted.
    #[error("malformed dictionary file: {0}")]
    MalformedFile(String),

    /// A dictionary file could not be parsed as JSON.
    #[error("dictionary file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A dictionary file could not be read.
    #[error("cannot read dictionary file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

// =============================================================================
// TESTS
// =============================================================================
