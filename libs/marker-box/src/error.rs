//! # Error Types
//!
//! Parameter validation errors and the umbrella error of box generation.

use std::path::PathBuf;

use aruco_dict::DictionaryError;
use marker_mesh::MeshError;
use thiserror::Error;

// =============================================================================
// PARAMETER ERRORS
// =============================================================================

/// Box dimensions that cannot produce a printable box.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    /// A dimension is zero, negative or not finite.
    #[error("{name} must be a positive number of millimetres, got {value}")]
    NotPositive {
        /// Parameter name as used on the command line
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// The margins leave no room for the marker.
    #[error("marker margin {margin} must be less than half the box side {side}")]
    MarginTooLarge {
        /// Margin width
        margin: f64,
        /// Box side
        side: f64,
    },

    /// The relief would cut through the whole box.
    #[error("groove depth {groove_depth} must be less than the box thickness {thickness}")]
    GrooveTooDeep {
        /// Groove depth
        groove_depth: f64,
        /// Box thickness
        thickness: f64,
    },

    /// Bottom engravings would cut through the whole box.
    #[error("layer height {layer_height} must be less than the box thickness {thickness}")]
    LayerTooThick {
        /// Layer height
        layer_height: f64,
        /// Box thickness
        thickness: f64,
    },
}

// =============================================================================
// BOX ERRORS
// =============================================================================

/// Errors raised while generating a marker box.
#[derive(Error, Debug)]
pub enum BoxError {
    /// Invalid dimensions.
    #[error(transparent)]
    Params(#[from] ParamsError),

    /// Dictionary or marker lookup failed.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Geometry construction or export failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// A file system operation failed.
    #[error("cannot access {path}: {source}")]
    Io {
        /// Path involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for box generation.
pub type BoxResult<T> = Result<T, BoxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_error_display() {
        let err = ParamsError::NotPositive {
            name: "box_side",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "box_side must be a positive number of millimetres, got -1");
    }

    #[test]
    fn test_box_error_is_transparent() {
        let err = BoxError::from(ParamsError::MarginTooLarge { margin: 50.0, side: 90.0 });
        assert!(err.to_string().starts_with("marker margin 50"));
    }
}
