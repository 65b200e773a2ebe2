//! # Configuration Constants
//!
//! Centralized constants for the marker box pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Tessellation parameters for circular insets
//! - **Layout**: Marker border and engraving ratios
//! - **Presets**: Named parameter sets used by the CLI shortcuts

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons of parameters.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-9;

/// Thickness of a BSP splitting plane in mm.
///
/// Vertices closer than this to a plane are treated as lying on it.
pub const PLANE_EPSILON: f64 = 1e-7;

/// Tolerance used when welding triangle corners into shared vertices.
pub const VERTEX_WELD_EPSILON: f64 = 1e-6;

/// Remaining stack below which BSP recursion allocates a new segment.
///
/// # Example
///
/// ```rust
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Size of each stack segment allocated by `stacker` during BSP recursion.
pub const STACKER_STACK_SIZE_BYTES: usize = 4 * 1024 * 1024;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum angle per segment (degrees) for circular cutouts.
///
/// A full circle never gets more than `360 / DEFAULT_FA` segments.
pub const DEFAULT_FA: f64 = 6.0;

/// Minimum segment length (mm) for circular cutouts.
pub const DEFAULT_FS: f64 = 0.5;

/// Minimum number of segments for any circle.
pub const MIN_SEGMENTS: u32 = 3;

/// Maximum number of segments for any circle.
pub const MAX_SEGMENTS: u32 = 360;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Number of black border cells on each side of a marker.
///
/// A `4x4` dictionary therefore produces a `6x6` occupancy grid.
pub const BORDER_CELLS: usize = 1;

/// Cap height of the engraved marker id, as a fraction of the margin.
pub const ID_TEXT_SCALE: f64 = 0.7;

/// Cap height of the engraved dictionary name, as a fraction of the margin.
pub const DICTIONARY_TEXT_SCALE: f64 = 0.5;

/// Distance (mm) bottom cutters extend below the bottom face so no cutter
/// face is coplanar with it.
pub const CUTTER_CLEARANCE: f64 = 0.05;

// =============================================================================
// CLI DEFAULTS
// =============================================================================

/// Dictionary offered when the interactive picker receives an empty line.
pub const DEFAULT_INTERACTIVE_DICTIONARY: &str = "DICT_ARUCO_ORIGINAL";

/// Output file stem used when `--output` is not given.
pub const DEFAULT_OUTPUT_STEM: &str = "aruco_marker";

/// Extension appended to output paths.
pub const STL_EXTENSION: &str = "stl";

/// Input that aborts any interactive prompt.
pub const QUIT_STRING: &str = "q";

// =============================================================================
// PRESETS
// =============================================================================

/// A complete set of box dimensions in millimetres.
///
/// # Example
///
/// ```rust
/// use config::constants::BATCH_PRESET;
///
/// assert_eq!(BATCH_PRESET.side, 90.0);
/// assert_eq!(BATCH_PRESET.magnet_inset_radius, Some(5.15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxPreset {
    /// Total side length (marker + margins).
    pub side: f64,
    /// Total box thickness.
    pub thickness: f64,
    /// Width of the white frame around the marker.
    pub margin: f64,
    /// Depth of the marker relief.
    pub groove_depth: f64,
    /// Radius of the four magnet insets, if any.
    pub magnet_inset_radius: Option<f64>,
    /// Printer layer height, used as bottom engraving depth.
    pub layer_height: f64,
}

/// Dictionary used by the `--default_id` shortcut.
pub const DEFAULT_ID_DICTIONARY: &str = "DICT_4X4_50";

/// Dimensions used by the `--default_id` shortcut.
pub const DEFAULT_ID_PRESET: BoxPreset = BoxPreset {
    side: 90.0,
    thickness: 1.0,
    margin: 10.0,
    groove_depth: 0.4,
    magnet_inset_radius: None,
    layer_height: 0.2,
};

/// Dimensions passed to every generator invocation of the batch driver.
pub const BATCH_PRESET: BoxPreset = BoxPreset {
    side: 90.0,
    thickness: 2.0,
    margin: 10.0,
    groove_depth: 0.8,
    magnet_inset_radius: Some(5.15),
    layer_height: 0.2,
};

/// Dictionaries generated by the batch driver.
pub const BATCH_DICTIONARIES: &[&str] = &["DICT_4X4_50", "DICT_APRILTAG_36h11"];

/// Marker ids generated for every batch dictionary.
pub const BATCH_MARKER_IDS: &[u32] = &[1, 3];

/// Directory receiving the batch STL files.
pub const BATCH_OUTPUT_DIR: &str = "roboasset_arucos";

/// Name of the generator executable invoked by the batch driver.
pub const GENERATOR_BINARY: &str = "generate-aruco";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of segments used to approximate a circle of `radius` mm.
///
/// Takes the smaller of the angle rule (`360 / DEFAULT_FA`) and the length rule
/// (`circumference / DEFAULT_FS`), clamped to `MIN_SEGMENTS..=MAX_SEGMENTS`.
///
/// # Example
///
/// ```rust
/// use config::constants::{circle_segments, MAX_SEGMENTS, MIN_SEGMENTS};
///
/// assert_eq!(circle_segments(0.0), MIN_SEGMENTS);
/// assert!(circle_segments(1000.0) <= MAX_SEGMENTS);
/// ```
pub fn circle_segments(radius: f64) -> u32 {
    if !radius.is_finite() || radius <= 0.0 {
        return MIN_SEGMENTS;
    }
    let from_angle = 360.0 / DEFAULT_FA;
    let from_size = (2.0 * std::f64::consts::PI * radius) / DEFAULT_FS;
    let segments = from_angle.min(from_size).ceil();
    (segments as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}
