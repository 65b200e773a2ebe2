//! # Predefined Dictionaries
//!
//! The catalogue of OpenCV's predefined ArUco and AprilTag dictionaries.
//!
//! ## Size Table
//!
//! | Dictionary | Marker bits | Grid (with border) | Markers |
//! |------------|-------------|--------------------|---------|
//! | `DICT_4X4_*` | 4x4 | 6x6 | 50/100/250/1000 |
//! | `DICT_5X5_*` | 5x5 | 7x7 | 50/100/250/1000 |
//! | `DICT_6X6_*` | 6x6 | 8x8 | 50/100/250/1000 |
//! | `DICT_7X7_*` | 7x7 | 9x9 | 50/100/250/1000 |
//! | `DICT_ARUCO_ORIGINAL` | 5x5 | 7x7 | 1024 |
//! | `DICT_APRILTAG_16h5` | 4x4 | 6x6 | 30 |
//! | `DICT_APRILTAG_25h9` | 5x5 | 7x7 | 35 |
//! | `DICT_APRILTAG_36h10` | 6x6 | 8x8 | 2320 |
//! | `DICT_APRILTAG_36h11` | 6x6 | 8x8 | 587 |

use std::fmt;
use std::str::FromStr;

use config::constants::BORDER_CELLS;

use crate::error::DictionaryError;

// =============================================================================
// PREDEFINED DICTIONARY
// =============================================================================

/// One of the 21 predefined marker dictionaries.
///
/// ## Example
///
/// ```rust
/// use aruco_dict::PredefinedDictionary;
///
/// let dict: PredefinedDictionary = "DICT_APRILTAG_36h11".parse().unwrap();
/// assert_eq!(dict.marker_size(), 6);
/// assert_eq!(dict.grid_size(), 8);
/// assert_eq!(dict.marker_count(), 587);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredefinedDictionary {
    /// 4x4 bits, 50 markers
    Dict4x4_50,
    /// 4x4 bits, 100 markers
    Dict4x4_100,
    /// 4x4 bits, 250 markers
    Dict4x4_250,
    /// 4x4 bits, 1000 markers
    Dict4x4_1000,
    /// 5x5 bits, 50 markers
    Dict5x5_50,
    /// 5x5 bits, 100 markers
    Dict5x5_100,
    /// 5x5 bits, 250 markers
    Dict5x5_250,
    /// 5x5 bits, 1000 markers
    Dict5x5_1000,
    /// 6x6 bits, 50 markers
    Dict6x6_50,
    /// 6x6 bits, 100 markers
    Dict6x6_100,
    /// 6x6 bits, 250 markers
    Dict6x6_250,
    /// 6x6 bits, 1000 markers
    Dict6x6_1000,
    /// 7x7 bits, 50 markers
    Dict7x7_50,
    /// 7x7 bits, 100 markers
    Dict7x7_100,
    /// 7x7 bits, 250 markers
    Dict7x7_250,
    /// 7x7 bits, 1000 markers
    Dict7x7_1000,
    /// The original ArUco library dictionary (5x5 bits, 1024 markers)
    ArucoOriginal,
    /// AprilTag 16h5 family
    AprilTag16h5,
    /// AprilTag 25h9 family
    AprilTag25h9,
    /// AprilTag 36h10 family
    AprilTag36h10,
    /// AprilTag 36h11 family
    AprilTag36h11,
}

impl PredefinedDictionary {
    /// All dictionaries, in the order the interactive picker lists them.
    pub const ALL: [PredefinedDictionary; 21] = [
        Self::Dict4x4_50,
        Self::Dict4x4_100,
        Self::Dict4x4_250,
        Self::Dict4x4_1000,
        Self::Dict5x5_50,
        Self::Dict5x5_100,
        Self::Dict5x5_250,
        Self::Dict5x5_1000,
        Self::Dict6x6_50,
        Self::Dict6x6_100,
        Self::Dict6x6_250,
        Self::Dict6x6_1000,
        Self::Dict7x7_50,
        Self::Dict7x7_100,
        Self::Dict7x7_250,
        Self::Dict7x7_1000,
        Self::ArucoOriginal,
        Self::AprilTag16h5,
        Self::AprilTag25h9,
        Self::AprilTag36h10,
        Self::AprilTag36h11,
    ];

    /// OpenCV name, e.g. `DICT_4X4_50`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dict4x4_50 => "DICT_4X4_50",
            Self::Dict4x4_100 => "DICT_4X4_100",
            Self::Dict4x4_250 => "DICT_4X4_250",
            Self::Dict4x4_1000 => "DICT_4X4_1000",
            Self::Dict5x5_50 => "DICT_5X5_50",
            Self::Dict5x5_100 => "DICT_5X5_100",
            Self::Dict5x5_250 => "DICT_5X5_250",
            Self::Dict5x5_1000 => "DICT_5X5_1000",
            Self::Dict6x6_50 => "DICT_6X6_50",
            Self::Dict6x6_100 => "DICT_6X6_100",
            Self::Dict6x6_250 => "DICT_6X6_250",
            Self::Dict6x6_1000 => "DICT_6X6_1000",
            Self::Dict7x7_50 => "DICT_7X7_50",
            Self::Dict7x7_100 => "DICT_7X7_100",
            Self::Dict7x7_250 => "DICT_7X7_250",
            Self::Dict7x7_1000 => "DICT_7X7_1000",
            Self::ArucoOriginal => "DICT_ARUCO_ORIGINAL",
            Self::AprilTag16h5 => "DICT_APRILTAG_16h5",
            Self::AprilTag25h9 => "DICT_APRILTAG_25h9",
            Self::AprilTag36h10 => "DICT_APRILTAG_36h10",
            Self::AprilTag36h11 => "DICT_APRILTAG_36h11",
        }
    }

    /// Name without the `DICT_` prefix, as shown by the interactive picker.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        let name = self.name();
        name.strip_prefix("DICT_").unwrap_or(name)
    }

    /// Number of data bits along one side of the marker (border excluded).
    #[must_use]
    pub const fn marker_size(self) -> usize {
        match self {
            Self::Dict4x4_50 | Self::Dict4x4_100 | Self::Dict4x4_250 | Self::Dict4x4_1000 => 4,
            Self::Dict5x5_50 | Self::Dict5x5_100 | Self::Dict5x5_250 | Self::Dict5x5_1000 => 5,
            Self::Dict6x6_50 | Self::Dict6x6_100 | Self::Dict6x6_250 | Self::Dict6x6_1000 => 6,
            Self::Dict7x7_50 | Self::Dict7x7_100 | Self::Dict7x7_250 | Self::Dict7x7_1000 => 7,
            Self::ArucoOriginal => 5,
            Self::AprilTag16h5 => 4,
            Self::AprilTag25h9 => 5,
            Self::AprilTag36h10 | Self::AprilTag36h11 => 6,
        }
    }

    /// Side of the occupancy grid: marker bits plus the black border.
    #[must_use]
    pub const fn grid_size(self) -> usize {
        self.marker_size() + 2 * BORDER_CELLS
    }

    /// Number of markers in the dictionary; valid ids are `0..marker_count()`.
    #[must_use]
    pub const fn marker_count(self) -> usize {
        match self {
            Self::Dict4x4_50 | Self::Dict5x5_50 | Self::Dict6x6_50 | Self::Dict7x7_50 => 50,
            Self::Dict4x4_100 | Self::Dict5x5_100 | Self::Dict6x6_100 | Self::Dict7x7_100 => 100,
            Self::Dict4x4_250 | Self::Dict5x5_250 | Self::Dict6x6_250 | Self::Dict7x7_250 => 250,
            Self::Dict4x4_1000 | Self::Dict5x5_1000 | Self::Dict6x6_1000 | Self::Dict7x7_1000 => {
                1000
            }
            Self::ArucoOriginal => 1024,
            Self::AprilTag16h5 => 30,
            Self::AprilTag25h9 => 35,
            Self::AprilTag36h10 => 2320,
            Self::AprilTag36h11 => 587,
        }
    }
}

impl fmt::Display for PredefinedDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredefinedDictionary {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dict| dict.name() == s)
            .ok_or_else(|| DictionaryError::UnknownDictionary(s.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
