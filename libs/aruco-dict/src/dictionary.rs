//! # Dictionary
//!
//! A predefined dictionary paired with the marker codes available for it.
//!
//! Codes come from the embedded tables, from the `DICT_ARUCO_ORIGINAL`
//! generator, or from a dictionary file written by OpenCV's
//! `Dictionary::writeDictionary` in JSON form:
//!
//! ```json
//! { "nmarkers": 2, "markersize": 4, "maxCorrectionBits": 1,
//!   "marker_0": "1011001101010010", "marker_1": "..." }
//! ```
//!
//! Character `i` of a marker string is cell `(i / n, i % n)`, `1` is white.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::codes::{APRILTAG_16H5_CODES, APRILTAG_36H11_CODES, ARUCO_4X4_CODES};
use crate::error::{DictionaryError, DictionaryResult};
use crate::grid::OccupancyGrid;
use crate::original::original_codes;
use crate::predefined::PredefinedDictionary;

// =============================================================================
// DICTIONARY
// =============================================================================

/// A predefined dictionary with its code table.
///
/// `codes[id]` is the packed code of marker `id`. The table may be shorter
/// than [`PredefinedDictionary::marker_count`] when only part of the
/// dictionary is embedded.
///
/// ## Example
///
/// ```rust
/// use aruco_dict::{Dictionary, PredefinedDictionary};
///
/// let dict = Dictionary::predefined(PredefinedDictionary::Dict4x4_50);
/// let grid = dict.occupancy_grid(0).unwrap();
/// assert_eq!(grid.size(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Dictionary {
    kind: PredefinedDictionary,
    codes: Cow<'static, [u64]>,
}

impl Dictionary {
    /// Dictionary backed by the codes shipped with the crate.
    #[must_use]
    pub fn predefined(kind: PredefinedDictionary) -> Self {
        use PredefinedDictionary as P;

        let codes: Cow<'static, [u64]> = match kind {
            P::Dict4x4_50 => Cow::Borrowed(&ARUCO_4X4_CODES[..50]),
            P::Dict4x4_100 | P::Dict4x4_250 | P::Dict4x4_1000 => Cow::Borrowed(&ARUCO_4X4_CODES[..]),
            P::ArucoOriginal => Cow::Owned(original_codes()),
            P::AprilTag16h5 => Cow::Borrowed(&APRILTAG_16H5_CODES[..]),
            P::AprilTag36h11 => Cow::Borrowed(&APRILTAG_36H11_CODES[..]),
            _ => Cow::Borrowed(&[]),
        };
        debug!(dictionary = kind.name(), codes = codes.len(), "loaded embedded codes");
        Self { kind, codes }
    }

    /// Dictionary whose codes are read from an OpenCV JSON dictionary file.
    ///
    /// ## Parameters
    ///
    /// - `kind`: dictionary the file describes; fixes marker size and count
    /// - `reader`: JSON source
    ///
    /// Markers beyond `kind.marker_count()` are ignored.
    pub fn from_opencv_json<R: Read>(kind: PredefinedDictionary, reader: R) -> DictionaryResult<Self> {
        let file: OpenCvDictionaryFile = serde_json::from_reader(reader)?;
        if file.marker_size != kind.marker_size() {
            return Err(DictionaryError::MarkerSizeMismatch {
                dictionary: kind.name().to_string(),
                expected: kind.marker_size(),
                found: file.marker_size,
            });
        }

        let count = file.marker_count.min(kind.marker_count());
        let codes = (0..count)
            .map(|id| {
                let key = format!("marker_{id}");
                let bits = file
                    .markers
                    .get(&key)
                    .and_then(serde_json::Value::as_str)
                    .ok_or_else(|| DictionaryError::MalformedFile(format!("missing string field {key}")))?;
                parse_bit_string(bits, file.marker_size)
                    .map_err(|reason| DictionaryError::MalformedFile(format!("{key}: {reason}")))
            })
            .collect::<DictionaryResult<Vec<_>>>()?;

        info!(
            dictionary = kind.name(),
            codes = codes.len(),
            max_correction_bits = file.max_correction_bits,
            "loaded dictionary file"
        );
        Ok(Self {
            kind,
            codes: Cow::Owned(codes),
        })
    }

    /// [`Dictionary::from_opencv_json`] reading from a file path.
    pub fn from_opencv_json_file(kind: PredefinedDictionary, path: &Path) -> DictionaryResult<Self> {
        let file = File::open(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_opencv_json(kind, BufReader::new(file))
    }

    /// The dictionary this table belongs to.
    #[must_use]
    pub fn kind(&self) -> PredefinedDictionary {
        self.kind
    }

    /// OpenCV name of the dictionary.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Data bits per marker side.
    #[must_use]
    pub fn marker_size(&self) -> usize {
        self.kind.marker_size()
    }

    /// Number of markers in the dictionary (not the number of loaded codes).
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.kind.marker_count()
    }

    /// Number of codes actually available.
    #[must_use]
    pub fn available_codes(&self) -> usize {
        self.codes.len()
    }

    /// Whether every marker of the dictionary has a code loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.codes.len() >= self.marker_count()
    }

    /// Packed code of marker `id`.
    ///
    /// Fails with `IdOutOfRange` when `id >= marker_count()` and with
    /// `CodeUnavailable` when the id is valid but its code is not loaded.
    pub fn code(&self, id: u32) -> DictionaryResult<u64> {
        let index = id as usize;
        if index >= self.marker_count() {
            return Err(DictionaryError::IdOutOfRange {
                dictionary: self.name().to_string(),
                id,
                count: self.marker_count(),
            });
        }
        self.codes
            .get(index)
            .copied()
            .ok_or_else(|| DictionaryError::CodeUnavailable {
                dictionary: self.name().to_string(),
                id,
                available: self.codes.len(),
            })
    }

    /// Bordered occupancy grid of marker `id`.
    pub fn occupancy_grid(&self, id: u32) -> DictionaryResult<OccupancyGrid> {
        let code = self.code(id)?;
        Ok(OccupancyGrid::from_code(code, self.marker_size()))
    }
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Occupancy grid of marker `id` from the predefined dictionary `name`.
///
/// ## Example
///
/// ```rust
/// use aruco_dict::generate_occupancy_grid;
///
/// let grid = generate_occupancy_grid("DICT_APRILTAG_36h11", 3).unwrap();
/// assert_eq!(grid.size(), 8);
/// assert!(generate_occupancy_grid("DICT_APRILTAG_36h11", 587).is_err());
/// ```
pub fn generate_occupancy_grid(name: &str, id: u32) -> DictionaryResult<OccupancyGrid> {
    let kind: PredefinedDictionary = name.parse()?;
    Dictionary::predefined(kind).occupancy_grid(id)
}

// =============================================================================
// OPENCV FILE FORMAT
// =============================================================================

#[derive(Debug, Deserialize)]
struct OpenCvDictionaryFile {
    #[serde(rename = "nmarkers")]
    marker_count: usize,
    #[serde(rename = "markersize")]
    marker_size: usize,
    #[serde(rename = "maxCorrectionBits", default)]
    max_correction_bits: usize,
    #[serde(flatten)]
    markers: HashMap<String, serde_json::Value>,
}

fn parse_bit_string(bits: &str, marker_size: usize) -> Result<u64, String> {
    let expected = marker_size * marker_size;
    if bits.len() != expected {
        return Err(format!("expected {expected} bits, found {}", bits.len()));
    }
    bits.bytes().enumerate().try_fold(0u64, |code, (index, byte)| match byte {
        b'0' => Ok(code),
        b'1' => Ok(code | (1 << index)),
        other => Err(format!("invalid bit character {:?}", char::from(other))),
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{BLACK, WHITE};

    #[test]
    fn test_4x4_50_marker_zero() {
        // OpenCV: DICT_4X4_50 id 0 inner bits
        // 1 0 1 1 / 0 1 0 1 / 0 0 1 1 / 0 0 1 0
        let grid = generate_occupancy_grid("DICT_4X4_50", 0).unwrap();
        let inner: Vec<Vec<u8>> = grid.rows().skip(1).take(4).map(|row| row[1..5].to_vec()).collect();
        assert_eq!(
            inner,
            vec![vec![1, 0, 1, 1], vec![0, 1, 0, 1], vec![0, 0, 1, 1], vec![0, 0, 1, 0]]
        );
    }

    #[test]
    fn test_4x4_variants_share_prefix() {
        let small = Dictionary::predefined(PredefinedDictionary::Dict4x4_50);
        let large = Dictionary::predefined(PredefinedDictionary::Dict4x4_1000);
        for id in 0..50 {
            assert_eq!(small.code(id).unwrap(), large.code(id).unwrap());
        }
    }

    #[test]
    fn test_id_out_of_range() {
        let err = generate_occupancy_grid("DICT_4X4_50", 50).unwrap_err();
        assert!(matches!(err, DictionaryError::IdOutOfRange { id: 50, count: 50, .. }));
    }

    #[test]
    fn test_code_unavailable_for_unembedded_dictionary() {
        let err = generate_occupancy_grid("DICT_6X6_250", 4).unwrap_err();
        assert!(matches!(err, DictionaryError::CodeUnavailable { id: 4, available: 0, .. }));
    }

    #[test]
    fn test_code_unavailable_past_embedded_prefix() {
        let err = generate_occupancy_grid("DICT_4X4_1000", 100).unwrap_err();
        assert!(matches!(err, DictionaryError::CodeUnavailable { available: 100, .. }));
    }

    #[test]
    fn test_unknown_dictionary() {
        let err = generate_occupancy_grid("DICT_3X3_10", 0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid dictionary type: DICT_3X3_10");
    }

    #[test]
    fn test_full_tables_cover_marker_count() {
        for kind in [
            PredefinedDictionary::ArucoOriginal,
            PredefinedDictionary::AprilTag16h5,
            PredefinedDictionary::AprilTag36h11,
        ] {
            assert_eq!(Dictionary::predefined(kind).available_codes(), kind.marker_count());
        }
    }

    #[test]
    fn test_from_opencv_json() {
        let json = r#"{
            "nmarkers": 2,
            "markersize": 5,
            "maxCorrectionBits": 3,
            "marker_0": "1000000000000000000000001",
            "marker_1": "0000000000000000000000000"
        }"#;
        let dict = Dictionary::from_opencv_json(PredefinedDictionary::Dict5x5_50, json.as_bytes()).unwrap();
        assert_eq!(dict.available_codes(), 2);
        let grid = dict.occupancy_grid(0).unwrap();
        assert_eq!(grid.get(1, 1), Some(WHITE));
        assert_eq!(grid.get(5, 5), Some(WHITE));
        assert_eq!(grid.get(1, 2), Some(BLACK));
        assert!(matches!(dict.code(2), Err(DictionaryError::CodeUnavailable { .. })));
    }

    #[test]
    fn test_from_opencv_json_size_mismatch() {
        let json = r#"{"nmarkers": 0, "markersize": 4}"#;
        let err = Dictionary::from_opencv_json(PredefinedDictionary::Dict6x6_50, json.as_bytes()).unwrap_err();
        assert!(matches!(err, DictionaryError::MarkerSizeMismatch { expected: 6, found: 4, .. }));
    }

    #[test]
    fn test_from_opencv_json_bad_bits() {
        let json = r#"{"nmarkers": 1, "markersize": 4, "marker_0": "10x1000000000000"}"#;
        let err = Dictionary::from_opencv_json(PredefinedDictionary::Dict4x4_50, json.as_bytes()).unwrap_err();
        assert!(matches!(err, DictionaryError::MalformedFile(_)));

        let json = r#"{"nmarkers": 2, "markersize": 4, "marker_0": "1000000000000000"}"#;
        let err = Dictionary::from_opencv_json(PredefinedDictionary::Dict4x4_50, json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("marker_1"));
    }

    #[test]
    fn test_from_opencv_json_rejects_invalid_json() {
        let err = Dictionary::from_opencv_json(PredefinedDictionary::Dict4x4_50, "{".as_bytes()).unwrap_err();
        assert!(matches!(err, DictionaryError::Json(_)));
    }
}
