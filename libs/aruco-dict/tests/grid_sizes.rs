//! Grid shape checks across every predefined dictionary.

use aruco_dict::{Dictionary, DictionaryError, PredefinedDictionary, BLACK, WHITE};

fn assert_black_border(grid: &aruco_dict::OccupancyGrid) {
    let last = grid.size() - 1;
    for i in 0..grid.size() {
        assert_eq!(grid.get(0, i), Some(BLACK));
        assert_eq!(grid.get(last, i), Some(BLACK));
        assert_eq!(grid.get(i, 0), Some(BLACK));
        assert_eq!(grid.get(i, last), Some(BLACK));
    }
}

#[test]
fn test_every_marker_id_is_a_grid_or_code_unavailable() {
    for kind in PredefinedDictionary::ALL {
        let dict = Dictionary::predefined(kind);
        for id in 0..kind.marker_count() as u32 {
            match dict.occupancy_grid(id) {
                Ok(grid) => {
                    assert!((id as usize) < dict.available_codes(), "{kind} id {id}");
                    assert_eq!(grid.size(), kind.grid_size(), "{kind} id {id}");
                    assert!(grid.rows().flatten().all(|&cell| cell == BLACK || cell == WHITE));
                    assert_black_border(&grid);
                }
                Err(err) => {
                    assert!((id as usize) >= dict.available_codes(), "{kind} id {id}");
                    assert!(matches!(err, DictionaryError::CodeUnavailable { .. }), "{kind} id {id}");
                }
            }
        }
    }
}

#[test]
fn test_complete_embedded_dictionaries() {
    let complete: Vec<_> = PredefinedDictionary::ALL
        .into_iter()
        .filter(|&kind| Dictionary::predefined(kind).is_complete())
        .collect();
    assert_eq!(
        complete,
        vec![
            PredefinedDictionary::Dict4x4_50,
            PredefinedDictionary::Dict4x4_100,
            PredefinedDictionary::ArucoOriginal,
            PredefinedDictionary::AprilTag16h5,
            PredefinedDictionary::AprilTag36h11,
        ]
    );
}

#[test]
fn test_dictionary_file_completes_any_dictionary() {
    use std::fmt::Write as _;
    use std::io::Write as _;

    let kind = PredefinedDictionary::AprilTag25h9;
    let mut json = format!(r#"{{"nmarkers": {}, "markersize": 5"#, kind.marker_count());
    for id in 0..kind.marker_count() {
        let bits: String = (0..25).map(|bit| if (id >> (bit % 6)) & 1 == 1 { '1' } else { '0' }).collect();
        write!(json, r#", "marker_{id}": "{bits}""#).unwrap();
    }
    json.push('}');

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let dict = Dictionary::from_opencv_json_file(kind, file.path()).unwrap();
    assert!(dict.is_complete());
    let last = kind.marker_count() as u32 - 1;
    assert_eq!(dict.occupancy_grid(last).unwrap().size(), kind.grid_size());
}

#[test]
fn test_first_id_past_count_is_rejected() {
    for kind in PredefinedDictionary::ALL {
        let dict = Dictionary::predefined(kind);
        let err = dict.occupancy_grid(kind.marker_count() as u32).unwrap_err();
        assert!(matches!(err, DictionaryError::IdOutOfRange { .. }), "{kind}");
    }
}

#[test]
fn test_unembedded_ids_report_code_unavailable() {
    let dict = Dictionary::predefined(PredefinedDictionary::AprilTag25h9);
    for id in 0..PredefinedDictionary::AprilTag25h9.marker_count() as u32 {
        assert!(matches!(
            dict.code(id),
            Err(DictionaryError::CodeUnavailable { .. })
        ));
    }
}

#[test]
fn test_markers_are_distinct() {
    let dict = Dictionary::predefined(PredefinedDictionary::AprilTag36h11);
    let mut codes: Vec<u64> = (0..587).map(|id| dict.code(id).unwrap()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), 587);
}

#[test]
fn test_dictionary_file_round_trip_through_disk() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"nmarkers": 1, "markersize": 6, "maxCorrectionBits": 0, "marker_0": "{}"}}"#,
        "1".repeat(36)
    )
    .unwrap();

    let dict = Dictionary::from_opencv_json_file(PredefinedDictionary::Dict6x6_250, file.path()).unwrap();
    let grid = dict.occupancy_grid(0).unwrap();
    assert_eq!(grid.black_cells().count(), 8 * 8 - 36);

    let missing = file.path().with_extension("missing");
    let err = Dictionary::from_opencv_json_file(PredefinedDictionary::Dict6x6_250, &missing).unwrap_err();
    assert!(matches!(err, DictionaryError::Io { .. }));
}
