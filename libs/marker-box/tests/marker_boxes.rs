//! End-to-end box builds.

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use aruco_dict::{generate_occupancy_grid, DictionaryError, OccupancyGrid};
use config::constants::{BATCH_PRESET, DEFAULT_ID_PRESET};
use marker_box::{BoxError, BoxParams, MarkerBox};
use marker_mesh::{save_stl, segments_for_radius, StlFormat};

fn marker(dictionary: &str, id: u32, params: BoxParams) -> MarkerBox {
    let grid = generate_occupancy_grid(dictionary, id).unwrap();
    MarkerBox::new(dictionary, id, grid, params).unwrap()
}

#[test]
fn test_batch_box_bounds() {
    let mesh = marker("DICT_4X4_50", 1, BoxParams::from(BATCH_PRESET)).to_mesh().unwrap();
    let (min, max) = mesh.bounds().unwrap();
    assert_relative_eq!(min.x, -45.0, epsilon = 1e-9);
    assert_relative_eq!(max.y, 45.0, epsilon = 1e-9);
    assert_relative_eq!(min.z, -1.2, epsilon = 1e-9);
    assert_relative_eq!(max.z, 0.8, epsilon = 1e-9);
}

#[test]
fn test_relief_and_engraving_volume() {
    let params = BoxParams::from(DEFAULT_ID_PRESET);
    let mesh = marker("DICT_4X4_50", 0, params).to_mesh().unwrap();

    // 20 border cells plus 8 black data cells, each cut 0.4 deep
    let cell = 70.0 / 6.0;
    let relief = 28.0 * cell * cell * 0.4;
    let base = 90.0 * 90.0 * 1.0;
    let engraving_limit = 70.0 * 90.0 * 0.2;

    let volume = mesh.volume();
    assert!(volume < base - relief, "volume {volume}");
    assert!(volume > base - relief - engraving_limit, "volume {volume}");
}

#[test]
fn test_thin_box_cells_open_to_top() {
    let params = BoxParams {
        thickness: 1.0,
        groove_depth: 0.6,
        ..BoxParams::from(DEFAULT_ID_PRESET)
    };
    let build = |code| {
        let grid = OccupancyGrid::from_code(code, 4);
        MarkerBox::new("DICT_4X4_50", 0, grid, params).unwrap().to_mesh().unwrap().volume()
    };

    // 16 extra black data cells, each cut through the full 0.6 above the marker plane
    let cell = 70.0 / 6.0;
    let all_white = build(0xFFFF);
    let all_black = build(0);
    assert_relative_eq!(all_white - all_black, 16.0 * cell * cell * 0.6, max_relative = 1e-6);
}

#[test]
fn test_magnet_insets_volume() {
    let plain = BoxParams::from(DEFAULT_ID_PRESET);
    let radius = 3.0;
    let with_magnets = BoxParams {
        magnet_inset_radius: Some(radius),
        ..plain
    };

    let without = marker("DICT_4X4_50", 2, plain).to_mesh().unwrap().volume();
    let with = marker("DICT_4X4_50", 2, with_magnets).to_mesh().unwrap().volume();

    let n = f64::from(segments_for_radius(radius));
    let disc = 0.5 * n * radius * radius * (TAU / n).sin();
    assert_relative_eq!(without - with, 4.0 * disc * 0.2, max_relative = 1e-6);
}

#[test]
fn test_apriltag_box_builds() {
    let mesh = marker("DICT_APRILTAG_36h11", 3, BoxParams::from(BATCH_PRESET)).to_mesh().unwrap();
    assert!(!mesh.is_empty());
    assert!(mesh.volume() > 0.0);
}

#[test]
fn test_save_box_stl() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("DICT_4X4_50_5.stl");
    let mesh = marker("DICT_4X4_50", 5, BoxParams::from(DEFAULT_ID_PRESET)).to_mesh().unwrap();
    save_stl(&mesh, &path, StlFormat::Ascii).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("solid DICT_4X4_50_5"));
    assert_eq!(text.matches("endfacet").count(), mesh.triangle_count());
}

#[test]
fn test_unknown_marker_is_a_dictionary_error() {
    let err = generate_occupancy_grid("DICT_4X4_50", 50).map_err(BoxError::from).unwrap_err();
    assert!(matches!(err, BoxError::Dictionary(DictionaryError::IdOutOfRange { .. })));
}
