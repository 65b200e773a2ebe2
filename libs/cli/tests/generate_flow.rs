//! Flag/prompt resolution through to a saved STL.

use aruco_box::{resolve_request, GenerateArgs, Prompter};
use clap::Parser;
use marker_box::MarkerBox;
use marker_mesh::save_stl;

fn generate(flags: &[String], input: &str) -> std::path::PathBuf {
    let args = GenerateArgs::try_parse_from(std::iter::once("generate-aruco".to_string()).chain(flags.iter().cloned()))
        .unwrap();
    let mut printed = Vec::new();
    let mut prompter = Prompter::new(input.as_bytes(), &mut printed);
    let request = resolve_request(&args, &mut prompter).unwrap();

    let marker = MarkerBox::new(request.dictionary.name(), request.marker_id, request.grid, request.params).unwrap();
    save_stl(&marker.to_mesh().unwrap(), &request.output, request.format).unwrap();
    request.output
}

#[test]
fn test_default_id_writes_suffixed_file() {
    let dir = tempfile::tempdir().unwrap();
    let stem = dir.path().join("aruco_marker");
    let flags = vec!["--default_id".to_string(), "4".to_string(), "-o".to_string(), stem.display().to_string()];

    let path = generate(&flags, "");
    assert_eq!(path, dir.path().join("aruco_marker_4.stl"));
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("solid aruco_marker_4"));
}

#[test]
fn test_interactive_dimensions_binary_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("tag.stl");
    let flags: Vec<String> = [
        "--aruco_dictionary",
        "DICT_APRILTAG_16h5",
        "--marker_id",
        "2",
        "--binary",
        "-o",
    ]
    .iter()
    .map(|s| s.to_string())
    .chain([output.display().to_string()])
    .collect();

    let path = generate(&flags, "60\n2\n8\n0.8\n0.2\n");
    assert_eq!(path, output);
    let bytes = std::fs::read(&path).unwrap();
    let triangles = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize;
    assert_eq!(bytes.len(), 84 + 50 * triangles);
}
