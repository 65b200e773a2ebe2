//! Output file naming.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use config::constants::STL_EXTENSION;

/// STL path for `output`.
///
/// A trailing `.stl` is kept rather than doubled. With `default_id`, `_<id>`
/// is appended to the file stem.
///
/// ## Example
///
/// ```rust
/// use std::path::{Path, PathBuf};
/// use aruco_box::output::stl_output_path;
///
/// assert_eq!(stl_output_path(Path::new("aruco_marker"), Some(3)), PathBuf::from("aruco_marker_3.stl"));
/// assert_eq!(stl_output_path(Path::new("box.stl"), None), PathBuf::from("box.stl"));
/// ```
pub fn stl_output_path(output: &Path, default_id: Option<u32>) -> PathBuf {
    let mut base = output.to_path_buf();
    if base
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(STL_EXTENSION))
    {
        base.set_extension("");
    }

    if let Some(id) = default_id {
        let mut name = base.file_name().map(OsString::from).unwrap_or_default();
        name.push(format!("_{id}"));
        base.set_file_name(name);
    }

    let mut path = base.into_os_string();
    path.push(".");
    path.push(STL_EXTENSION);
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stl_output_path_appends_extension() {
        assert_eq!(stl_output_path(Path::new("aruco_marker"), None), PathBuf::from("aruco_marker.stl"));
        assert_eq!(stl_output_path(Path::new("out/box"), None), PathBuf::from("out/box.stl"));
    }

    #[test]
    fn test_stl_output_path_no_double_extension() {
        assert_eq!(stl_output_path(Path::new("box.stl"), None), PathBuf::from("box.stl"));
        assert_eq!(stl_output_path(Path::new("box.STL"), None), PathBuf::from("box.stl"));
    }

    #[test]
    fn test_stl_output_path_keeps_other_dots() {
        assert_eq!(stl_output_path(Path::new("box.v2"), None), PathBuf::from("box.v2.stl"));
    }

    #[test]
    fn test_stl_output_path_default_id_suffix() {
        assert_eq!(stl_output_path(Path::new("aruco_marker"), Some(0)), PathBuf::from("aruco_marker_0.stl"));
        assert_eq!(stl_output_path(Path::new("dir/tag.stl"), Some(12)), PathBuf::from("dir/tag_12.stl"));
    }
}
