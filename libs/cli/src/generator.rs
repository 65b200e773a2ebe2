//! Locating the `generate-aruco` executable for batch runs.

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

use config::constants::GENERATOR_BINARY;

/// Generator executable: `explicit` if given, else the `generate-aruco`
/// installed next to `current_exe`, else a bare name looked up on `PATH`.
pub fn generator_path(explicit: Option<&Path>, current_exe: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let file_name = format!("{GENERATOR_BINARY}{EXE_SUFFIX}");
    current_exe
        .and_then(Path::parent)
        .map(|dir| dir.join(&file_name))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(GENERATOR_BINARY))
}
