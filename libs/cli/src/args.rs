//! # Command-Line Arguments
//!
//! Flags keep their historical snake_case spelling (`--box_side`,
//! `--aruco_dictionary`, ...) so existing scripts keep working.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use config::constants::{BATCH_DICTIONARIES, BATCH_MARKER_IDS, BATCH_OUTPUT_DIR, DEFAULT_OUTPUT_STEM};

// =============================================================================
// GENERATE-ARUCO
// =============================================================================

/// Generate a 3D-printable box carrying an ArUco or AprilTag marker.
///
/// Missing values are asked for interactively; enter `q` at any prompt to quit.
#[derive(Parser, Debug, Clone)]
#[command(name = "generate-aruco", version, long_about = None)]
pub struct GenerateArgs {
    /// Output file name; `.stl` is appended unless already present
    #[arg(short, long, default_value = DEFAULT_OUTPUT_STEM)]
    pub output: PathBuf,

    /// Only give a marker id and use the defaults: DICT_4X4_50, 90 mm side,
    /// 1 mm thickness, 10 mm margin, 0.4 mm groove depth
    #[arg(long = "default_id", value_name = "ID")]
    pub default_id: Option<u32>,

    /// Box side length in mm (marker + margins)
    #[arg(long = "box_side", value_name = "MM")]
    pub box_side: Option<f64>,

    /// Box thickness in mm
    #[arg(long = "box_thickness", value_name = "MM")]
    pub box_thickness: Option<f64>,

    /// White margin width in mm
    #[arg(long = "marker_margin", value_name = "MM")]
    pub marker_margin: Option<f64>,

    /// Marker groove depth in mm
    #[arg(long = "marker_groove_depth", value_name = "MM")]
    pub marker_groove_depth: Option<f64>,

    /// Dictionary name, e.g. DICT_4X4_50 or DICT_APRILTAG_36h11
    #[arg(long = "aruco_dictionary", value_name = "NAME")]
    pub aruco_dictionary: Option<String>,

    /// Marker id within the dictionary
    #[arg(long = "marker_id", value_name = "ID")]
    pub marker_id: Option<u32>,

    /// Radius in mm of four magnet insets on the bottom of the box
    #[arg(long = "magnet_inset_radius", value_name = "MM")]
    pub magnet_inset_radius: Option<f64>,

    /// Printer layer height in mm, used as depth of the bottom engravings
    #[arg(long = "layer_height", value_name = "MM")]
    pub layer_height: Option<f64>,

    /// OpenCV JSON dictionary file providing the marker codes
    #[arg(long = "dictionary_file", value_name = "PATH")]
    pub dictionary_file: Option<PathBuf>,

    /// Write binary STL instead of ASCII
    #[arg(long)]
    pub binary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

// =============================================================================
// GENERATE-ROBOASSET-ARUCOS
// =============================================================================

/// Generate the robot asset marker boxes by running `generate-aruco` once per
/// dictionary and marker id.
#[derive(Parser, Debug, Clone)]
#[command(name = "generate-roboasset-arucos", version, long_about = None)]
pub struct BatchArgs {
    /// Directory receiving the STL files
    #[arg(long = "output_dir", default_value = BATCH_OUTPUT_DIR, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Path of the generate-aruco executable [default: next to this executable]
    #[arg(long, value_name = "PATH")]
    pub generator: Option<PathBuf>,

    /// Print the commands without running them
    #[arg(long = "dry_run")]
    pub dry_run: bool,

    /// Dictionary to generate; repeat for several [default: DICT_4X4_50, DICT_APRILTAG_36h11]
    #[arg(long = "dictionary", value_name = "NAME")]
    pub dictionaries: Vec<String>,

    /// Marker id to generate for every dictionary; repeat for several [default: 1, 3]
    #[arg(long = "marker_id", value_name = "ID")]
    pub marker_ids: Vec<u32>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl BatchArgs {
    /// Dictionaries to generate, falling back to the batch preset.
    pub fn dictionaries(&self) -> Vec<String> {
        if self.dictionaries.is_empty() {
            BATCH_DICTIONARIES.iter().map(|name| (*name).to_string()).collect()
        } else {
            self.dictionaries.clone()
        }
    }

    /// Marker ids to generate, falling back to the batch preset.
    pub fn marker_ids(&self) -> Vec<u32> {
        if self.marker_ids.is_empty() {
            BATCH_MARKER_IDS.to_vec()
        } else {
            self.marker_ids.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definitions_are_consistent() {
        GenerateArgs::command().debug_assert();
        BatchArgs::command().debug_assert();
    }

    #[test]
    fn test_generate_snake_case_flags() {
        let args = GenerateArgs::try_parse_from([
            "generate-aruco",
            "--box_side",
            "90",
            "--marker_groove_depth",
            "0.8",
            "--aruco_dictionary",
            "DICT_4X4_50",
            "--marker_id",
            "3",
            "-o",
            "out/box",
        ])
        .unwrap();
        assert_eq!(args.box_side, Some(90.0));
        assert_eq!(args.marker_groove_depth, Some(0.8));
        assert_eq!(args.aruco_dictionary.as_deref(), Some("DICT_4X4_50"));
        assert_eq!(args.marker_id, Some(3));
        assert_eq!(args.output, PathBuf::from("out/box"));
        assert_eq!(args.box_thickness, None);
    }

    #[test]
    fn test_generate_defaults() {
        let args = GenerateArgs::try_parse_from(["generate-aruco", "-vv"]).unwrap();
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT_STEM));
        assert_eq!(args.default_id, None);
        assert!(!args.binary);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_generate_accepts_default_id_zero() {
        let args = GenerateArgs::try_parse_from(["generate-aruco", "--default_id", "0"]).unwrap();
        assert_eq!(args.default_id, Some(0));
    }

    #[test]
    fn test_batch_defaults_and_overrides() {
        let args = BatchArgs::try_parse_from(["generate-roboasset-arucos"]).unwrap();
        assert_eq!(args.dictionaries(), vec!["DICT_4X4_50", "DICT_APRILTAG_36h11"]);
        assert_eq!(args.marker_ids(), vec![1, 3]);
        assert_eq!(args.output_dir, PathBuf::from(BATCH_OUTPUT_DIR));

        let args = BatchArgs::try_parse_from([
            "generate-roboasset-arucos",
            "--dictionary",
            "DICT_5X5_50",
            "--marker_id",
            "7",
            "--marker_id",
            "8",
            "--dry_run",
        ])
        .unwrap();
        assert_eq!(args.dictionaries(), vec!["DICT_5X5_50"]);
        assert_eq!(args.marker_ids(), vec![7, 8]);
        assert!(args.dry_run);
    }
}
