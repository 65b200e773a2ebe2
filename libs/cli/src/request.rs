//! # Generation Requests
//!
//! Combines command-line flags with interactive answers into everything
//! needed to build and save one marker box.
//!
//! ## Resolution Order
//!
//! 1. `--default_id` selects the default-id preset and ignores the
//!    dimension flags
//! 2. `--aruco_dictionary` and `--marker_id` together skip the picker;
//!    otherwise both are asked for
//! 3. The marker grid is looked up, so a bad id fails before any prompt
//! 4. Each missing dimension is prompted for; the magnet inset is flag-only.
//!    Prompted margins stay below half the side, grooves and layers below
//!    the thickness

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use aruco_dict::{Dictionary, OccupancyGrid, PredefinedDictionary};
use config::constants::{DEFAULT_ID_DICTIONARY, DEFAULT_ID_PRESET};
use marker_box::BoxParams;
use marker_mesh::StlFormat;
use tracing::debug;

use crate::args::GenerateArgs;
use crate::error::CliResult;
use crate::output::stl_output_path;
use crate::prompt::Prompter;

/// Everything needed to generate one box.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Dictionary holding the marker codes.
    pub dictionary: Dictionary,
    /// Marker id within the dictionary.
    pub marker_id: u32,
    /// Cells of the marker.
    pub grid: OccupancyGrid,
    /// Box dimensions.
    pub params: BoxParams,
    /// STL file to write.
    pub output: PathBuf,
    /// STL encoding.
    pub format: StlFormat,
}

/// Resolve a request from `args`, prompting for whatever is missing.
///
/// # Errors
///
/// `CliError::Cancelled` when the user quits a prompt, or a dictionary error
/// for unknown names, unreadable dictionary files, out-of-range ids and
/// markers without a code.
pub fn resolve_request<R: BufRead, W: Write>(
    args: &GenerateArgs,
    prompter: &mut Prompter<R, W>,
) -> CliResult<GenerationRequest> {
    let format = if args.binary { StlFormat::Binary } else { StlFormat::Ascii };
    let dictionary_file = args.dictionary_file.as_deref();

    if let Some(marker_id) = args.default_id {
        let kind: PredefinedDictionary = DEFAULT_ID_DICTIONARY.parse()?;
        let dictionary = load_dictionary(kind, dictionary_file)?;
        let grid = dictionary.occupancy_grid(marker_id)?;
        return Ok(GenerationRequest {
            dictionary,
            marker_id,
            grid,
            params: BoxParams::from(DEFAULT_ID_PRESET),
            output: stl_output_path(&args.output, Some(marker_id)),
            format,
        });
    }

    let (dictionary, marker_id) = match (&args.aruco_dictionary, args.marker_id) {
        (Some(name), Some(id)) => (load_dictionary(name.parse()?, dictionary_file)?, id),
        _ => {
            let dictionary = load_dictionary(prompter.pick_dictionary()?, dictionary_file)?;
            let id = prompter.ask_marker_id(dictionary.marker_count())?;
            (dictionary, id)
        }
    };

    let grid = dictionary.occupancy_grid(marker_id)?;

    let side = flag_or_ask(
        prompter,
        args.box_side,
        "Enter the total side length (marker+margin) (mm)",
        POSITIVE,
        |_| true,
    )?;
    let thickness = flag_or_ask(prompter, args.box_thickness, "Enter the marker thickness (mm)", POSITIVE, |_| true)?;
    let margin = flag_or_ask(
        prompter,
        args.marker_margin,
        "Enter the white margin width (mm)",
        "Margin must be positive and less than half the box side",
        |m| m < side / 2.0,
    )?;
    let groove_depth = flag_or_ask(
        prompter,
        args.marker_groove_depth,
        "Enter the groove depth (mm)",
        "Groove depth must be positive and less than the thickness",
        |g| g < thickness,
    )?;
    let layer_height = flag_or_ask(
        prompter,
        args.layer_height,
        "Enter the layer height (mm)",
        "Layer height must be positive and less than the thickness",
        |l| l < thickness,
    )?;

    Ok(GenerationRequest {
        dictionary,
        marker_id,
        grid,
        params: BoxParams {
            side,
            thickness,
            margin,
            groove_depth,
            magnet_inset_radius: args.magnet_inset_radius,
            layer_height,
        },
        output: stl_output_path(&args.output, None),
        format,
    })
}

const POSITIVE: &str = "Invalid number, expected a positive length";

/// The flag value as given, or a prompted length passing `accept`.
///
/// Flag values are checked later by `BoxParams::validate`.
fn flag_or_ask<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    flag: Option<f64>,
    message: &str,
    invalid: &str,
    accept: impl Fn(f64) -> bool,
) -> CliResult<f64> {
    match flag {
        Some(value) => Ok(value),
        None => prompter.ask_length(message, invalid, accept),
    }
}

/// Embedded codes for `kind`, or the codes of an OpenCV dictionary file.
pub fn load_dictionary(kind: PredefinedDictionary, file: Option<&Path>) -> CliResult<Dictionary> {
    let dictionary = match file {
        Some(path) => {
            debug!(path = %path.display(), dictionary = kind.name(), "loading dictionary file");
            Dictionary::from_opencv_json_file(kind, path)?
        }
        None => Dictionary::predefined(kind),
    };
    Ok(dictionary)
}
