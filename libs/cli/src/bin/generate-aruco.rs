//! Generate one marker box STL.
//!
//! ```text
//! generate-aruco --default_id 3
//! generate-aruco --aruco_dictionary DICT_APRILTAG_36h11 --marker_id 1 \
//!     --box_side 90 --box_thickness 2 --marker_margin 10 \
//!     --marker_groove_depth 0.8 --layer_height 0.2 -o tag_1
//! ```

use std::io;

use anyhow::{Context, Result};
use aruco_box::{init_logging, resolve_request, CliError, GenerateArgs, Prompter};
use clap::Parser;
use marker_box::MarkerBox;
use marker_mesh::save_stl;

fn main() -> Result<()> {
    let args = GenerateArgs::parse();
    init_logging(args.verbose);

    let request = {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        match resolve_request(&args, &mut prompter) {
            Ok(request) => request,
            Err(CliError::Cancelled) => {
                println!();
                return Ok(());
            }
            Err(err) => return Err(err).context("cannot determine the marker to generate"),
        }
    };

    println!("Aruco Dictionary: {}", request.dictionary.name());
    println!("ArUco Marker {}: ", request.marker_id);
    print!("{}", request.grid.to_ascii_art());
    if request.params.magnet_inset_radius.is_some() {
        println!("Adding magnet inset");
    }

    let marker = MarkerBox::new(request.dictionary.name(), request.marker_id, request.grid, request.params)?;
    let mesh = marker.to_mesh()?;
    save_stl(&mesh, &request.output, request.format)
        .with_context(|| format!("cannot write {}", request.output.display()))?;

    println!("Saved {}", request.output.display());
    Ok(())
}
