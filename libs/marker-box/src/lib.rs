//! # Marker Box
//!
//! Parametric 3D-printable boxes carrying an ArUco or AprilTag marker.
//!
//! The marker sits in a recessed relief on the top face: white cells stand
//! `groove_depth` above the marker plane, black cells are cut down to it.
//! The bottom face carries optional magnet insets and the engraved marker id
//! and dictionary name.
//!
//! ## Example
//!
//! ```rust,no_run
//! use aruco_dict::generate_occupancy_grid;
//! use config::constants::BATCH_PRESET;
//! use marker_box::{BoxParams, MarkerBox};
//! use marker_mesh::{save_stl, StlFormat};
//!
//! let grid = generate_occupancy_grid("DICT_APRILTAG_36h11", 1)?;
//! let marker = MarkerBox::new("DICT_APRILTAG_36h11", 1, grid, BoxParams::from(BATCH_PRESET))?;
//! save_stl(&marker.to_mesh()?, "tag_1.stl", StlFormat::Ascii)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod builder;
pub mod error;
pub mod layout;
pub mod params;

pub use batch::{generate_commands, roboasset_command, run_batch, BatchSummary, GeneratorCommand};
pub use builder::MarkerBox;
pub use error::{BoxError, BoxResult, ParamsError};
pub use layout::CellLayout;
pub use params::BoxParams;
