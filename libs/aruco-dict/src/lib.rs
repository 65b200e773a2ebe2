//! # ArUco Dictionaries
//!
//! Predefined ArUco/AprilTag dictionaries and the black/white occupancy
//! grids of their markers.
//!
//! ## Architecture
//!
//! ```text
//! name ──parse──▶ PredefinedDictionary ──▶ Dictionary (codes) ──id──▶ OccupancyGrid
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use aruco_dict::generate_occupancy_grid;
//!
//! let grid = generate_occupancy_grid("DICT_4X4_50", 7).unwrap();
//! assert_eq!(grid.size(), 6);
//! print!("{}", grid.to_ascii_art());
//! ```

mod codes;
pub mod dictionary;
pub mod error;
pub mod grid;
mod original;
pub mod predefined;

pub use dictionary::{generate_occupancy_grid, Dictionary};
pub use error::{DictionaryError, DictionaryResult};
pub use grid::{OccupancyGrid, BLACK, WHITE};
pub use predefined::PredefinedDictionary;
