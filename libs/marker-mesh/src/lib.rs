//! # Marker Mesh
//!
//! Solid modelling for printable marker boxes.
//!
//! ## Architecture
//!
//! ```text
//! primitives / text ──▶ Solid ──(union, difference)──▶ Solid ──▶ Mesh ──▶ STL
//! ```
//!
//! ## Algorithms
//!
//! - **Boolean operations**: BSP trees (csg.js algorithm) in `f64`
//! - **Triangulation**: fans over convex faces, with vertex welding
//! - **Text**: 5x7 block font, pixel runs extruded as boxes
//!
//! ## Usage
//!
//! ```rust
//! use glam::{DVec2, DVec3};
//! use marker_mesh::{Mesh, Solid};
//!
//! let plate = Solid::cuboid(DVec3::new(-5.0, -5.0, 0.0), DVec3::new(5.0, 5.0, 2.0)).unwrap();
//! let hole = Solid::cylinder(DVec2::ZERO, 2.0, -1.0, 1.0, 16).unwrap();
//! let mesh = Mesh::from_solid(&plate.difference(&hole));
//! assert!(mesh.volume() < 200.0);
//! ```

pub mod csg;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod stl;
pub mod text;

pub use csg::{difference_all, union_all, Solid};
pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use primitives::segments_for_radius;
pub use stl::{save_stl, write_stl_ascii, write_stl_binary, StlFormat};
pub use text::{layout_text, BlockFont, Rect, TextLayout};
