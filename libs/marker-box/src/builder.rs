//! # Marker Box Builder
//!
//! Turns an occupancy grid and box parameters into a printable solid.
//!
//! ## Geometry
//!
//! ```text
//!  z = groove          ┌──┐  ┌──┐  ┌─────┐   white cells stand proud
//!  z = 0               │  └──┘  └──┘     │   black cells are sunk to z = 0
//!                      │                 │
//!  z = -(h - groove)   └──▄▄─────────▄▄──┘   bottom: magnets and text
//! ```
//!
//! The bottom engravings are laid out in the frame of someone looking at
//! the underside, which is the top view mirrored across the x axis.

use std::f64::consts::PI;

use aruco_dict::OccupancyGrid;
use config::constants::{CUTTER_CLEARANCE, DICTIONARY_TEXT_SCALE, ID_TEXT_SCALE};
use glam::{DAffine2, DVec2, DVec3};
use marker_mesh::{difference_all, layout_text, segments_for_radius, Mesh, MeshResult, Solid};
use tracing::{debug, info};

use crate::error::BoxResult;
use crate::layout::CellLayout;
use crate::params::BoxParams;

// =============================================================================
// MARKER BOX
// =============================================================================

/// A marker box ready to be built.
///
/// ## Example
///
/// ```rust
/// use aruco_dict::generate_occupancy_grid;
/// use config::constants::DEFAULT_ID_PRESET;
/// use marker_box::{BoxParams, MarkerBox};
///
/// let grid = generate_occupancy_grid("DICT_4X4_50", 3).unwrap();
/// let marker = MarkerBox::new("DICT_4X4_50", 3, grid, BoxParams::from(DEFAULT_ID_PRESET)).unwrap();
/// let mesh = marker.to_mesh().unwrap();
/// let (min, max) = mesh.bounds().unwrap();
/// assert!((max.x - min.x - 90.0).abs() < 1e-9);
/// assert!((max.z - min.z - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct MarkerBox {
    dictionary: String,
    marker_id: u32,
    grid: OccupancyGrid,
    params: BoxParams,
}

impl MarkerBox {
    /// Box for marker `marker_id` of `dictionary` with occupancy `grid`.
    ///
    /// # Errors
    ///
    /// Returns `BoxError::Params` if the dimensions are invalid.
    pub fn new(dictionary: impl Into<String>, marker_id: u32, grid: OccupancyGrid, params: BoxParams) -> BoxResult<Self> {
        params.validate()?;
        Ok(Self {
            dictionary: dictionary.into(),
            marker_id,
            grid,
            params,
        })
    }

    /// Dictionary name engraved on the bottom.
    pub fn dictionary(&self) -> &str {
        &self.dictionary
    }

    /// Marker id engraved on the bottom.
    pub fn marker_id(&self) -> u32 {
        self.marker_id
    }

    /// Occupancy grid of the marker.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Box dimensions.
    pub fn params(&self) -> &BoxParams {
        &self.params
    }

    /// Build the box solid.
    pub fn build(&self) -> BoxResult<Solid> {
        let p = &self.params;
        let half = p.side / 2.0;
        let base = Solid::cuboid(
            DVec3::new(-half, -half, p.bottom_z()),
            DVec3::new(half, half, p.groove_depth),
        )?;

        let mut tools = self.cell_cutters()?;
        let cells = tools.len();
        tools.extend(self.magnet_cutters()?);
        let magnets = tools.len() - cells;
        tools.extend(self.label_cutters()?);
        debug!(
            cells,
            magnets,
            labels = tools.len() - cells - magnets,
            "collected cutters"
        );

        Ok(difference_all(&base, tools))
    }

    /// Build and triangulate the box.
    pub fn to_mesh(&self) -> BoxResult<Mesh> {
        let mesh = Mesh::from_solid(&self.build()?);
        info!(
            dictionary = %self.dictionary,
            id = self.marker_id,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "built marker box"
        );
        Ok(mesh)
    }

    // =========================================================================
    // CUTTERS
    // =========================================================================

    /// One box per black cell, from the marker plane up through the top.
    ///
    /// Cutters reach `thickness - groove_depth`, and at least
    /// `CUTTER_CLEARANCE` past the top face at `groove_depth`.
    fn cell_cutters(&self) -> BoxResult<Vec<Solid>> {
        let layout = CellLayout::for_box(&self.params, &self.grid);
        let half = DVec2::splat(layout.cell_size() / 2.0);
        let top = (self.params.thickness - self.params.groove_depth).max(self.params.groove_depth + CUTTER_CLEARANCE);
        let cutters = layout
            .black_cells(&self.grid)
            .into_iter()
            .map(|center| Solid::cuboid((center - half).extend(0.0), (center + half).extend(top)))
            .collect::<MeshResult<Vec<_>>>()?;
        Ok(cutters)
    }

    /// Four cylinders at the margin corners, `layer_height` deep.
    fn magnet_cutters(&self) -> BoxResult<Vec<Solid>> {
        let Some(radius) = self.params.magnet_inset_radius else {
            return Ok(Vec::new());
        };
        let d = self.params.magnet_offset();
        let (z0, z1) = self.bottom_cut_range();
        let segments = segments_for_radius(radius);
        let cutters = [(d, d), (-d, -d), (d, -d), (-d, d)]
            .into_iter()
            .map(|(x, y)| Solid::cylinder(DVec2::new(x, y), radius, z0, z1, segments))
            .collect::<MeshResult<Vec<_>>>()?;
        Ok(cutters)
    }

    /// Engraved id and dictionary name on the bottom face.
    fn label_cutters(&self) -> BoxResult<Vec<Solid>> {
        let p = &self.params;
        let d = p.magnet_offset();
        // Underside frame to world frame
        let underside = DAffine2::from_scale(DVec2::new(1.0, -1.0));

        let id_place = underside * DAffine2::from_translation(DVec2::new(0.0, -d));
        let name_place = underside * DAffine2::from_translation(DVec2::new(0.0, d)) * DAffine2::from_angle(PI);

        let mut cutters = self.text_cutters(&self.marker_id.to_string(), ID_TEXT_SCALE * p.margin, id_place)?;
        cutters.extend(self.text_cutters(&self.dictionary, DICTIONARY_TEXT_SCALE * p.margin, name_place)?);
        Ok(cutters)
    }

    fn text_cutters(&self, text: &str, cap_height: f64, place: DAffine2) -> BoxResult<Vec<Solid>> {
        let layout = layout_text(text, cap_height)?.fit_width(self.params.marker_side());
        let (z0, z1) = self.bottom_cut_range();
        let cutters = layout
            .rects
            .iter()
            .map(|rect| {
                let corners = rect.corners().map(|corner| place.transform_point2(corner));
                Solid::prism(&corners, z0, z1)
            })
            .collect::<MeshResult<Vec<_>>>()?;
        Ok(cutters)
    }

    /// Height range of cutters that engrave the bottom face.
    fn bottom_cut_range(&self) -> (f64, f64) {
        let bottom = self.params.bottom_z();
        (bottom - CUTTER_CLEARANCE, bottom + self.params.layer_height)
    }
}

// =============================================================================
// TESTS
// =============================================================================
