//! # Cell Layout
//!
//! Places the cells of an occupancy grid on the marker area.
//!
//! Cells are `cell = marker_side / n` wide and centred on a regular grid
//! offset by half a cell. Grid row 0 is the top of the marker (largest y).

use aruco_dict::OccupancyGrid;
use glam::DVec2;

use crate::params::BoxParams;

/// Grid of cell centres for an `n x n` occupancy grid.
///
/// ## Example
///
/// ```rust
/// use glam::DVec2;
/// use marker_box::CellLayout;
///
/// // 70 mm marker, 7 cells of 10 mm
/// let layout = CellLayout::new(70.0, 7);
/// assert_eq!(layout.cell_size(), 10.0);
/// assert_eq!(layout.cell_center(0, 0), DVec2::new(-30.0, 30.0));
/// assert_eq!(layout.cell_center(6, 6), DVec2::new(30.0, -30.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    grid_size: usize,
    cell: f64,
    offset: f64,
}

impl CellLayout {
    /// Layout of `grid_size` cells across `marker_side` mm.
    pub fn new(marker_side: f64, grid_size: usize) -> Self {
        let cell = marker_side / grid_size.max(1) as f64;
        Self {
            grid_size,
            cell,
            offset: marker_side / 2.0 - cell / 2.0,
        }
    }

    /// Layout for `grid` on a box with `params`.
    pub fn for_box(params: &BoxParams, grid: &OccupancyGrid) -> Self {
        Self::new(params.marker_side(), grid.size())
    }

    /// Side length of one cell.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell
    }

    /// Number of cells per side.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Centre of the cell at (`row`, `col`).
    pub fn cell_center(&self, row: usize, col: usize) -> DVec2 {
        let flipped_row = (self.grid_size - 1 - row) as f64;
        DVec2::new(col as f64 * self.cell - self.offset, flipped_row * self.cell - self.offset)
    }

    /// Centres of every black cell of `grid`, in row-major order.
    pub fn black_cells(&self, grid: &OccupancyGrid) -> Vec<DVec2> {
        grid.black_cells().map(|(row, col)| self.cell_center(row, col)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centres_are_symmetric() {
        let layout = CellLayout::new(70.0, 6);
        let first = layout.cell_center(0, 0);
        let last = layout.cell_center(5, 5);
        assert_relative_eq!(first.x, -last.x, epsilon = 1e-12);
        assert_relative_eq!(first.y, -last.y, epsilon = 1e-12);
        assert_relative_eq!(first.x - layout.cell_size() / 2.0, -35.0, epsilon = 1e-12);
    }

    #[test]
    fn test_black_cells_of_bordered_grid() {
        // All-white 4x4 marker: only the 20 border cells are black
        let grid = OccupancyGrid::from_code(0xFFFF, 4);
        let layout = CellLayout::new(60.0, grid.size());
        let cells = layout.black_cells(&grid);
        assert_eq!(cells.len(), 20);
        assert!(cells.iter().all(|c| c.x.abs().max(c.y.abs()) > 20.0));
    }

    #[test]
    fn test_top_row_has_largest_y() {
        let layout = CellLayout::new(80.0, 8);
        assert!(layout.cell_center(0, 3).y > layout.cell_center(1, 3).y);
        assert_eq!(layout.cell_center(2, 0).x, layout.cell_center(5, 0).x);
    }
}
