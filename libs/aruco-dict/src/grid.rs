//! # Occupancy Grid
//!
//! Binary matrix of marker cells: `0` is black, `1` is white. Row 0 is the
//! top of the marker as printed by OpenCV.

use std::fmt::Write as _;

use config::constants::BORDER_CELLS;

/// Value of a black cell.
pub const BLACK: u8 = 0;

/// Value of a white cell.
pub const WHITE: u8 = 1;

// =============================================================================
// OCCUPANCY GRID
// =============================================================================

/// Square black/white grid of a marker, including its border.
///
/// ## Example
///
/// ```rust
/// use aruco_dict::{OccupancyGrid, BLACK};
///
/// // 2x2 marker bits, all white
/// let grid = OccupancyGrid::from_code(0b1111, 2);
/// assert_eq!(grid.size(), 4);
/// assert_eq!(grid.get(0, 0), Some(BLACK));
/// assert_eq!(grid.black_cells().count(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    size: usize,
    cells: Vec<u8>,
}

impl OccupancyGrid {
    /// Expand a packed code into a bordered grid.
    ///
    /// ## Parameters
    ///
    /// - `code`: marker bits, row-major, bit `row * marker_size + col`
    /// - `marker_size`: bits per side (border excluded)
    #[must_use]
    pub fn from_code(code: u64, marker_size: usize) -> Self {
        let size = marker_size + 2 * BORDER_CELLS;
        let mut cells = vec![BLACK; size * size];
        for row in 0..marker_size {
            for col in 0..marker_size {
                let bit = (code >> (row * marker_size + col)) & 1;
                if bit != 0 {
                    cells[(row + BORDER_CELLS) * size + col + BORDER_CELLS] = WHITE;
                }
            }
        }
        Self { size, cells }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at (`row`, `col`); row 0 is the top. `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Iterate the rows of the grid from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size)
    }

    /// Coordinates `(row, col)` of every black cell, row-major.
    pub fn black_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == BLACK)
            .map(move |(index, _)| (index / self.size, index % self.size))
    }

    /// Terminal preview of the marker.
    ///
    /// White cells are drawn as `██`, black cells as two spaces, inside an
    /// extra white frame.
    #[must_use]
    pub fn to_ascii_art(&self) -> String {
        const BLOCK: &str = "\u{2588}\u{2588}";
        let frame = BLOCK.repeat(self.size + 2);
        let mut out = String::with_capacity((self.size + 2) * (self.size + 2) * 8);
        let _ = writeln!(out, "{frame}");
        for row in self.rows() {
            out.push_str(BLOCK);
            for &cell in row {
                out.push_str(if cell == BLACK { "  " } else { BLOCK });
            }
            out.push_str(BLOCK);
            out.push('\n');
        }
        let _ = writeln!(out, "{frame}");
        out
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_places_bits_row_major() {
        // bit 0 -> (0, 0), bit 3 -> (1, 1) for a 2x2 marker
        let grid = OccupancyGrid::from_code(0b1001, 2);
        assert_eq!(grid.get(1, 1), Some(WHITE));
        assert_eq!(grid.get(1, 2), Some(BLACK));
        assert_eq!(grid.get(2, 1), Some(BLACK));
        assert_eq!(grid.get(2, 2), Some(WHITE));
    }

    #[test]
    fn test_border_is_black() {
        let grid = OccupancyGrid::from_code(u64::MAX, 4);
        let last = grid.size() - 1;
        for i in 0..grid.size() {
            assert_eq!(grid.get(0, i), Some(BLACK));
            assert_eq!(grid.get(last, i), Some(BLACK));
            assert_eq!(grid.get(i, 0), Some(BLACK));
            assert_eq!(grid.get(i, last), Some(BLACK));
        }
    }

    #[test]
    fn test_black_cells_row_major() {
        let grid = OccupancyGrid::from_code(0b0111, 2);
        let inner: Vec<_> = grid
            .black_cells()
            .filter(|&(r, c)| (1..3).contains(&r) && (1..3).contains(&c))
            .collect();
        assert_eq!(inner, vec![(2, 2)]);
    }

    #[test]
    fn test_ascii_art_shape() {
        let grid = OccupancyGrid::from_code(0, 4);
        let art = grid.to_ascii_art();
        let lines: Vec<_> = art.lines().collect();
        assert_eq!(lines.len(), 8);
        for line in &lines {
            assert_eq!(line.chars().count(), 16);
        }
        // Fully black marker: only the frame is drawn
        assert_eq!(lines[1].trim_matches('\u{2588}'), " ".repeat(12));
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let grid = OccupancyGrid::from_code(0, 4);
        assert_eq!(grid.get(5, 5), Some(BLACK));
        assert_eq!(grid.get(6, 0), None);
        assert_eq!(grid.get(0, 6), None);
    }
}
