//! # Block Text
//!
//! A 5x7 bitmap font turned into axis-aligned rectangles, ready to be
//! extruded into engraving cutters.
//!
//! ## Layout
//!
//! ```text
//! ##### .####   each glyph is 5 pixels wide and 7 tall,
//! ..#.. #....   followed by one pixel of spacing;
//! ..#.. #....   pixels are square and the cap height
//! ..#.. .###.   spans the 7 rows
//! ```

use glam::DVec2;

use crate::error::{MeshError, MeshResult};

/// Glyph width in pixels.
pub const GLYPH_WIDTH: usize = 5;

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: usize = 7;

/// Horizontal advance per character in pixels.
const ADVANCE: usize = GLYPH_WIDTH + 1;

// =============================================================================
// FONT
// =============================================================================

/// The built-in block font.
///
/// Covers `0-9`, `A-Z`, `h`, `_`, `-`, `.` and space. Other lower-case
/// letters are drawn with their upper-case glyph.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockFont;

impl BlockFont {
    /// Rows of the glyph for `c`, top first; bit 4 is the leftmost pixel.
    pub fn glyph(self, c: char) -> Option<[u8; GLYPH_HEIGHT]> {
        let rows = match c {
            '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
            '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
            '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
            '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
            '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
            '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
            '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
            '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
            '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
            '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
            'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
            'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
            'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
            'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
            'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
            'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
            'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
            'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
            'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
            'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
            'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
            'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
            'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
            'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
            'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
            'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
            'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
            'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
            'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
            'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
            'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
            'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
            'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
            'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
            'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
            'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
            'h' => [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11],
            '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
            '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
            '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
            ' ' => [0x00; GLYPH_HEIGHT],
            c if c.is_ascii_lowercase() => return self.glyph(c.to_ascii_uppercase()),
            _ => return None,
        };
        Some(rows)
    }

    /// Lay out `text` as pixel rectangles centred on the origin.
    ///
    /// Horizontally adjacent pixels of a glyph row are merged into one
    /// rectangle.
    ///
    /// ## Parameters
    ///
    /// - `text`: characters to draw, all covered by the font
    /// - `cap_height`: height of the glyphs in mm
    ///
    /// ## Example
    ///
    /// ```rust
    /// use marker_mesh::BlockFont;
    ///
    /// let layout = BlockFont.layout_text("-", 7.0).unwrap();
    /// assert_eq!(layout.rects.len(), 1);
    /// assert_eq!(layout.size.x, 5.0);
    /// ```
    pub fn layout_text(self, text: &str, cap_height: f64) -> MeshResult<TextLayout> {
        let glyphs = text
            .chars()
            .map(|c| self.glyph(c).ok_or(MeshError::UnsupportedGlyph(c)))
            .collect::<MeshResult<Vec<_>>>()?;

        let pixel = cap_height / GLYPH_HEIGHT as f64;
        let width_px = (glyphs.len() * ADVANCE).saturating_sub(1);
        let size = DVec2::new(width_px as f64 * pixel, cap_height);
        let origin = -size / 2.0;

        let mut rects = Vec::new();
        for (index, rows) in glyphs.iter().enumerate() {
            let left = index * ADVANCE;
            for (row, bits) in rows.iter().enumerate() {
                let y0 = (GLYPH_HEIGHT - 1 - row) as f64 * pixel;
                for (start, end) in row_runs(*bits) {
                    rects.push(Rect {
                        min: origin + DVec2::new((left + start) as f64 * pixel, y0),
                        max: origin + DVec2::new((left + end) as f64 * pixel, y0 + pixel),
                    });
                }
            }
        }
        Ok(TextLayout { rects, size })
    }
}

/// Convenience wrapper for [`BlockFont::layout_text`].
pub fn layout_text(text: &str, cap_height: f64) -> MeshResult<TextLayout> {
    BlockFont.layout_text(text, cap_height)
}

/// Half-open pixel column ranges of the set bits in a glyph row.
fn row_runs(bits: u8) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;
    for col in 0..=GLYPH_WIDTH {
        let set = col < GLYPH_WIDTH && (bits >> (GLYPH_WIDTH - 1 - col)) & 1 != 0;
        match (set, start) {
            (true, None) => start = Some(col),
            (false, Some(s)) => {
                runs.push((s, col));
                start = None;
            }
            _ => {}
        }
    }
    runs
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Lower-left corner.
    pub min: DVec2,
    /// Upper-right corner.
    pub max: DVec2,
}

impl Rect {
    /// Corners in counter-clockwise order.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }
}

/// Laid-out text: rectangles centred on the origin plus the overall size.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    /// Filled pixel runs.
    pub rects: Vec<Rect>,
    /// Width and height of the text block.
    pub size: DVec2,
}

impl TextLayout {
    /// Copy scaled about the origin.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            rects: self
                .rects
                .iter()
                .map(|r| Rect {
                    min: r.min * factor,
                    max: r.max * factor,
                })
                .collect(),
            size: self.size * factor,
        }
    }

    /// Copy scaled down, if needed, so the width does not exceed `max_width`.
    #[must_use]
    pub fn fit_width(&self, max_width: f64) -> Self {
        if self.size.x > max_width && self.size.x > 0.0 {
            self.scaled(max_width / self.size.x)
        } else {
            self.clone()
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
