//! Code generator for `DICT_ARUCO_ORIGINAL`.
//!
//! The original ArUco markers are 5x5 and carry a 10-bit id. Each row encodes
//! two id bits (most significant pair in the top row) as one of four 5-bit
//! words; a set word bit is a white cell, the leftmost cell being the word's
//! most significant bit.

/// Row words indexed by the two id bits carried by the row.
const ROW_WORDS: [u64; 4] = [0x10, 0x17, 0x09, 0x0e];

const MARKER_SIZE: usize = 5;

/// Number of markers in the original dictionary (10 id bits).
pub(crate) const MARKER_COUNT: usize = 1 << (2 * MARKER_SIZE);

/// Packed code of marker `id` in the crate's row-major, LSB-first layout.
pub(crate) fn original_code(id: u32) -> u64 {
    let mut code = 0u64;
    for row in 0..MARKER_SIZE {
        let pair = (id >> (2 * (MARKER_SIZE - 1 - row))) & 0b11;
        let word = ROW_WORDS[pair as usize];
        for col in 0..MARKER_SIZE {
            if (word >> (MARKER_SIZE - 1 - col)) & 1 != 0 {
                code |= 1 << (row * MARKER_SIZE + col);
            }
        }
    }
    code
}

/// All 1024 codes, indexed by id.
pub(crate) fn original_codes() -> Vec<u64> {
    (0..MARKER_COUNT as u32).map(original_code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_bits(code: u64, row: usize) -> u64 {
        (code >> (row * MARKER_SIZE)) & 0b11111
    }

    #[test]
    fn test_marker_zero_has_only_first_column_white() {
        let code = original_code(0);
        for row in 0..MARKER_SIZE {
            // word 0x10 = 10000 -> only the leftmost cell (bit 0 of the row)
            assert_eq!(row_bits(code, row), 0b00001);
        }
    }

    #[test]
    fn test_top_row_carries_most_significant_pair() {
        // id 0b11_00_00_00_00 selects word 0x0e (01110) for the top row only
        let code = original_code(0b11_0000_0000);
        assert_eq!(row_bits(code, 0), 0b01110);
        assert_eq!(row_bits(code, 4), 0b00001);
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes = original_codes();
        assert_eq!(codes.len(), 1024);
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 1024);
    }
}
