//! Piece catalog - the seven tetromino masks and the rotation transform
//!
//! Shapes are rectangular boolean masks of varying width and height, in the
//! classic flat-spawn geometry (the I piece spawns as a single 1x4 row).
//! Rotation is the plain clockwise grid transform with no wall kicks; the
//! caller validates the rotated candidate against the board before committing.

use crate::types::PieceKind;

/// Longest mask edge (the I piece is 4 cells long)
pub const MASK_MAX: usize = 4;

/// A rectangular boolean mask with explicit dimensions.
///
/// Stored as a flat row-major array so rotation can swap width and height
/// without allocating. Out-of-range reads answer `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    cells: [bool; MASK_MAX * MASK_MAX],
    height: u8,
    width: u8,
}

impl Mask {
    /// Build a mask from per-row bit patterns, one `u8` per row with the
    /// lowest `width` bits used and the highest of those being column 0.
    /// Rows beyond `MASK_MAX` and widths beyond `MASK_MAX` are truncated.
    fn from_bit_rows(width: u8, bit_rows: &[u8]) -> Self {
        let width = width.min(MASK_MAX as u8);
        let height = bit_rows.len().min(MASK_MAX) as u8;
        let mut cells = [false; MASK_MAX * MASK_MAX];
        for (r, &bits) in bit_rows.iter().take(height as usize).enumerate() {
            for c in 0..width {
                cells[r * MASK_MAX + c as usize] = (bits >> (width - 1 - c)) & 1 == 1;
            }
        }
        Self {
            cells,
            height,
            width,
        }
    }

    /// Mask height in rows
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Mask width in columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Cell at (row, col); out-of-range positions are empty
    pub fn get(&self, row: u8, col: u8) -> bool {
        if row >= self.height || col >= self.width {
            return false;
        }
        self.cells[row as usize * MASK_MAX + col as usize]
    }

    /// Iterate the (row, col) positions of all filled cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.height)
            .flat_map(move |r| (0..self.width).map(move |c| (r, c)))
            .filter(|&(r, c)| self.get(r, c))
    }

    /// The 90-degree clockwise transform: cell (r, c) moves to
    /// (c, height - 1 - r), and width and height swap.
    pub fn rotated_cw(&self) -> Self {
        let mut rotated = Self {
            cells: [false; MASK_MAX * MASK_MAX],
            height: self.width,
            width: self.height,
        };
        for (r, c) in self.cells() {
            let idx = c as usize * MASK_MAX + (self.height - 1 - r) as usize;
            rotated.cells[idx] = true;
        }
        rotated
    }
}

/// Get the spawn mask for a piece kind
pub fn spawn_mask(kind: PieceKind) -> Mask {
    match kind {
        PieceKind::I => Mask::from_bit_rows(4, &[0b1111]),
        PieceKind::O => Mask::from_bit_rows(2, &[0b11, 0b11]),
        PieceKind::T => Mask::from_bit_rows(3, &[0b010, 0b111]),
        PieceKind::S => Mask::from_bit_rows(3, &[0b011, 0b110]),
        PieceKind::Z => Mask::from_bit_rows(3, &[0b110, 0b011]),
        PieceKind::J => Mask::from_bit_rows(3, &[0b100, 0b111]),
        PieceKind::L => Mask::from_bit_rows(3, &[0b001, 0b111]),
    }
}
