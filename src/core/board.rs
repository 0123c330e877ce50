//! Board module - the locked-cell grid
//!
//! A row-major grid of boolean occupancy carrying its own dimensions
//! (20 rows x 10 columns by default). Locked cells keep no piece identity.
//! Coordinates are (row, col) with row 0 at the top; accessors are
//! bounds-checked and signed so callers can probe candidate positions
//! without their own range arithmetic.

use arrayvec::ArrayVec;

use crate::core::pieces::Mask;
use crate::types::{BOARD_COLS, BOARD_ROWS};

/// The play field grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat occupancy, row-major (row * cols + col)
    cells: Vec<bool>,
    rows: u8,
    cols: u8,
}

impl Board {
    /// Create an empty board at the default 20x10 size
    pub fn new() -> Self {
        Self::with_size(BOARD_ROWS, BOARD_COLS)
    }

    /// Create an empty board with explicit dimensions
    pub fn with_size(rows: u8, cols: u8) -> Self {
        Self {
            cells: vec![false; rows as usize * cols as usize],
            rows,
            cols,
        }
    }

    /// Calculate flat index from (row, col), None when out of range
    #[inline(always)]
    fn index(&self, row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= self.rows as i8 || col < 0 || col >= self.cols as i8 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Number of rows
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether (row, col) holds a locked cell; out-of-range reads are empty
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        match self.index(row, col) {
            Some(idx) => self.cells[idx],
            None => false,
        }
    }

    /// Set the cell at (row, col); returns false when out of range
    pub fn set(&mut self, row: i8, col: i8, occupied: bool) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Whether every column of a row is occupied
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows as usize {
            return false;
        }
        let start = row * self.cols as usize;
        let end = start + self.cols as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Merge a piece mask into the grid at the given anchor.
    /// The caller has already validated the position through the collision
    /// engine; cells that would land out of range are dropped by `set`.
    pub fn lock(&mut self, mask: &Mask, anchor_row: i8, anchor_col: i8) {
        for (r, c) in mask.cells() {
            self.set(anchor_row + r as i8, anchor_col + c as i8, true);
        }
    }

    /// Scan rows top to bottom and clear every full one: rows above a cleared
    /// row shift down by one (each row copied from the one above it), and the
    /// vacated top row is emptied. Returns the cleared row indices in scan
    /// order; at most four rows can complete from a single lock.
    pub fn clear_full_lines(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let cols = self.cols as usize;

        for row in 0..self.rows as usize {
            if !self.is_row_full(row) {
                continue;
            }
            for r in (1..=row).rev() {
                let src = (r - 1) * cols;
                self.cells.copy_within(src..src + cols, r * cols);
            }
            for cell in &mut self.cells[..cols] {
                *cell = false;
            }
            cleared.push(row);
        }

        cleared
    }

    /// Flat view of the grid, row-major
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Build a board from row vectors for testing
    #[cfg(test)]
    pub fn from_rows(rows_2d: Vec<Vec<bool>>) -> Self {
        let rows = rows_2d.len() as u8;
        let cols = rows_2d.first().map_or(0, |row| row.len()) as u8;
        assert!(rows_2d.iter().all(|row| row.len() == cols as usize));

        Self {
            cells: rows_2d.into_iter().flatten().collect(),
            rows,
            cols,
        }
    }

    /// Convert to row vectors for test assertions
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(19, 9), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(20, 0), None);
    }

    #[test]
    fn test_set_and_read_back() {
        let mut board = Board::new();
        assert!(board.set(0, 0, true));
        assert!(board.set(10, 5, true));
        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(10, 5));
        assert!(!board.is_occupied(10, 6));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut board = Board::new();
        assert!(!board.set(-1, 0, true));
        assert!(!board.set(0, 10, true));
        // Out-of-range reads answer empty rather than panicking
        assert!(!board.is_occupied(-1, 0));
        assert!(!board.is_occupied(20, 0));
    }

    #[test]
    fn test_row_full_detection() {
        let mut board = Board::with_size(4, 3);
        for col in 0..3 {
            board.set(2, col, true);
        }
        assert!(board.is_row_full(2));
        assert!(!board.is_row_full(1));
        board.set(2, 1, false);
        assert!(!board.is_row_full(2));
        // Out-of-range rows are never full
        assert!(!board.is_row_full(4));
    }

    #[test]
    fn test_clear_single_line_shifts_rows_above() {
        let mut board = Board::from_rows(vec![
            vec![true, false, false],
            vec![false, true, false],
            vec![true, true, true],
            vec![false, false, true],
        ]);

        let cleared = board.clear_full_lines();
        assert_eq!(cleared.as_slice(), &[2]);
        assert_eq!(
            board.to_rows(),
            vec![
                vec![false, false, false],
                vec![true, false, false],
                vec![false, true, false],
                vec![false, false, true],
            ]
        );
    }

    #[test]
    fn test_clear_two_stacked_lines() {
        let mut board = Board::from_rows(vec![
            vec![true, false, false],
            vec![false, true, false],
            vec![true, true, true],
            vec![true, true, true],
        ]);

        let cleared = board.clear_full_lines();
        assert_eq!(cleared.as_slice(), &[2, 3]);
        assert_eq!(
            board.to_rows(),
            vec![
                vec![false, false, false],
                vec![false, false, false],
                vec![true, false, false],
                vec![false, true, false],
            ]
        );
    }

    #[test]
    fn test_clear_leaves_rows_below_untouched() {
        let mut board = Board::from_rows(vec![
            vec![false, true, false],
            vec![true, true, true],
            vec![true, false, true],
            vec![false, true, true],
        ]);

        let cleared = board.clear_full_lines();
        assert_eq!(cleared.as_slice(), &[1]);
        assert_eq!(
            board.to_rows(),
            vec![
                vec![false, false, false],
                vec![false, true, false],
                vec![true, false, true],
                vec![false, true, true],
            ]
        );
    }

    #[test]
    fn test_clear_nothing_when_no_full_rows() {
        let mut board = Board::from_rows(vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, true, false],
            vec![false, false, false],
        ]);
        let before = board.clone();

        assert!(board.clear_full_lines().is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_lock_merges_mask_cells() {
        use crate::core::pieces::spawn_mask;
        use crate::types::PieceKind;

        let mut board = Board::new();
        board.lock(&spawn_mask(PieceKind::O), 18, 4);

        assert!(board.is_occupied(18, 4));
        assert!(board.is_occupied(18, 5));
        assert!(board.is_occupied(19, 4));
        assert!(board.is_occupied(19, 5));
        assert_eq!(board.cells().iter().filter(|&&cell| cell).count(), 4);
    }
}
