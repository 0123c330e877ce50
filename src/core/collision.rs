//! Collision engine - every placement query in one function
//!
//! `collides` is the single validator behind movement, rotation, gravity,
//! spawn checks, and lock detection. It answers "reject" rather than
//! distinguishing why; callers that need the reason (floor vs. stack) do not
//! exist in this game.

use crate::core::board::Board;
use crate::core::pieces::Mask;

/// Test a candidate placement of `mask` with its top-left anchor at
/// (`anchor_row`, `anchor_col`). Returns true when the placement must be
/// rejected:
///
/// - the mask would cross the left or right board edge (a horizontal-only
///   bound check, independent of vertical position);
/// - the mask's bottom edge has reached the floor (`anchor_row + height >=
///   rows`): the piece may occupy the floor row it is being tested against,
///   but not extend past it;
/// - any filled mask cell lands on a locked cell, or directly above one.
///   The one-row-ahead probe is what detects "resting on the stack" one tick
///   before overlap would occur; the direct test rejects sideways moves and
///   rotations into occupied cells.
///
/// The bound checks run first, so every occupancy read below is in range by
/// construction: the deepest probe row is `anchor_row + height`, which the
/// floor check caps at `rows - 1`.
pub fn collides(board: &Board, mask: &Mask, anchor_row: i8, anchor_col: i8) -> bool {
    if anchor_col < 0 || anchor_col > board.cols() as i8 - mask.width() as i8 {
        return true;
    }
    if anchor_row < 0 || anchor_row + mask.height() as i8 >= board.rows() as i8 {
        return true;
    }

    for (r, c) in mask.cells() {
        let row = anchor_row + r as i8;
        let col = anchor_col + c as i8;
        if board.is_occupied(row, col) || board.is_occupied(row + 1, col) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pieces::spawn_mask;
    use crate::types::PieceKind;

    #[test]
    fn test_open_board_is_collision_free() {
        let board = Board::new();
        let o = spawn_mask(PieceKind::O);
        assert!(!collides(&board, &o, 0, 0));
        assert!(!collides(&board, &o, 10, 4));
    }

    #[test]
    fn test_horizontal_bounds() {
        let board = Board::new();
        let t = spawn_mask(PieceKind::T); // 3 wide

        // cols - width = 7 is the last legal column
        assert!(!collides(&board, &t, 0, 7));
        assert!(collides(&board, &t, 0, 8));
        assert!(collides(&board, &t, 0, -1));
    }

    #[test]
    fn test_floor_bound() {
        let board = Board::new();
        let o = spawn_mask(PieceKind::O); // 2 tall

        // Bottom edge at row 19 is where the floor check fires
        assert!(!collides(&board, &o, 17, 0));
        assert!(collides(&board, &o, 18, 0));
        assert!(collides(&board, &o, 19, 0));
    }

    #[test]
    fn test_floor_bound_after_rotation_grows_height() {
        let board = Board::new();
        let i = spawn_mask(PieceKind::I);
        let upright = i.rotated_cw(); // 4 tall

        // The flat I fits at row 17; rotating there would reach past the floor
        assert!(!collides(&board, &i, 17, 0));
        assert!(collides(&board, &upright, 17, 0));
        assert!(!collides(&board, &upright, 15, 0));
        assert!(collides(&board, &upright, 16, 0));
    }

    #[test]
    fn test_probe_one_row_ahead_of_stack() {
        let mut board = Board::new();
        for col in 0..10 {
            board.set(19, col, true);
        }
        let o = spawn_mask(PieceKind::O);

        // Bottom edge at row 18, with the stack at 19 right below: resting
        assert!(collides(&board, &o, 17, 4));
        assert!(!collides(&board, &o, 16, 4));
    }

    #[test]
    fn test_direct_overlap_rejected() {
        let mut board = Board::new();
        board.set(10, 4, true);
        let o = spawn_mask(PieceKind::O);

        assert!(collides(&board, &o, 10, 4));
        assert!(collides(&board, &o, 10, 3));
    }

    #[test]
    fn test_valid_position_never_self_collides() {
        // A piece standing anywhere legal reports no collision for its own
        // position
        let board = Board::new();
        for kind in PieceKind::ALL {
            let mask = spawn_mask(kind);
            assert!(!collides(&board, &mask, 0, 0), "{:?}", kind);
            assert!(!collides(&board, &mask, 5, 3), "{:?}", kind);
        }
    }
}
