//! Maps the game state onto the fixed console layout
//!
//! Pure code, no I/O: given a `Game` this produces the complete frame for the
//! renderer to diff. The layout is the classic 23x22 console screen: a
//! double-line border around the 10-wide well on the left and the info pane
//! on the right, amber throughout, with the falling piece in bright yellow.

use crossterm::style::Color;

use crate::core::Game;
use crate::term::fb::FrameBuffer;
use crate::types::{BOARD_COLS, BOARD_ROWS, CONSOLE_COLS, CONSOLE_ROWS, INFO_COLS};

/// Border, locked blocks, and text share the classic amber
const FRAME_FG: Color = Color::DarkYellow;
/// The falling piece is brighter so it reads at a glance
const ACTIVE_FG: Color = Color::Yellow;

/// Column where the info text starts, one cell in from the middle border
const INFO_COL: u16 = BOARD_COLS as u16 + 3;

/// Render a full frame of the game
pub fn render(game: &Game) -> FrameBuffer {
    let mut fb = FrameBuffer::new(CONSOLE_COLS, CONSOLE_ROWS);
    draw_border(&mut fb);
    draw_field(&mut fb, game);
    draw_info(&mut fb, game);
    if game.game_over {
        draw_game_over(&mut fb, game.score);
    }
    fb
}

fn draw_border(fb: &mut FrameBuffer) {
    let field = "═".repeat(BOARD_COLS as usize);
    let info = "═".repeat(INFO_COLS as usize);

    fb.put_str(0, 0, &format!("╔{field}╦{info}╗"), FRAME_FG);
    for y in 1..=BOARD_ROWS as u16 {
        fb.put_char(0, y, '║', FRAME_FG);
        fb.put_char(BOARD_COLS as u16 + 1, y, '║', FRAME_FG);
        fb.put_char(CONSOLE_COLS - 1, y, '║', FRAME_FG);
    }
    fb.put_str(0, CONSOLE_ROWS - 1, &format!("╚{field}╩{info}╝"), FRAME_FG);
}

/// Locked cells, then the falling piece on top. The piece is omitted once
/// the run has ended; the final frame shows only the settled field.
fn draw_field(fb: &mut FrameBuffer, game: &Game) {
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            if game.board.is_occupied(row as i8, col as i8) {
                fb.put_char(col as u16 + 1, row as u16 + 1, '@', FRAME_FG);
            }
        }
    }

    if game.game_over {
        return;
    }
    for (r, c) in game.piece.mask.cells() {
        let row = game.piece.row + r as i8;
        let col = game.piece.col + c as i8;
        if row >= 0 && col >= 0 {
            fb.put_char(col as u16 + 1, row as u16 + 1, '@', ACTIVE_FG);
        }
    }
}

fn draw_info(fb: &mut FrameBuffer, game: &Game) {
    fb.put_str(INFO_COL, 1, "Level:", FRAME_FG);
    fb.put_str(INFO_COL, 2, &game.level.to_string(), FRAME_FG);

    fb.put_str(INFO_COL, 4, "Score:", FRAME_FG);
    fb.put_str(INFO_COL, 5, &game.score.to_string(), FRAME_FG);

    fb.put_str(INFO_COL, 7, "Best:", FRAME_FG);
    fb.put_str(INFO_COL, 8, &game.high_score.to_string(), FRAME_FG);

    fb.put_str(INFO_COL, 13, "Controls:", FRAME_FG);
    fb.put_str(INFO_COL, 14, "    ▲", FRAME_FG);
    fb.put_str(INFO_COL, 15, "  ◄   ►", FRAME_FG);
    fb.put_str(INFO_COL, 16, "    ▼", FRAME_FG);
}

fn draw_game_over(fb: &mut FrameBuffer, score: u64) {
    // Final score padded to seven columns keeps the box rectangular
    let score_line = format!("║ {score:<7}     ║");

    fb.put_str(4, 5, "╔═════════════╗", FRAME_FG);
    fb.put_str(4, 6, "║ GAME        ║", FRAME_FG);
    fb.put_str(4, 7, "║      OVER!  ║", FRAME_FG);
    fb.put_str(4, 8, "║             ║", FRAME_FG);
    fb.put_str(4, 9, &score_line, FRAME_FG);
    fb.put_str(4, 10, "╚═════════════╝", FRAME_FG);
}
