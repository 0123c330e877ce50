//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (play field)
pub const BOARD_ROWS: u8 = 20;
pub const BOARD_COLS: u8 = 10;

/// Width of the info pane to the right of the play field
pub const INFO_COLS: u8 = 10;

/// Full console window: field and info pane side by side, three vertical
/// borders, one horizontal border above and below
pub const CONSOLE_COLS: u16 = BOARD_COLS as u16 + INFO_COLS as u16 + 3;
pub const CONSOLE_ROWS: u16 = BOARD_ROWS as u16 + 2;

/// Game timing: fixed tick period, and the gravity base in ticks.
/// A piece falls one row every `FRAMES_TO_MOVE - level` ticks.
pub const TICK_MS: u64 = 40;
pub const FRAMES_TO_MOVE: u32 = 16;

/// Line clear scoring, indexed by lines cleared in one lock (0-4).
/// Index 0 is the flat reward for locking a piece without a clear.
/// The table value is multiplied by the current level.
pub const LINE_SCORES: [u64; 5] = [9, 40, 100, 300, 1200];

/// Level bounds. The cap keeps the gravity threshold positive.
pub const LEVEL_MIN: u32 = 1;
pub const LEVEL_MAX: u32 = 10;

/// Score records file, one line per finished run
pub const SCORES_FILE: &str = "scores.txt";

/// How long the game-over screen stays up before the process exits
pub const GAME_OVER_HOLD_MS: u64 = 100_000;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Discrete player commands, at most one applied per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Quit,
}
