//! Game module - the simulation state and the per-tick state machine
//!
//! One `Game` value owns everything the simulation mutates: board, active
//! piece, score, level, frame counter, high score. The loop in `main` drives
//! it with `tick`, handing it at most one player command per tick; everything
//! else (gravity, locking, line clears, scoring, respawn, game over) follows
//! from that call. No I/O happens here.

use crate::core::board::Board;
use crate::core::collision::collides;
use crate::core::pieces::{spawn_mask, Mask};
use crate::core::rng::SimpleRng;
use crate::core::scoring::{gravity_threshold, level_for_score, line_clear_score, soft_drop_score};
use crate::types::{Command, LEVEL_MIN};

/// The falling piece: its current mask (post-rotation) and top-left anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub mask: Mask,
    pub row: i8,
    pub col: i8,
}

/// What a tick amounted to, for the caller to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The piece is still falling
    None,
    /// The piece came to rest and was merged into the board
    Locked { lines: usize, points: u64 },
    /// A freshly spawned piece collided immediately; the run is over
    GameOver,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    pub piece: ActivePiece,
    pub score: u64,
    pub level: u32,
    /// Ticks since the last forced gravity step
    pub frame: u32,
    /// Max of the persisted best and the current run
    pub high_score: u64,
    pub game_over: bool,
    rng: SimpleRng,
}

impl Game {
    /// Start a new run: empty board, first piece spawned at the origin
    pub fn new(seed: u32, high_score: u64) -> Self {
        let mut rng = SimpleRng::new(seed);
        let piece = ActivePiece {
            mask: spawn_mask(rng.next_piece()),
            row: 0,
            col: 0,
        };
        Self {
            board: Board::new(),
            piece,
            score: 0,
            level: LEVEL_MIN,
            frame: 0,
            high_score,
            game_over: false,
            rng,
        }
    }

    /// Advance the simulation by one tick, applying at most one command.
    ///
    /// Order within the tick matches the classic loop: bump the frame
    /// counter, recompute the level from the score, apply the command, let
    /// gravity advance the piece if the counter reached the threshold, then
    /// test the piece's position. A collision there means the piece has come
    /// to rest (the engine probes one row ahead, so the resting position
    /// itself never overlaps): lock it, clear lines, score, respawn.
    ///
    /// `Command::Quit` is session-level and ignored here.
    pub fn tick(&mut self, cmd: Option<Command>) -> TickEvent {
        if self.game_over {
            return TickEvent::None;
        }

        self.frame += 1;
        self.level = level_for_score(self.score);

        match cmd {
            Some(Command::MoveLeft) => self.try_shift(-1),
            Some(Command::MoveRight) => self.try_shift(1),
            Some(Command::Rotate) => self.try_rotate(),
            Some(Command::SoftDrop) => {
                // The drop advances unconditionally; the collision test below
                // locks the piece if it has reached its resting row. Frame 1
                // (not 0) keeps gravity from also firing this tick.
                self.score = self.score.saturating_add(soft_drop_score(self.level));
                self.frame = 1;
                self.piece.row += 1;
            }
            Some(Command::Quit) | None => {}
        }

        if self.frame >= gravity_threshold(self.level) {
            self.piece.row += 1;
            self.frame = 0;
        }

        let event = if collides(&self.board, &self.piece.mask, self.piece.row, self.piece.col) {
            self.lock_and_respawn()
        } else {
            TickEvent::None
        };

        if self.score > self.high_score {
            self.high_score = self.score;
        }
        event
    }

    /// Move the piece one column sideways if the target position is free
    fn try_shift(&mut self, delta: i8) {
        let candidate = self.piece.col + delta;
        if !collides(&self.board, &self.piece.mask, self.piece.row, candidate) {
            self.piece.col = candidate;
        }
    }

    /// Rotate clockwise in place; the rotation is discarded if the rotated
    /// mask does not fit at the current anchor (no wall kicks)
    fn try_rotate(&mut self) {
        let candidate = self.piece.mask.rotated_cw();
        if !collides(&self.board, &candidate, self.piece.row, self.piece.col) {
            self.piece.mask = candidate;
        }
    }

    fn lock_and_respawn(&mut self) -> TickEvent {
        self.board
            .lock(&self.piece.mask, self.piece.row, self.piece.col);
        let lines = self.board.clear_full_lines().len();
        let points = line_clear_score(lines, self.level);
        self.score = self.score.saturating_add(points);

        self.piece = ActivePiece {
            mask: spawn_mask(self.rng.next_piece()),
            row: 0,
            col: 0,
        };
        if collides(&self.board, &self.piece.mask, self.piece.row, self.piece.col) {
            self.game_over = true;
            return TickEvent::GameOver;
        }

        TickEvent::Locked { lines, points }
    }
}
