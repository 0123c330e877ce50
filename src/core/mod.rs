//! Core module - pure game rules with no I/O
//!
//! Board, pieces, collision, scoring, and the per-tick state machine live
//! here. Nothing in this module touches the terminal, the filesystem, or
//! the audio device.

pub mod board;
pub mod collision;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use collision::collides;
pub use game::{ActivePiece, Game, TickEvent};
pub use pieces::{spawn_mask, Mask};
pub use rng::SimpleRng;
