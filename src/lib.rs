//! Terminal Tetris on the classic 23x22 console screen.
//!
//! `core` holds the rules and is fully deterministic; `term` turns state
//! into frames and flushes them; `input`, `score`, and `audio` cover the
//! keyboard, the records file, and the music. The binary wires them into a
//! fixed 40ms loop.

pub mod audio;
pub mod core;
pub mod input;
pub mod score;
pub mod term;
pub mod types;
