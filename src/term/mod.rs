//! Terminal module - framebuffer, view, and renderer
//!
//! The view turns game state into a framebuffer without touching the
//! terminal; the renderer owns the terminal and flushes diffed frames.
//! Keeping the two apart makes the whole screen checkable in unit tests.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, FrameBuffer};
pub use renderer::Renderer;
