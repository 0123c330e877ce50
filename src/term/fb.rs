//! Framebuffer for terminal rendering
//!
//! A frame is a grid of colored characters. The view layer fills a fresh one
//! every tick and the renderer diffs it against the previous frame, so only
//! cells that actually changed reach the terminal.

use crossterm::style::Color;

/// One terminal cell: a glyph and its foreground color. Everything draws on
/// the terminal's default background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// 2D grid of cells, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one glyph; coordinates outside the grid are ignored
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, fg: Color) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, fg };
        }
    }

    /// Write a string left to right, truncating at the right edge
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, fg: Color) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, fg);
            cx += 1;
        }
    }
}
