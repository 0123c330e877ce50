//! Renderer: flushes frames to the real terminal
//!
//! Keeps the previously drawn frame and emits only the runs of cells that
//! changed, batching crossterm commands and flushing once per frame. At the
//! 23x22 console size a frame is cheap, but the diff keeps the terminal
//! quiet while the piece falls through an otherwise static screen.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::FrameBuffer;
use crate::types::{CONSOLE_COLS, CONSOLE_ROWS};

pub struct Renderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    /// Switch the terminal into game mode: raw input, alternate screen,
    /// window sized and titled like the classic console, cursor hidden
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(terminal::SetTitle("Tetris"))?;
        self.stdout
            .queue(terminal::SetSize(CONSOLE_COLS, CONSOLE_ROWS))?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Undo `enter`, restoring the caller's terminal
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint every cell.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, diffing against the previous one
    pub fn draw(&mut self, fb: FrameBuffer) -> Result<()> {
        match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                self.diff_redraw(&fb, &prev)?;
            }
            _ => self.full_redraw(&fb)?,
        }
        self.last = Some(fb);
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut fg: Option<Color> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if fg != Some(cell.fg) {
                    self.stdout.queue(SetForegroundColor(cell.fg))?;
                    fg = Some(cell.fg);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut fg: Option<Color> = None;

        for_each_changed_run(prev, next, |x, y, len| {
            // One cursor move per run, then the cells in the run
            self.stdout.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let cell = next.get(x + dx, y).unwrap_or_default();
                if fg != Some(cell.fg) {
                    self.stdout.queue(SetForegroundColor(cell.fg))?;
                    fg = Some(cell.fg);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
            Ok(())
        })?;

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk both frames row by row and hand each horizontal run of changed
/// cells to `f` as `(x, y, len)`. Both frames must have the same size.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
