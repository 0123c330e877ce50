//! Terminal Tetris runner.
//!
//! Owns the terminal for the session: raw mode in, one simulation tick and
//! one frame every 40ms, and the terminal restored on the way out however
//! the run ends.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use termtris::audio;
use termtris::core::{Game, TickEvent};
use termtris::input::{self, Input};
use termtris::score::ScoreLog;
use termtris::term::{game_view, Renderer};
use termtris::types::{Command, GAME_OVER_HOLD_MS, TICK_MS};

fn main() -> Result<()> {
    let scores = ScoreLog::new();
    let high_score = scores.high_score();

    audio::spawn_music();

    let mut term = Renderer::new();
    term.enter()?;

    let result = run(&mut term, &scores, high_score);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut Renderer, scores: &ScoreLog, high_score: u64) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);
    let mut game = Game::new(seed, high_score);
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        let tick_start = Instant::now();

        // At most one buffered input acts per tick
        let mut cmd = None;
        match input::poll_input()? {
            Some(Input::Key(Command::Quit)) => return Ok(()),
            Some(Input::Key(c)) => cmd = Some(c),
            Some(Input::Resized) => term.invalidate(),
            None => {}
        }

        let event = game.tick(cmd);
        term.draw(game_view::render(&game))?;

        if event == TickEvent::GameOver {
            scores.append(game.score)?;
            input::wait_for_key(Duration::from_millis(GAME_OVER_HOLD_MS))?;
            return Ok(());
        }

        if let Some(remaining) = tick_duration.checked_sub(tick_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
