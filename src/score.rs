//! Persistent score records
//!
//! Every finished run appends one line to a plain text file:
//!
//! ```text
//! [14:59:10] alice => 1260
//! ```
//!
//! On startup the whole file is scanned for the best previous score. Lines
//! that do not match the record shape are skipped rather than failing the
//! launch; the file is also a human-readable history and people edit it.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use chrono::Local;

use crate::types::SCORES_FILE;

/// Handle to the score records file
#[derive(Debug, Clone)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    /// The default records file in the working directory
    pub fn new() -> Self {
        Self::at(SCORES_FILE)
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Best score recorded so far. A missing or unreadable file counts as
    /// no records; startup never fails over the history file.
    pub fn high_score(&self) -> u64 {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return 0;
        };
        text.lines().filter_map(parse_record_score).max().unwrap_or(0)
    }

    /// Append one record for a finished run
    pub fn append(&self, score: u64) -> Result<()> {
        let stamp = Local::now().format("%H:%M:%S");
        let line = format!("[{stamp}] {} => {score}\n", username());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("appending to {}", self.path.display()))?;
        Ok(())
    }
}

impl Default for ScoreLog {
    fn default() -> Self {
        Self::new()
    }
}

/// The score from one record line, or `None` if the line is not a record
fn parse_record_score(line: &str) -> Option<u64> {
    let (_, tail) = line.rsplit_once(" => ")?;
    tail.trim().parse().ok()
}

fn username() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "player".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_score_accepts_record_lines() {
        assert_eq!(parse_record_score("[14:59:10] alice => 1260"), Some(1260));
        assert_eq!(parse_record_score("[09:00:00] bob => 0"), Some(0));
        // Usernames may contain the arrow; the last one wins
        assert_eq!(parse_record_score("[09:00:00] a => b => 7"), Some(7));
    }

    #[test]
    fn test_parse_record_score_rejects_malformed_lines() {
        assert_eq!(parse_record_score(""), None);
        assert_eq!(parse_record_score("not a record"), None);
        assert_eq!(parse_record_score("[14:59:10] alice => lots"), None);
        assert_eq!(parse_record_score("[14:59:10] alice"), None);
    }

    #[test]
    fn test_username_is_never_empty() {
        assert!(!username().is_empty());
    }
}
