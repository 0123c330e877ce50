//! Scoring and leveling rules
//!
//! Classic single-table scoring: every lock pays `LINE_SCORES[lines] * level`,
//! so placing a piece with no clear still earns a small flat reward (index 0).
//! Level follows the score through a log10 curve, which produces discrete
//! speed-ups as the score crosses powers of ten.

use crate::types::{FRAMES_TO_MOVE, LEVEL_MAX, LEVEL_MIN, LINE_SCORES};

/// Points awarded for locking a piece that cleared `lines` rows (0-4)
pub fn line_clear_score(lines: usize, level: u32) -> u64 {
    let base = LINE_SCORES.get(lines).copied().unwrap_or(0);
    base.saturating_mul(level as u64)
}

/// Points awarded for one soft-drop row
pub fn soft_drop_score(level: u32) -> u64 {
    level as u64
}

/// Level for a score: `floor(log10(score)) - 1`, clamped to [1, 10].
/// A zero score is level 1.
pub fn level_for_score(score: u64) -> u32 {
    if score == 0 {
        return LEVEL_MIN;
    }
    (score.ilog10() as i32 - 1).clamp(LEVEL_MIN as i32, LEVEL_MAX as i32) as u32
}

/// Ticks between forced gravity steps at a level.
/// The level cap keeps this positive (16 - 10 = 6 at the fastest).
pub fn gravity_threshold(level: u32) -> u32 {
    FRAMES_TO_MOVE.saturating_sub(level).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_by_count() {
        assert_eq!(line_clear_score(0, 1), 9);
        assert_eq!(line_clear_score(1, 1), 40);
        assert_eq!(line_clear_score(2, 1), 100);
        assert_eq!(line_clear_score(3, 1), 300);
        assert_eq!(line_clear_score(4, 1), 1200);

        // Level multiplies the table value
        assert_eq!(line_clear_score(0, 5), 45);
        assert_eq!(line_clear_score(4, 10), 12_000);

        // Counts past a tetris score nothing
        assert_eq!(line_clear_score(5, 3), 0);
    }

    #[test]
    fn test_soft_drop_reward_is_level() {
        assert_eq!(soft_drop_score(1), 1);
        assert_eq!(soft_drop_score(10), 10);
    }

    #[test]
    fn test_level_curve_breakpoints() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(9), 1);
        assert_eq!(level_for_score(100), 1);
        assert_eq!(level_for_score(999), 1);
        assert_eq!(level_for_score(1_000), 2);
        assert_eq!(level_for_score(10_000), 3);
        assert_eq!(level_for_score(1_000_000), 5);
        assert_eq!(level_for_score(100_000_000_000), 10);
        assert_eq!(level_for_score(u64::MAX), 10);
    }

    #[test]
    fn test_level_monotonic_in_score() {
        let mut previous = 0;
        for magnitude in 0..16 {
            let level = level_for_score(10u64.pow(magnitude));
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn test_gravity_thresholds() {
        assert_eq!(gravity_threshold(1), 15);
        assert_eq!(gravity_threshold(5), 11);
        assert_eq!(gravity_threshold(10), 6);
        // Stays positive even for an out-of-range level
        assert_eq!(gravity_threshold(100), 1);
    }
}
