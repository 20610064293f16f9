//! Scoring module - line clear bonuses, drop points, level and gravity
//!
//! Policy:
//! - Line clears score `LINE_SCORES[lines] * level` (lines above 4 score as 4).
//! - A user soft drop scores 1 point per row, a hard drop 2 points per row
//!   travelled. Gravity scores nothing.
//! - Level is `lines / 10 + 1`.
//! - Gravity is `400ms - 30ms * (level - 1)`, never below 50ms.

use crate::types::{
    DropSource, BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS,
    LINES_PER_LEVEL, LINE_SCORES, SOFT_DROP_POINTS,
};

/// Bonus for removing `lines` rows in one lock at `level` (1-based)
pub fn line_clear_bonus(lines: u32, level: u32) -> u32 {
    let idx = (lines as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx].saturating_mul(level)
}

/// Points for a single soft drop step
pub fn soft_drop_points(source: DropSource) -> u32 {
    match source {
        DropSource::User => SOFT_DROP_POINTS,
        DropSource::Timer => 0,
    }
}

/// Points for a hard drop that travelled `rows`
pub fn hard_drop_points(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS)
}

/// Level for a running line total (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, in milliseconds
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}
