//! Line clear resolver
//!
//! Runs once per lock: removes every full row in one pass and prices the
//! result with the scoring table.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::scoring::line_clear_bonus;

/// Outcome of a lock that removed at least one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClearResult {
    pub lines: u32,
    pub bonus: u32,
}

/// Remove full rows and compute the bonus at `level`.
///
/// Returns `None` when no row was full; the board is then untouched.
pub fn resolve(board: &mut Board, level: u32) -> Option<ClearResult> {
    let cleared = board.clear_full_rows();
    if cleared.is_empty() {
        return None;
    }

    let lines = cleared.len() as u32;
    Some(ClearResult {
        lines,
        bonus: line_clear_bonus(lines, level),
    })
}
