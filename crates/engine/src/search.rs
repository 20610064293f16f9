//! One-piece lookahead placement search
//!
//! Tries every reachable (rotation, x) for the active piece on a scratch copy
//! of the session and scores the settled board with a weighted sum of
//! [`BoardFeatures`] plus the lines the drop cleared.

use blockfall_core::pieces::{column_span, get_shape, rotation_states};
use blockfall_core::Session;
use blockfall_types::{Rotation, BOARD_WIDTH};
use tracing::debug;

use crate::features::board_features;
use crate::place::apply_place;

/// Linear evaluation weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub aggregate_height: f64,
    pub lines: f64,
    pub holes: f64,
    pub bumpiness: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            aggregate_height: -0.510066,
            lines: 0.760666,
            holes: -0.35663,
            bumpiness: -0.184483,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: i8,
    pub rotation: Rotation,
    pub score: f64,
}

/// Origins that keep `rotation` inside the walls
fn x_range(shape_min: i8, shape_max: i8) -> std::ops::RangeInclusive<i8> {
    -shape_min..=(BOARD_WIDTH as i8 - 1 - shape_max)
}

/// Best placement for the active piece, or `None` if nothing can be placed.
///
/// Placements that end the game are taken only when nothing else is legal.
/// Ties keep the first candidate in (rotation, x) order, so the result is
/// deterministic.
pub fn best_placement(session: &Session, weights: &Weights) -> Option<Placement> {
    let active = session.active()?;
    if !session.is_running() {
        return None;
    }

    let mut best: Option<(bool, Placement)> = None;
    for rotation in Rotation::ALL.into_iter().take(rotation_states(active.kind)) {
        let (lo, hi) = column_span(&get_shape(active.kind, rotation));
        for x in x_range(lo, hi) {
            let mut scratch = session.clone();
            let Ok(snap) = apply_place(&mut scratch, x, rotation) else {
                continue;
            };

            let f = board_features(scratch.board());
            let lines = snap.clear.map_or(0, |c| c.lines);
            let score = weights.aggregate_height * f.aggregate_height as f64
                + weights.lines * lines as f64
                + weights.holes * f.holes as f64
                + weights.bumpiness * f.bumpiness as f64;

            let candidate = (!snap.game_over(), Placement { x, rotation, score });
            let better = match best {
                None => true,
                Some((alive, p)) => (candidate.0, score) > (alive, p.score),
            };
            if better {
                best = Some(candidate);
            }
        }
    }

    let (_, placement) = best?;
    debug!(
        kind = ?active.kind,
        x = placement.x,
        rotation = ?placement.rotation,
        score = placement.score,
        "best placement"
    );
    Some(placement)
}
