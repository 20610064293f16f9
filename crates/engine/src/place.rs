use thiserror::Error;
use tracing::trace;

use blockfall_core::pieces::{column_span, get_shape, is_rotation_invariant};
use blockfall_core::{GameSnapshot, Session};
use blockfall_types::{Rotation, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("game is not playable")]
    NotPlayable,
    #[error("no active piece")]
    NoActive,
    #[error("could not rotate to target rotation")]
    RotationBlocked,
    #[error("target x would place piece out of bounds")]
    XOutOfBounds,
    #[error("could not move to target x due to collision")]
    XBlocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "not_playable",
            PlaceError::NoActive => "no_active",
            PlaceError::RotationBlocked
            | PlaceError::XOutOfBounds
            | PlaceError::XBlocked => "invalid_place",
        }
    }
}

/// Rotate the active piece to `target_rot`, shift its origin to `target_x`
/// and hard drop it.
///
/// Every step goes through the regular session commands, so the placement
/// is reachable by a player. On error the session is left exactly as it was.
pub fn apply_place(
    session: &mut Session,
    target_x: i8,
    target_rot: Rotation,
) -> Result<GameSnapshot, PlaceError> {
    let saved = session.clone();
    let result = place(session, target_x, target_rot);
    if let Err(err) = result {
        trace!(target_x, ?target_rot, %err, "placement rejected");
        *session = saved;
    }
    result
}

fn place(
    session: &mut Session,
    target_x: i8,
    target_rot: Rotation,
) -> Result<GameSnapshot, PlaceError> {
    if !session.is_running() {
        return Err(PlaceError::NotPlayable);
    }

    let Some(active) = session.active() else {
        return Err(PlaceError::NoActive);
    };

    // O looks the same every way up; any target is already satisfied.
    let target_rot = if is_rotation_invariant(active.kind) {
        active.rotation
    } else {
        target_rot
    };

    let (min_dx, max_dx) = column_span(&get_shape(active.kind, target_rot));
    if target_x + min_dx < 0 || target_x + max_dx >= BOARD_WIDTH as i8 {
        return Err(PlaceError::XOutOfBounds);
    }

    for _ in 0..active.rotation.turns_to(target_rot) {
        let before = session.active();
        session.rotate();
        if session.active() == before {
            return Err(PlaceError::RotationBlocked);
        }
    }

    let Some(active) = session.active() else {
        return Err(PlaceError::NoActive);
    };

    let dx = target_x - active.x;
    for _ in 0..dx.unsigned_abs() {
        let before = session.active();
        if dx > 0 {
            session.move_right();
        } else {
            session.move_left();
        }
        if session.active() == before {
            return Err(PlaceError::XBlocked);
        }
    }

    Ok(session.hard_drop())
}
