//! Collision and placement checks
//!
//! Pure functions over a borrowed board. `can_place` is the single authority:
//! every move, rotation, drop and spawn goes through it. Cells above row 0 are
//! outside the board and therefore illegal; the two hidden rows are the only
//! headroom a piece gets.

use crate::active::ActivePiece;
use crate::board::Board;
use crate::pieces::get_shape;
use crate::types::{PieceKind, Rotation};

/// Whether `kind` at `rotation` with origin (x, y) fits on the board
pub fn can_place(board: &Board, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
    get_shape(kind, rotation)
        .iter()
        .all(|&(dx, dy)| board.is_free(x + dx, y + dy))
}

/// Whether the piece fits where it is
#[inline]
pub fn fits(board: &Board, piece: &ActivePiece) -> bool {
    can_place(board, piece.kind, piece.rotation, piece.x, piece.y)
}

/// The translated piece, if it fits
pub fn try_shift(board: &Board, piece: &ActivePiece, dx: i8, dy: i8) -> Option<ActivePiece> {
    let moved = piece.shifted(dx, dy);
    fits(board, &moved).then_some(moved)
}

/// The piece turned a quarter clockwise in place, if it fits.
///
/// No offsets are tried. For O this returns the piece unchanged.
pub fn try_rotate(board: &Board, piece: &ActivePiece) -> Option<ActivePiece> {
    let turned = piece.rotated_cw();
    fits(board, &turned).then_some(turned)
}

/// True when the next downward step would be rejected, i.e. the piece locks
/// on its next soft drop
pub fn is_grounded(board: &Board, piece: &ActivePiece) -> bool {
    !can_place(board, piece.kind, piece.rotation, piece.x, piece.y + 1)
}

/// Rows the piece can fall before it is grounded
pub fn drop_distance(board: &Board, piece: &ActivePiece) -> i8 {
    let mut distance = 0;
    while can_place(board, piece.kind, piece.rotation, piece.x, piece.y + distance + 1) {
        distance += 1;
    }
    distance
}

/// The largest y at which the piece still fits (hard-drop target, ghost row)
pub fn landing_y(board: &Board, piece: &ActivePiece) -> i8 {
    piece.y + drop_distance(board, piece)
}
