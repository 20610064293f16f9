//! Piece catalog - tetromino shapes for every rotation
//!
//! Each shape is four cell offsets inside a 4x4 bounding box whose top-left
//! corner is the piece origin. Rotation is a plain clockwise table step; there
//! is no kick table, so a rotation either fits where the piece is or fails.

use crate::types::{CatalogError, Cell, PieceKind, Rotation, SHAPE_BOX};

/// Offset of a single cell relative to the piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [MinoOffset; 4];

/// A shape rendered into its bounding box, for previews
pub type ShapeGrid = [[Cell; SHAPE_BOX as usize]; SHAPE_BOX as usize];

/// Shape table indexed by `[kind.index()][rotation.index()]`
const SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    // J
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ],
    // L
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
    // O
    [
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // T
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ],
];

/// Get the cell offsets for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// Index-coded lookup (color code 1-7, rotation 0-3)
pub fn shape_by_code(color_code: u8, rotation_index: u8) -> Result<PieceShape, CatalogError> {
    let kind = PieceKind::from_color_code(color_code)?;
    let rotation = Rotation::from_index(rotation_index)?;
    Ok(get_shape(kind, rotation))
}

/// Shapes that look the same in every orientation (only O)
pub fn is_rotation_invariant(kind: PieceKind) -> bool {
    matches!(kind, PieceKind::O)
}

/// Number of distinct orientations a kind has
pub fn rotation_states(kind: PieceKind) -> usize {
    if is_rotation_invariant(kind) {
        1
    } else {
        4
    }
}

/// Render a shape into its 4x4 bounding box
pub fn shape_grid(kind: PieceKind, rotation: Rotation) -> ShapeGrid {
    let mut grid: ShapeGrid = [[None; SHAPE_BOX as usize]; SHAPE_BOX as usize];
    for (dx, dy) in get_shape(kind, rotation) {
        grid[dy as usize][dx as usize] = Some(kind);
    }
    grid
}

/// Leftmost and rightmost column offsets used by a shape
pub fn column_span(shape: &PieceShape) -> (i8, i8) {
    shape
        .iter()
        .fold((i8::MAX, i8::MIN), |(lo, hi), &(dx, _)| (lo.min(dx), hi.max(dx)))
}
