//! The falling piece

use serde::{Deserialize, Serialize};

use crate::pieces::{get_shape, is_rotation_invariant, shape_grid, PieceShape, ShapeGrid};
use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// Active falling piece: kind, orientation and bounding-box origin on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A fresh piece at rotation 0, centered at the top of the hidden rows
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    pub fn shape_grid(&self) -> ShapeGrid {
        shape_grid(self.kind, self.rotation)
    }

    /// Occupied cells in board coordinates
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Same position, one quarter turn clockwise. O keeps its rotation.
    pub fn rotated_cw(self) -> Self {
        if is_rotation_invariant(self.kind) {
            return self;
        }
        Self {
            rotation: self.rotation.rotate_cw(),
            ..self
        }
    }
}
