use serde::{Deserialize, Serialize};

use crate::active::ActivePiece;
use crate::board::{CellGrid, HEIGHT, WIDTH};
use crate::clear::ClearResult;
use crate::pieces::{shape_grid, ShapeGrid};
use crate::types::{Cell, PieceKind, Phase, Rotation, HIDDEN_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub shape: ShapeGrid,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            shape: value.shape_grid(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeGrid,
}

impl From<PieceKind> for NextSnapshot {
    fn from(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_grid(kind, Rotation::North),
        }
    }
}

/// Everything a view needs to redraw, copied out of the session.
///
/// Holds no references into the session; mutating it changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Full board, hidden rows included
    pub board: CellGrid,
    pub active: Option<ActiveSnapshot>,
    /// Row the active piece would land on
    pub ghost_y: Option<i8>,
    pub next: NextSnapshot,
    /// Set only by the command that locked a piece and removed rows
    pub clear: Option<ClearResult>,
    pub phase: Phase,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }

    /// The rows a view should draw (hidden spawn rows skipped)
    pub fn visible_rows(&self) -> &[[Cell; WIDTH]] {
        &self.board[HIDDEN_ROWS as usize..]
    }

    /// Board cell with the active piece drawn on top; `None` outside the board
    pub fn composed_cell(&self, x: i8, y: i8) -> Option<Cell> {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return None;
        }
        let settled = self.board[y as usize][x as usize];
        let Some(active) = self.active else {
            return Some(settled);
        };
        let (dx, dy) = (x - active.x, y - active.y);
        let in_box = (0..active.shape.len() as i8).contains(&dx)
            && (0..active.shape.len() as i8).contains(&dy);
        if in_box {
            if let Some(kind) = active.shape[dy as usize][dx as usize] {
                return Some(Some(kind));
            }
        }
        Some(settled)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; WIDTH]; HEIGHT],
            active: None,
            ghost_y: None,
            next: NextSnapshot::from(PieceKind::I),
            clear: None,
            phase: Phase::Running,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: 0,
            episode_id: 0,
            piece_id: 0,
        }
    }
}
