//! Shared data types and constants
//!
//! Everything in here is plain data: piece kinds, rotations, commands and the
//! numeric rules of the game. Both the engine core and any view built on top of
//! it speak in these types.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21), of which rows 0-1 are the hidden
//!   spawn buffer and rows 2-21 are the visible playfield
//! - **Spawn position**: (3, 0), the top-left of a 4x4 bounding box
//!
//! # Gravity
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 400ms |
//! | 2 | 370ms |
//! | 5 | 280ms |
//! | 12 | 70ms |
//! | 13+ | 50ms (floor) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, Rotation, BOARD_HEIGHT, VISIBLE_HEIGHT};
//!
//! assert_eq!(PieceKind::from_color_code(6).unwrap(), PieceKind::T);
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Command::from_name("hardDrop"), Some(Command::HardDrop));
//! assert_eq!(BOARD_HEIGHT - VISIBLE_HEIGHT, 2);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Rows shown to the player
pub const VISIBLE_HEIGHT: u8 = 20;

/// Rows above the visible area used as spawn buffer
pub const HIDDEN_ROWS: u8 = 2;

/// Total board height including the hidden rows
pub const BOARD_HEIGHT: u8 = VISIBLE_HEIGHT + HIDDEN_ROWS;

/// Side length of the square bounding box every shape is defined in
pub const SHAPE_BOX: u8 = 4;

/// Bounding-box column a fresh piece spawns at (horizontally centered)
pub const SPAWN_X: i8 = ((BOARD_WIDTH - SHAPE_BOX) / 2) as i8;

/// Bounding-box row a fresh piece spawns at (top of the hidden rows)
pub const SPAWN_Y: i8 = 0;

/// Gravity interval at level 1
pub const BASE_DROP_MS: u32 = 400;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 30;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 50;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear bonus at level 1, indexed by lines removed in a single lock.
///
/// Multiplied by the current level. Clears of more than four rows (only
/// possible on hand-built boards) score as four.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per row for a user soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row travelled by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Lookup failures for index-coded catalog values.
///
/// These only show up when a caller hands in a raw number that does not map
/// to a piece or rotation, which is a bug on the caller side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no piece has color code {0} (expected 1-7)")]
    PieceCode(u8),
    #[error("rotation index {0} is out of range (expected 0-3)")]
    RotationIndex(u8),
}

/// The seven tetromino kinds.
///
/// Declaration order matches the color codes used by views:
/// I=1, J=2, L=3, O=4, S=5, T=6, Z=7 (0 is an empty cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in color-code order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Zero-based catalog index
    pub fn index(self) -> usize {
        self as usize
    }

    /// Color code for views (1-7; 0 is reserved for empty cells)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color_code(), 1);
    /// assert_eq!(PieceKind::Z.color_code(), 7);
    /// ```
    pub fn color_code(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_color_code(code: u8) -> Result<Self, CatalogError> {
        match code {
            1..=7 => Ok(Self::ALL[(code - 1) as usize]),
            _ => Err(CatalogError::PieceCode(code)),
        }
    }

    /// Parse from a single letter (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation states, clockwise from the spawn orientation.
///
/// North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Rotation index (0 = 0°, 1 = 90°, 2 = 180°, 3 = 270°)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: u8) -> Result<Self, CatalogError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(CatalogError::RotationIndex(index))
    }

    /// Clockwise quarter turns needed to get from `self` to `target`
    pub fn turns_to(self, target: Rotation) -> u8 {
        ((target.index() + 4 - self.index()) % 4) as u8
    }
}

/// Where a soft drop came from.
///
/// Only user soft drops score points; timer drops are plain gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DropSource {
    Timer,
    User,
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Inbound commands a view or bot can send to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// User soft drop: one row down, locks if blocked
    SoftDrop,
    /// Timer soft drop (gravity)
    Tick,
    /// Drop to the lowest legal row and lock
    HardDrop,
    Pause,
    Resume,
    /// Reset the session from any state
    Restart,
}

impl Command {
    /// Parse a camelCase command name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_name("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_name("TICK"), Some(Command::Tick));
    /// assert_eq!(Command::from_name("hold"), None);
    /// ```
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "softdrop" | "down" => Some(Command::SoftDrop),
            "tick" => Some(Command::Tick),
            "harddrop" | "drop" => Some(Command::HardDrop),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::SoftDrop => "softDrop",
            Command::Tick => "tick",
            Command::HardDrop => "hardDrop",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::Restart => "restart",
        }
    }
}

/// A board cell: `None` is empty, `Some(kind)` is a settled block of that color
pub type Cell = Option<PieceKind>;
