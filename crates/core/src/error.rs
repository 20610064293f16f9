//! Error types for the engine core
//!
//! Only programming errors live here. A move that the collision check rejects
//! is a normal outcome and is reported through the returned snapshot instead.

use thiserror::Error;

pub use crate::types::CatalogError;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Out-of-range board access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({x}, {y}) is outside the board")]
    CellOutOfRange { x: i8, y: i8 },

    #[error("row {0} is outside the board")]
    RowOutOfRange(usize),
}

/// Any core failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
