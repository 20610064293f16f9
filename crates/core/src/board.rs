//! Board module - the settled-block grid
//!
//! The board is a 10x22 grid of cells stored as a flat, row-major array.
//! Coordinates are (x, y) with x growing to the right and y growing downwards.
//! Rows 0-1 are the hidden spawn buffer: never rendered, but solid for
//! collision like any other row. Everything outside the grid counts as
//! occupied, which gives pieces a solid floor and walls.

use arrayvec::ArrayVec;

use crate::error::{BoardError, Result};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};

/// Board width as usize
pub const WIDTH: usize = BOARD_WIDTH as usize;

/// Board height (hidden rows included) as usize
pub const HEIGHT: usize = BOARD_HEIGHT as usize;

const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row-major grid of cells, the shape handed to views
pub type CellGrid = [[Cell; WIDTH]; HEIGHT];

/// Row-major grid of color codes (0 = empty, 1-7 = piece colors)
pub type CodeGrid = [[u8; WIDTH]; HEIGHT];

/// Indices of rows removed by one clear, bottom row first
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The playfield. Cloning yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    pub fn in_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_some()
    }

    /// Read a cell. Out-of-range coordinates are a caller bug.
    pub fn get(&self, x: i8, y: i8) -> std::result::Result<Cell, BoardError> {
        Self::index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(BoardError::CellOutOfRange { x, y })
    }

    /// Write a cell. Out-of-range coordinates are a caller bug.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> std::result::Result<(), BoardError> {
        let idx = Self::index(x, y).ok_or(BoardError::CellOutOfRange { x, y })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// True if the cell is filled or lies outside the board
    pub fn is_cell_occupied(&self, x: i8, y: i8) -> bool {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx].is_some(),
            None => true,
        }
    }

    /// True if the cell is inside the board and empty
    #[inline]
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        !self.is_cell_occupied(x, y)
    }

    /// Borrow one row
    pub fn row(&self, y: usize) -> std::result::Result<&[Cell], BoardError> {
        if y >= HEIGHT {
            return Err(BoardError::RowOutOfRange(y));
        }
        let start = y * WIDTH;
        Ok(&self.cells[start..start + WIDTH])
    }

    /// Check if a row is completely filled. Rows outside the board are never full.
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Remove row `y`, shift every row above it down by one and insert an
    /// empty row at the top.
    pub fn clear_row(&mut self, y: usize) -> std::result::Result<(), BoardError> {
        if y >= HEIGHT {
            return Err(BoardError::RowOutOfRange(y));
        }

        for row in (1..=y).rev() {
            let src = (row - 1) * WIDTH;
            self.cells.copy_within(src..src + WIDTH, row * WIDTH);
        }
        self.cells[..WIDTH].fill(None);

        Ok(())
    }

    /// Remove every full row at once and return their indices, bottom row first.
    ///
    /// Surviving rows keep their relative order and drop by the number of
    /// removed rows beneath them; empty rows refill the top. Single pass, no
    /// allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * WIDTH;
                    self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
                }
            }
        }

        self.cells[..write_y * WIDTH].fill(None);

        cleared
    }

    /// Write a piece's cells into the board.
    ///
    /// `shape` holds offsets from the bounding-box origin (x, y). Nothing is
    /// written and `false` is returned if any target cell is occupied or out
    /// of bounds.
    pub fn lock_piece(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) -> bool {
        if !shape.iter().all(|&(dx, dy)| self.is_free(x + dx, y + dy)) {
            return false;
        }

        for &(dx, dy) in shape {
            if let Some(idx) = Self::index(x + dx, y + dy) {
                self.cells[idx] = Some(kind);
            }
        }

        true
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// True if any block sits in the hidden rows
    pub fn hidden_rows_occupied(&self) -> bool {
        self.cells[..HIDDEN_ROWS as usize * WIDTH]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the cells into a 2D grid
    pub fn write_cell_grid(&self, out: &mut CellGrid) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * WIDTH..(y + 1) * WIDTH]);
        }
    }

    /// Copy the cells into a 2D grid of color codes
    pub fn write_u8_grid(&self, out: &mut CodeGrid) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, code) in row.iter_mut().enumerate() {
                *code = self.cells[y * WIDTH + x].map_or(0, PieceKind::color_code);
            }
        }
    }

    /// Build a board from a grid of color codes (0 = empty)
    pub fn from_color_codes(grid: &CodeGrid) -> Result<Self> {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                if code != 0 {
                    board.cells[y * WIDTH + x] = Some(PieceKind::from_color_code(code)?);
                }
            }
        }
        Ok(board)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
