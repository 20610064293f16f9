//! Classic stack-shape features of a settled board

use blockfall_core::board::{HEIGHT, WIDTH};
use blockfall_core::Board;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardFeatures {
    pub max_height: u32,
    pub aggregate_height: u32,
    /// Empty cells with a filled cell somewhere above them in the same column
    pub holes: u32,
    /// Sum of height differences between neighbouring columns
    pub bumpiness: u32,
}

/// Compute features over the full board, hidden rows included.
/// O(width * height), no allocations.
pub fn board_features(board: &Board) -> BoardFeatures {
    let heights = column_heights(board);

    let max_height = heights.iter().copied().max().unwrap_or(0);
    let aggregate_height = heights.iter().sum();
    let bumpiness = heights
        .windows(2)
        .map(|pair| pair[0].abs_diff(pair[1]))
        .sum();

    BoardFeatures {
        max_height,
        aggregate_height,
        holes: count_holes(board, &heights),
        bumpiness,
    }
}

/// Height of each column, measured from the floor
pub fn column_heights(board: &Board) -> [u32; WIDTH] {
    let mut heights = [0u32; WIDTH];
    for (x, h) in heights.iter_mut().enumerate() {
        if let Some(top) = (0..HEIGHT).find(|&y| board.is_cell_occupied(x as i8, y as i8)) {
            *h = (HEIGHT - top) as u32;
        }
    }
    heights
}

fn count_holes(board: &Board, heights: &[u32; WIDTH]) -> u32 {
    let mut holes = 0;
    for (x, &h) in heights.iter().enumerate() {
        let top = HEIGHT - h as usize;
        holes += (top..HEIGHT)
            .filter(|&y| board.is_free(x as i8, y as i8))
            .count() as u32;
    }
    holes
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::PieceKind;

    #[test]
    fn empty_board_is_flat() {
        assert_eq!(board_features(&Board::new()), BoardFeatures::default());
    }

    #[test]
    fn heights_holes_and_bumpiness() {
        let mut board = Board::new();
        // Column 0: block at row 19 over a gap at rows 20-21.
        board.set(0, 19, Some(PieceKind::T)).unwrap();
        // Column 1: solid two high.
        board.set(1, 20, Some(PieceKind::O)).unwrap();
        board.set(1, 21, Some(PieceKind::O)).unwrap();

        let heights = column_heights(&board);
        assert_eq!(heights[0], 3);
        assert_eq!(heights[1], 2);
        assert_eq!(heights[2], 0);

        let f = board_features(&board);
        assert_eq!(f.max_height, 3);
        assert_eq!(f.aggregate_height, 5);
        assert_eq!(f.holes, 2);
        assert_eq!(f.bumpiness, 1 + 2);
    }
}
