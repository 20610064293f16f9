//! Piece catalog and rotation tests

use blockfall::core::collision::{can_place, try_rotate};
use blockfall::core::pieces::{
    column_span, get_shape, is_rotation_invariant, rotation_states, shape_by_code, shape_grid,
};
use blockfall::core::{ActivePiece, Board};
use blockfall::types::{CatalogError, PieceKind, Rotation, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    let north = get_shape(PieceKind::I, Rotation::North);
    assert_eq!(north, [(0, 1), (1, 1), (2, 1), (3, 1)]);

    let east = get_shape(PieceKind::I, Rotation::East);
    assert_eq!(east, [(2, 0), (2, 1), (2, 2), (2, 3)]);

    let south = get_shape(PieceKind::I, Rotation::South);
    assert_eq!(south, [(0, 2), (1, 2), (2, 2), (3, 2)]);

    let west = get_shape(PieceKind::I, Rotation::West);
    assert_eq!(west, [(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_o_piece_shapes() {
    let north = get_shape(PieceKind::O, Rotation::North);
    assert_eq!(north, [(1, 0), (2, 0), (1, 1), (2, 1)]);
    for rotation in Rotation::ALL {
        assert_eq!(get_shape(PieceKind::O, rotation), north);
    }
    assert!(is_rotation_invariant(PieceKind::O));
    assert_eq!(rotation_states(PieceKind::O), 1);
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(
        get_shape(PieceKind::T, Rotation::North),
        [(1, 0), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        get_shape(PieceKind::T, Rotation::East),
        [(1, 0), (1, 1), (2, 1), (1, 2)]
    );
    assert_eq!(rotation_states(PieceKind::T), 4);
}

#[test]
fn test_every_shape_has_four_distinct_cells_in_the_box() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let shape = get_shape(kind, rotation);
            for (i, &(dx, dy)) in shape.iter().enumerate() {
                assert!((0..4).contains(&dx) && (0..4).contains(&dy), "{kind:?} {rotation:?}");
                assert!(!shape[..i].contains(&(dx, dy)), "{kind:?} {rotation:?} repeats a cell");
            }
        }
    }
}

#[test]
fn test_shape_grid_matches_offsets() {
    let grid = shape_grid(PieceKind::S, Rotation::North);
    let filled = grid.iter().flatten().filter(|c| c.is_some()).count();
    assert_eq!(filled, 4);
    assert_eq!(grid[0][1], Some(PieceKind::S));
    assert_eq!(grid[1][0], Some(PieceKind::S));
    assert_eq!(grid[0][0], None);
}

#[test]
fn test_shape_by_code() {
    assert_eq!(
        shape_by_code(6, 0),
        Ok(get_shape(PieceKind::T, Rotation::North))
    );
    assert_eq!(shape_by_code(0, 0), Err(CatalogError::PieceCode(0)));
    assert_eq!(shape_by_code(1, 4), Err(CatalogError::RotationIndex(4)));
}

#[test]
fn test_column_span() {
    assert_eq!(column_span(&get_shape(PieceKind::I, Rotation::North)), (0, 3));
    assert_eq!(column_span(&get_shape(PieceKind::I, Rotation::East)), (2, 2));
    assert_eq!(column_span(&get_shape(PieceKind::O, Rotation::North)), (1, 2));
}

// ============== Rotation Tests ==============

#[test]
fn test_four_rotations_restore_every_piece() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let start = ActivePiece::spawn(kind).shifted(0, 2);
        let mut piece = start;
        for _ in 0..4 {
            piece = try_rotate(&board, &piece).expect("open board");
        }
        assert_eq!(piece, start, "{kind:?}");
        assert_eq!(piece.cells(), start.cells());
    }
}

#[test]
fn test_rotation_does_not_kick() {
    let board = Board::new();
    // I West against the left wall: North would need column -1, and nothing
    // shifts it back in.
    let piece = ActivePiece {
        kind: PieceKind::I,
        rotation: Rotation::West,
        x: -1,
        y: 4,
    };
    assert!(try_rotate(&board, &piece).is_none());
}

#[test]
fn test_spawn_position() {
    let piece = ActivePiece::spawn(PieceKind::T);
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
    assert_eq!(piece.rotation, Rotation::North);

    let board = Board::new();
    for kind in PieceKind::ALL {
        assert!(can_place(&board, kind, Rotation::North, SPAWN_X, SPAWN_Y));
    }
}

#[test]
fn test_can_place_respects_side_walls() {
    let board = Board::new();
    let (lo, hi) = column_span(&get_shape(PieceKind::L, Rotation::North));
    assert!(can_place(&board, PieceKind::L, Rotation::North, -lo, 5));
    assert!(!can_place(&board, PieceKind::L, Rotation::North, -lo - 1, 5));
    let right = BOARD_WIDTH as i8 - 1 - hi;
    assert!(can_place(&board, PieceKind::L, Rotation::North, right, 5));
    assert!(!can_place(&board, PieceKind::L, Rotation::North, right + 1, 5));
}
