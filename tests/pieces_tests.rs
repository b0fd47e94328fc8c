//! Piece model tests - shape geometry, translation, pivot rotation

use blockfall::core::Piece;
use blockfall::types::{Rgb, ShapeKind};

#[test]
fn test_spawn_cells_match_fixed_geometry() {
    let cases = [
        (ShapeKind::T, [(0, 4), (1, 3), (1, 4), (1, 5)]),
        (ShapeKind::L, [(0, 4), (1, 4), (2, 4), (2, 5)]),
        (ShapeKind::LMirror, [(0, 5), (1, 5), (2, 4), (2, 5)]),
        (ShapeKind::Skew, [(0, 4), (0, 5), (1, 5), (1, 6)]),
        (ShapeKind::SkewMirror, [(0, 5), (0, 6), (1, 4), (1, 5)]),
        (ShapeKind::Square, [(0, 4), (0, 5), (1, 4), (1, 5)]),
        (ShapeKind::Straight, [(0, 3), (0, 4), (0, 5), (0, 6)]),
    ];

    for (kind, expected) in cases {
        let piece = Piece::new(kind);
        assert_eq!(piece.cells(), &expected, "{:?} spawn cells", kind);
    }
}

#[test]
fn test_spawn_colors() {
    let cases = [
        (ShapeKind::T, Rgb::new(204, 51, 255)),
        (ShapeKind::L, Rgb::new(255, 153, 0)),
        (ShapeKind::LMirror, Rgb::new(0, 102, 255)),
        (ShapeKind::Skew, Rgb::new(0, 204, 102)),
        (ShapeKind::SkewMirror, Rgb::new(255, 51, 51)),
        (ShapeKind::Square, Rgb::new(255, 255, 0)),
        (ShapeKind::Straight, Rgb::new(0, 255, 255)),
    ];

    for (kind, expected) in cases {
        assert_eq!(Piece::new(kind).color(), expected, "{:?} color", kind);
    }
}

#[test]
fn test_translate_round_trip() {
    for kind in ShapeKind::ALL {
        let original = Piece::new(kind);
        let mut piece = original;
        piece.translate(3, -2);
        assert_ne!(piece.cells(), original.cells());
        piece.translate(-3, 2);
        assert_eq!(piece.cells(), original.cells(), "{:?} round trip", kind);
    }
}

#[test]
fn test_translate_has_no_bounds_checking() {
    let mut piece = Piece::new(ShapeKind::Square);
    piece.translate(-5, -10);
    // The piece model happily produces off-grid coordinates; validation is
    // the board engine's job.
    assert_eq!(piece.cells()[0], (-5, -6));
}

#[test]
fn test_rotation_is_a_four_cycle() {
    for kind in ShapeKind::ALL {
        if kind == ShapeKind::Square {
            continue;
        }
        let original = Piece::new(kind);
        let mut piece = original;
        for _ in 0..4 {
            piece.rotate();
        }
        assert_eq!(piece, original, "{:?} four rotations", kind);
    }
}

#[test]
fn test_square_is_invariant_under_rotation() {
    let original = Piece::new(ShapeKind::Square);
    let mut piece = original;
    piece.rotate();
    assert_eq!(piece, original);
}

#[test]
fn test_t_rotation_about_its_pivot() {
    // T spawns at (0,4),(1,3),(1,4),(1,5) and rotates about (1,4).
    // Relative vectors map (dr, dc) -> (dc, -dr):
    //   (0,4): (-1, 0) -> (0, 1)  -> (1,5)
    //   (1,3): ( 0,-1) -> (-1, 0) -> (0,4)
    //   (1,4): pivot, unchanged   -> (1,4)
    //   (1,5): ( 0, 1) -> (1, 0)  -> (2,4)
    let mut piece = Piece::new(ShapeKind::T);
    piece.rotate();
    assert_eq!(piece.cells(), &[(1, 5), (0, 4), (1, 4), (2, 4)]);
}

#[test]
fn test_rotation_after_translation_uses_moved_pivot() {
    let mut piece = Piece::new(ShapeKind::T);
    piece.translate(5, 2);
    let mut reference = Piece::new(ShapeKind::T);
    reference.rotate();
    reference.translate(5, 2);

    piece.rotate();
    // Rotation commutes with translation: the pivot travels with the piece.
    assert_eq!(piece.cells(), reference.cells());
}
