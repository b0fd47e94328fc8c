//! Pieces module - shape geometry and pivot rotation
//!
//! Each of the seven shape kinds carries a fixed set of 4 spawn cells, a
//! fixed display color, and a pivot: the index of the cell it rotates
//! around. A single rotation routine serves every kind; the Square is
//! rotationally symmetric and never rotates.

use crate::types::{Rgb, ShapeKind};

/// A (row, col) board coordinate.
pub type CellPos = (i8, i8);

/// Spawn cells for a shape kind, as absolute board coordinates.
pub fn spawn_cells(kind: ShapeKind) -> [CellPos; 4] {
    match kind {
        ShapeKind::T => [(0, 4), (1, 3), (1, 4), (1, 5)],
        ShapeKind::L => [(0, 4), (1, 4), (2, 4), (2, 5)],
        ShapeKind::LMirror => [(0, 5), (1, 5), (2, 4), (2, 5)],
        ShapeKind::Skew => [(0, 4), (0, 5), (1, 5), (1, 6)],
        ShapeKind::SkewMirror => [(0, 5), (0, 6), (1, 4), (1, 5)],
        ShapeKind::Square => [(0, 4), (0, 5), (1, 4), (1, 5)],
        ShapeKind::Straight => [(0, 3), (0, 4), (0, 5), (0, 6)],
    }
}

/// Display color for a shape kind.
pub fn color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::T => Rgb::new(204, 51, 255),
        ShapeKind::L => Rgb::new(255, 153, 0),
        ShapeKind::LMirror => Rgb::new(0, 102, 255),
        ShapeKind::Skew => Rgb::new(0, 204, 102),
        ShapeKind::SkewMirror => Rgb::new(255, 51, 51),
        ShapeKind::Square => Rgb::new(255, 255, 0),
        ShapeKind::Straight => Rgb::new(0, 255, 255),
    }
}

/// Index into the cell list of the cell the shape rotates around.
///
/// Chosen per kind so the rotation looks right on screen. The Square has no
/// pivot.
pub fn pivot_index(kind: ShapeKind) -> Option<usize> {
    match kind {
        ShapeKind::T => Some(2),
        ShapeKind::SkewMirror => Some(0),
        ShapeKind::Square => None,
        _ => Some(1),
    }
}

/// A piece instance: a kind plus 4 absolute, mutable cell coordinates.
///
/// The cells are only ever moved as a whole (translated or rotated about the
/// pivot), so they stay distinct and keep the kind's relative geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    cells: [CellPos; 4],
}

impl Piece {
    /// Create a piece of the given kind at its spawn position.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            cells: spawn_cells(kind),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn cells(&self) -> &[CellPos; 4] {
        &self.cells
    }

    pub fn color(&self) -> Rgb {
        color(self.kind)
    }

    /// Add a (row, col) delta to all 4 cells.
    ///
    /// No bounds checking; the board engine validates before calling.
    pub fn translate(&mut self, d_row: i8, d_col: i8) {
        for cell in &mut self.cells {
            cell.0 += d_row;
            cell.1 += d_col;
        }
    }

    /// Rotate 90 degrees clockwise around the kind's pivot cell.
    ///
    /// Each cell's vector relative to the pivot (dr, dc) maps to (dc, -dr).
    /// The pivot itself is skipped (its relative vector is zero). No-op for
    /// the Square. No collision checking here; that is the board engine's
    /// job.
    pub fn rotate(&mut self) {
        let Some(pivot) = pivot_index(self.kind) else {
            return;
        };
        let (pivot_row, pivot_col) = self.cells[pivot];
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if i == pivot {
                continue;
            }
            let d_row = cell.0 - pivot_row;
            let d_col = cell.1 - pivot_col;
            *cell = (pivot_row + d_col, pivot_col - d_row);
        }
    }
}
