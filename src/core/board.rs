//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of
//! the piece that filled it. Uses a flat array, row-major order.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom) and col
//! ranges 0..9 (left to right). The board is the single source of truth for
//! occupancy; the active piece's cells are mirrored into it while active.

use arrayvec::ArrayVec;

use crate::core::pieces::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Stamp a piece's cells onto the board with its color.
    ///
    /// Cells outside the grid are dropped silently (`set` is bounds-checked);
    /// an unvalidated rotation can produce such cells.
    pub fn stamp_piece(&mut self, piece: &Piece) {
        let color = piece.color();
        for &(row, col) in piece.cells() {
            self.set(row, col, Some(color));
        }
    }

    /// Erase a piece's cells from the board.
    ///
    /// Called before any positional mutation of the active piece so its old
    /// footprint never interferes with collision checks for the new one.
    pub fn erase_piece(&mut self, piece: &Piece) {
        for &(row, col) in piece.cells() {
            self.set(row, col, None);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Scan every row top to bottom and collapse the completed ones.
    ///
    /// A completed row at index i is removed by copying each row above it
    /// down one (row k := row k-1, for k from i down to 1), then emptying
    /// the vacated top row. Rows completed in the same scan are processed
    /// independently at the indices where the scan finds them; the scan is
    /// not restarted after a shift.
    ///
    /// Returns the indices at which completed rows were found, in scan
    /// order (at most 4 per lock).
    pub fn clear_completed_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let width = BOARD_WIDTH as usize;

        for row in 0..BOARD_HEIGHT as usize {
            if !self.is_row_full(row) {
                continue;
            }

            // Shift everything above down by one. copy_within handles the
            // overlapping ranges.
            for k in (1..=row).rev() {
                let src_start = (k - 1) * width;
                let dst_start = k * width;
                self.cells
                    .copy_within(src_start..src_start + width, dst_start);
            }

            // Empty the vacated top row.
            for cell in &mut self.cells[0..width] {
                *cell = None;
            }

            let _ = cleared.try_push(row);
        }

        cleared
    }

    /// Render the board as a plain-text grid for the debug dump.
    ///
    /// Each cell is `X` (occupied) or `-` (empty), space-separated, one
    /// newline-terminated line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * 2 + BOARD_HEIGHT as usize);
        for row in 0..BOARD_HEIGHT as usize {
            for col in 0..BOARD_WIDTH as usize {
                let tile = if self.cells[row * BOARD_WIDTH as usize + col].is_some() {
                    'X'
                } else {
                    '-'
                };
                out.push(tile);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
