//! Game state module - the board engine
//!
//! Owns the grid, the active piece, and every state-mutating operation:
//! spawn, move, rotate, lock, row clears. Commands arrive one at a time
//! from the driver and run to completion; there is no other actor.
//!
//! The active piece's cells live in the board grid while it is active. Any
//! positional mutation first erases the old footprint, validates or applies
//! the change, then re-stamps.

use crate::core::{Board, Piece, ShapePicker};
use crate::types::{Direction, GameAction, BOARD_HEIGHT, BOARD_WIDTH};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    picker: ShapePicker,
    started: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            picker: ShapePicker::new(seed),
            started: false,
            game_over: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Read-only grid access for the renderer.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Mutable grid access for tests.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Spawn a random piece at its fixed spawn cells and stamp it.
    ///
    /// If any spawn cell is already occupied by locked content the game is
    /// over: the flag is set and the board is left untouched rather than
    /// overwriting locked cells.
    pub fn spawn_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let kind = self.picker.draw();
        let piece = Piece::new(kind);

        let blocked = piece
            .cells()
            .iter()
            .any(|&(row, col)| self.board.is_occupied(row, col));
        if blocked {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.board.stamp_piece(&piece);
        self.active = Some(piece);
        true
    }

    /// Periodic gravity tick: one attempted downward step.
    pub fn tick(&mut self) {
        self.move_piece(Direction::Down);
    }

    /// Apply a driver command.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_piece(Direction::Left),
            GameAction::MoveRight => self.move_piece(Direction::Right),
            GameAction::MoveDown => self.move_piece(Direction::Down),
            GameAction::Rotate => self.rotate_piece(),
            GameAction::HardDrop => self.hard_drop(),
            // The dump is file I/O and belongs to the driver.
            GameAction::DumpBoard => {}
        }
    }

    /// Attempt a single-step move of the active piece.
    ///
    /// Left/right rejections leave the board unchanged. A rejected downward
    /// step locks the piece: it is re-stamped in place, completed rows are
    /// cleared, and the next piece spawns. That lock is the only path from
    /// active to locked.
    pub fn move_piece(&mut self, dir: Direction) {
        if self.game_over {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        self.board.erase_piece(&active);

        match dir {
            Direction::Down => {
                self.step_down();
            }
            Direction::Left | Direction::Right => {
                self.try_shift(dir);
            }
        }

        if let Some(active) = self.active {
            self.board.stamp_piece(&active);
        }
    }

    /// Rotate the active piece in place.
    ///
    /// Deliberately unvalidated: a rotation may overlap locked cells or
    /// leave the grid (out-of-grid cells are dropped by the bounds-checked
    /// stamp). See DESIGN.md.
    pub fn rotate_piece(&mut self) {
        if self.game_over {
            return;
        }
        let Some(mut active) = self.active else {
            return;
        };

        self.board.erase_piece(&active);
        active.rotate();
        self.board.stamp_piece(&active);
        self.active = Some(active);
    }

    /// Hard drop: step down repeatedly until the piece locks.
    pub fn hard_drop(&mut self) {
        if self.game_over {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        self.board.erase_piece(&active);
        while self.step_down() {}
        if let Some(active) = self.active {
            self.board.stamp_piece(&active);
        }
    }

    /// True if the active piece can move by (d_row, d_col): all 4 target
    /// cells inside the grid and unoccupied. The piece's own footprint has
    /// already been erased, so self-overlap passes.
    fn can_move(&self, piece: &Piece, d_row: i8, d_col: i8) -> bool {
        piece.cells().iter().all(|&(row, col)| {
            let row = row + d_row;
            let col = col + d_col;
            row < BOARD_HEIGHT as i8
                && col >= 0
                && col < BOARD_WIDTH as i8
                && !self.board.is_occupied(row, col)
        })
    }

    /// Horizontal step; rejected silently at edges or against locked cells.
    fn try_shift(&mut self, dir: Direction) {
        let Some(mut active) = self.active else {
            return;
        };
        let (d_row, d_col) = dir.delta();
        if self.can_move(&active, d_row, d_col) {
            active.translate(d_row, d_col);
            self.active = Some(active);
        }
    }

    /// One downward step. Returns true if the piece moved.
    ///
    /// Expects the active piece to be erased from the board. On rejection
    /// the piece locks: stamp in place, clear rows, spawn the successor.
    fn step_down(&mut self) -> bool {
        let Some(mut active) = self.active else {
            return false;
        };

        if self.can_move(&active, 1, 0) {
            active.translate(1, 0);
            self.active = Some(active);
            return true;
        }

        self.board.stamp_piece(&active);
        self.board.clear_completed_rows();
        self.active = None;
        self.spawn_piece();
        false
    }
}
