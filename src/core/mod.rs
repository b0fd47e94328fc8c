//! Core module - pure game logic with no I/O
//!
//! Board grid, piece geometry, spawn randomness, and the board engine.
//! Nothing in here touches the terminal or the filesystem.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;

// Re-export commonly used types
pub use board::Board;
pub use game_state::GameState;
pub use pieces::{CellPos, Piece};
pub use rng::{ShapePicker, SimpleRng};
