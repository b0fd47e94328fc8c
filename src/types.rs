//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Interval between automatic downward ticks (milliseconds)
pub const TICK_MS: u32 = 250;

/// Fixed path the debug board dump is written to
pub const BOARD_DUMP_PATH: &str = "board.txt";

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven shape kinds.
///
/// `LMirror` and `SkewMirror` are the mirrored variants of `L` and `Skew`
/// (elsewhere called J and Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    T,
    L,
    LMirror,
    Skew,
    SkewMirror,
    Square,
    Straight,
}

impl ShapeKind {
    pub const ALL: [Self; 7] = [
        Self::T,
        Self::L,
        Self::LMirror,
        Self::Skew,
        Self::SkewMirror,
        Self::Square,
        Self::Straight,
    ];
}

/// Direction for a single-step move of the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit (row, col) delta for this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Commands the driver can deliver to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    HardDrop,
    /// Handled by the driver, not the engine: write the board dump file.
    DumpBoard,
}

/// Cell on the board (None = empty, Some = filled with a piece color)
pub type Cell = Option<Rgb>;
