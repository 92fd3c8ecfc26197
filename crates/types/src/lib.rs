//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, terminal shell, tests).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 5x5 grid:
//!
//! - **Rows**: indexed 0-4 (top to bottom)
//! - **Columns**: indexed 0-4 (left to right)
//! - **Storage order**: row-major (`row * GRID_SIZE + column`)
//!
//! # Tile Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_VALUES` | [2, 4] | Values spawned after a board-changing move (50/50) |
//! | `INITIAL_TILE_VALUES` | [2, 4, 8] | Values seeded into a fresh board |
//! | `INITIAL_TILE_DRAW_RANGE` | 2.25 | Draw range floored to an index into `INITIAL_TILE_VALUES` |
//! | `MAX_SPAWNS_PER_MOVE` | 2 | Tiles inserted per accepted move (fewer if the board lacks room) |
//!
//! # Examples
//!
//! ```
//! use two_power_types::{Cell, Direction, Position, GRID_SIZE};
//!
//! // Parse a direction (DOM key names are accepted too)
//! assert_eq!(Direction::from_str("ArrowLeft"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("up"), Some(Direction::Up));
//!
//! // Build cells
//! let empty = Cell::empty_at(Position::new(1, 2));
//! assert!(empty.empty);
//! let tile = Cell::tile(Position::new(1, 2), 8);
//! assert_eq!(tile.value, 8);
//!
//! assert_eq!(GRID_SIZE, 5);
//! ```

/// Board side length in cells (5 rows, 5 columns)
pub const GRID_SIZE: usize = 5;

/// Total number of cells on the board
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Values spawned after a board-changing move, drawn uniformly.
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Values used when seeding a fresh board.
pub const INITIAL_TILE_VALUES: [u32; 3] = [2, 4, 8];

/// Upper bound of the uniform draw used to index [`INITIAL_TILE_VALUES`].
///
/// `floor(u * 2.25)` gives P(2) = P(4) = 4/9 and P(8) = 1/9.
pub const INITIAL_TILE_DRAW_RANGE: f64 = 2.25;

/// Maximum number of tiles inserted by one spawn step.
pub const MAX_SPAWNS_PER_MOVE: usize = 2;


/// The four move directions
///
/// - **Left** / **Right**: rows are processed as lines
/// - **Up** / **Down**: columns are processed as lines (via transposition)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names, single letters, and browser key names
    /// ("ArrowLeft", "ArrowRight", "ArrowUp", "ArrowDown").
    ///
    /// # Examples
    ///
    /// ```
    /// use two_power_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("ArrowUp"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("diagonal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" | "arrowleft" => Some(Direction::Left),
            "right" | "r" | "arrowright" => Some(Direction::Right),
            "up" | "u" | "arrowup" => Some(Direction::Up),
            "down" | "d" | "arrowdown" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// True for moves that operate on rows directly.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when tiles travel toward index 0 of their line (Left and Up).
    pub fn toward_start(&self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }
}

/// Host-level actions
///
/// These are produced by input mapping and consumed by the shell loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge tiles in a direction
    Move(Direction),
    /// Discard the current game and seed a fresh board
    NewGame,
}

/// A grid coordinate, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: u8,
    pub column: u8,
}

impl Position {
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Flat row-major index (0..25)
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.row as usize * GRID_SIZE + self.column as usize
    }
}

/// A cell on the game board
///
/// `value == 0` means the cell is empty; `empty` mirrors that and is kept as
/// an explicit field so hosts can read it directly. `bounce` and
/// `just_inserted` are one-move-cycle hints for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub value: u32,
    pub position: Position,
    pub empty: bool,
    /// Set on the cell that absorbed a merge during the last move
    pub bounce: bool,
    /// Set on cells spawned after the last move
    pub just_inserted: bool,
}

impl Cell {
    /// Canonical empty cell at `position`.
    pub const fn empty_at(position: Position) -> Self {
        Self {
            value: 0,
            position,
            empty: true,
            bounce: false,
            just_inserted: false,
        }
    }

    /// Occupied cell with no transient flags.
    pub const fn tile(position: Position, value: u32) -> Self {
        Self {
            value,
            position,
            empty: false,
            bounce: false,
            just_inserted: false,
        }
    }

    /// Freshly spawned cell.
    pub const fn spawned(position: Position, value: u32) -> Self {
        Self {
            value,
            position,
            empty: false,
            bounce: false,
            just_inserted: true,
        }
    }

    /// `empty` agrees with `value == 0`.
    pub fn is_consistent(&self) -> bool {
        self.empty == (self.value == 0)
    }

    /// Same tile content, ignoring the transient flags.
    pub fn same_tile(&self, other: &Cell) -> bool {
        self.value == other.value && self.position == other.position && self.empty == other.empty
    }
}

/// Event produced once per applied move.
///
/// This is the explicit replacement for UI notification channels: hosts read
/// `points_earned` for score pop-ups and `direction` for board bounce feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub direction: Direction,
    /// Score gained by merges in this move (may be 0)
    pub points_earned: u32,
    /// Whether the slide/merge changed any tile
    pub board_changed: bool,
    /// Number of tiles spawned after the move (0..=2)
    pub spawned: u8,
}
