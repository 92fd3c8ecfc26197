//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the 5x5 sliding-tile merge puzzle: board
//! construction, moves, merges, scoring, spawning and game-over detection.
//! It has **no dependencies** on UI, terminal, or storage, making it:
//!
//! - **Pure**: every operation borrows a state and returns a new one
//! - **Deterministic**: randomness is injected, so a seeded RNG replays a game
//! - **Testable**: each rule is a small free function with unit tests
//!
//! # Module Structure
//!
//! - [`board`]: 5x5 grid, invariant checks, and the board factory
//! - [`moves`]: slide/merge of one line, reused for all four directions
//! - [`spawn`]: tile insertion after a board-changing move
//! - [`detector`]: adjacent-equal-pair scan for game-over detection
//! - [`game_state`]: the owned game value and the full host turn
//! - [`high_score`]: best-score tracking against a host store
//!
//! # Game Rules
//!
//! - **Merges**: two equal neighbours combine into one tile of double value;
//!   a tile merges at most once per move
//! - **Scoring**: each merge adds the merged tile's value
//! - **Spawns**: after a move that changed the board, two tiles (2 or 4, 50/50)
//!   appear in random empty cells, or one if only one cell is free
//! - **Game over**: no empty cell and no adjacent equal pair
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use two_power_core::{Board, GameState, handle_move_and_spawn};
//! use two_power_types::Direction;
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//!
//! let mut board = Board::new();
//! board.set_value(0, 0, 2);
//! board.set_value(0, 1, 2);
//! let game = GameState::from_board(board);
//!
//! let outcome = handle_move_and_spawn(Direction::Left, &game, &mut rng).unwrap();
//! assert_eq!(outcome.state.score(), 4);
//! assert_eq!(outcome.state.board().value(0, 0), 4);
//! assert_eq!(outcome.event.unwrap().points_earned, 4);
//! ```

pub mod board;
pub mod detector;
pub mod error;
pub mod game_state;
pub mod high_score;
pub mod moves;
pub mod spawn;

pub use two_power_types as types;

// Re-export commonly used types for convenience
pub use board::{
    create_empty_board, create_initial_board, create_initial_board_with, Board, InitialTiles,
};
pub use detector::has_valid_move;
pub use error::EngineError;
pub use game_state::{
    handle_move_and_spawn, handle_move_and_spawn_observed, GameState, MoveObserver, MoveOutcome,
};
pub use high_score::{HighScore, HighScoreStore, MemoryHighScoreStore};
pub use moves::{apply_move, MoveResult};
pub use spawn::{
    pick_spawn_positions, spawn_after_move, spawn_after_move_with_positions, SpawnPositions,
};
