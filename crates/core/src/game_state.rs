//! Game state module - the value the host owns between turns
//!
//! [`GameState`] bundles the board with the score and the playing flag. It is
//! never mutated in place by the engine: every turn borrows the current state
//! and returns a new one. [`handle_move_and_spawn`] is the full turn the host
//! drives: move, spawn when the board changed, detect game over, report the
//! [`MoveEvent`].

use log::debug;
use rand::Rng;

use crate::board::{create_initial_board_with, Board, InitialTiles};
use crate::detector::has_valid_move;
use crate::error::EngineError;
use crate::moves::apply_move;
use crate::spawn::spawn_after_move_with_positions;
use crate::types::{Direction, MoveEvent};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    playing: bool,
    score: u32,
}

impl GameState {
    /// Start a new game on a freshly seeded board.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new_with(rng, InitialTiles::default())
    }

    /// Start a new game using a specific initial tile distribution.
    pub fn new_with<R: Rng + ?Sized>(rng: &mut R, tiles: InitialTiles) -> Self {
        Self::from_board(create_initial_board_with(rng, tiles))
    }

    /// Wrap an existing board as a playing game with score 0.
    pub fn from_board(board: Board) -> Self {
        Self::from_parts(board, true, 0)
    }

    pub(crate) fn from_parts(board: Board, playing: bool, score: u32) -> Self {
        Self {
            board,
            playing,
            score,
        }
    }

    /// Discard this game and start over with `tiles` seeding the new board.
    pub fn reset<R: Rng + ?Sized>(&self, rng: &mut R, tiles: InitialTiles) -> Self {
        debug!("reset after score {}", self.score);
        Self::new_with(rng, tiles)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn game_over(&self) -> bool {
        !self.playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

/// Receives the per-move notifications.
///
/// Both hooks fire once per applied move, after the new state is computed.
/// Rejected moves (game already over) notify nothing.
pub trait MoveObserver {
    /// Points earned by merges in this move (may be 0)
    fn on_points_earned(&mut self, _points: u32) {}

    /// Direction of the applied move, whether or not the board changed
    fn on_move_applied(&mut self, _direction: Direction) {}
}

/// Observer that ignores everything.
impl MoveObserver for () {}

/// Outcome of one host turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub state: GameState,
    /// `None` when the move was rejected because the game is over
    pub event: Option<MoveEvent>,
}

/// Apply a move, spawn if the board changed, and detect game over.
pub fn handle_move_and_spawn<R: Rng + ?Sized>(
    direction: Direction,
    state: &GameState,
    rng: &mut R,
) -> Result<MoveOutcome, EngineError> {
    handle_move_and_spawn_observed(direction, state, rng, &mut ())
}

/// [`handle_move_and_spawn`] with notifications delivered to `observer`.
pub fn handle_move_and_spawn_observed<R, O>(
    direction: Direction,
    state: &GameState,
    rng: &mut R,
    observer: &mut O,
) -> Result<MoveOutcome, EngineError>
where
    R: Rng + ?Sized,
    O: MoveObserver + ?Sized,
{
    if !state.playing {
        debug!("move {} ignored: game over", direction.as_str());
        return Ok(MoveOutcome {
            state: state.clone(),
            event: None,
        });
    }

    let moved = apply_move(direction, state)?;
    let board_changed = !moved.state.board.same_tiles(&state.board);

    let (next, spawned) = if board_changed {
        let (next, picked) = spawn_after_move_with_positions(&moved.state, rng);
        (next, picked.len() as u8)
    } else {
        let mut next = moved.state;
        if next.board.is_full() && !has_valid_move(&next.board) {
            next.playing = false;
        }
        (next, 0)
    };

    let event = MoveEvent {
        direction,
        points_earned: moved.points_earned,
        board_changed,
        spawned,
    };

    observer.on_points_earned(event.points_earned);
    observer.on_move_applied(event.direction);

    Ok(MoveOutcome {
        state: next,
        event: Some(event),
    })
}
