//! Spawner - inserts new tiles after a board-changing move
//!
//! Up to two tiles are placed per move: two distinct empty cells are chosen
//! uniformly (reject-and-resample on collision), or the single remaining cell
//! when only one is left. Spawned values are 2 or 4 with equal probability.
//!
//! The Spawner is also where the game ends: when no empty cell remains and the
//! terminal detector finds no adjacent equal pair, `playing` becomes false.

use arrayvec::ArrayVec;
use log::{debug, info};
use rand::Rng;

use crate::detector::has_valid_move;
use crate::game_state::GameState;
use crate::types::{Cell, Position, MAX_SPAWNS_PER_MOVE, SPAWN_VALUES};

/// Positions chosen for a single spawn step.
pub type SpawnPositions = ArrayVec<Position, MAX_SPAWNS_PER_MOVE>;

/// Choose up to two distinct cells from `empty`.
pub fn pick_spawn_positions<R: Rng + ?Sized>(empty: &[Position], rng: &mut R) -> SpawnPositions {
    let mut picked = SpawnPositions::new();
    match empty.len() {
        0 => {}
        1 => picked.push(empty[0]),
        n => {
            let first = rng.gen_range(0..n);
            let second = loop {
                let candidate = rng.gen_range(0..n);
                if candidate != first {
                    break candidate;
                }
            };
            picked.push(empty[first]);
            picked.push(empty[second]);
        }
    }
    picked
}

/// Draw a spawn value: 2 or 4, 50/50.
pub fn spawn_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    SPAWN_VALUES[rng.gen_range(0..SPAWN_VALUES.len())]
}

/// Insert new tiles into `state` after a board-changing move.
pub fn spawn_after_move<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    spawn_after_move_with_positions(state, rng).0
}

/// Like [`spawn_after_move`], also returning the positions that received tiles.
pub fn spawn_after_move_with_positions<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
) -> (GameState, SpawnPositions) {
    let mut board = state.board().clone();
    let empty = board.empty_positions();

    if empty.is_empty() {
        if !has_valid_move(&board) {
            info!("game over with score {}", state.score());
            return (
                GameState::from_parts(board, false, state.score()),
                SpawnPositions::new(),
            );
        }
        return (state.clone(), SpawnPositions::new());
    }

    let picked = pick_spawn_positions(&empty, rng);
    for &pos in &picked {
        let value = spawn_value(rng);
        debug!("spawn {} at ({}, {})", value, pos.row, pos.column);
        board.put(Cell::spawned(pos, value));
    }

    let mut playing = state.playing();
    if board.is_full() && !has_valid_move(&board) {
        info!("game over with score {}", state.score());
        playing = false;
    }

    (GameState::from_parts(board, playing, state.score()), picked)
}
