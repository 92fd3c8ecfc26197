//! Move engine - slide, merge and rescore
//!
//! Every move is reduced to one canonical line routine, [`compact_line`], which
//! slides a single row toward its start or its end and merges equal neighbours.
//! Left/Right run it over the rows directly; Up/Down transpose the grid, run the
//! Left (Up) or Right (Down) variant over the transposed rows, and transpose
//! back. A final remap pass rewrites every cell's position to match its slot.
//!
//! Merge rules:
//! - Scanning starts at the end the tiles travel toward.
//! - Equal neighbours merge into the leading cell, which doubles and bounces.
//! - A tile merges at most once per move (`[2, 2, 2, 2]` becomes `[4, 4]`).
//! - Each merge adds the new tile value to the score.

use arrayvec::ArrayVec;
use log::debug;

use crate::board::{Board, Grid};
use crate::error::EngineError;
use crate::game_state::GameState;
use crate::types::{Cell, Direction, Position, GRID_SIZE};

/// Result of sliding the board in one direction (no spawning).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub state: GameState,
    /// Score gained by merges in this move
    pub points_earned: u32,
}

/// Apply a move to `state`, returning the slid/merged state.
///
/// The input is validated first; a malformed board yields
/// [`EngineError::InvariantViolation`]. This does not spawn tiles and does not
/// look at `playing`; see [`crate::handle_move_and_spawn`] for the full turn.
pub fn apply_move(direction: Direction, state: &GameState) -> Result<MoveResult, EngineError> {
    state.board().validate()?;

    let grid = *state.board().without_transient_flags().grid();
    let toward_start = direction.toward_start();

    let (moved, points_earned) = if direction.is_horizontal() {
        shift_rows(grid, toward_start)
    } else {
        let (shifted, points) = shift_rows(transpose(grid), toward_start);
        (transpose(shifted), points)
    };

    let board = Board::from_grid(remap_positions(moved));
    let score = state.score().saturating_add(points_earned);

    debug!(
        "move {}: +{} points, score {} -> {}",
        direction.as_str(),
        points_earned,
        state.score(),
        score
    );

    Ok(MoveResult {
        state: GameState::from_parts(board, state.playing(), score),
        points_earned,
    })
}

fn shift_rows(grid: Grid, toward_start: bool) -> (Grid, u32) {
    let mut out = grid;
    let mut points: u32 = 0;
    for (dst, src) in out.iter_mut().zip(grid.iter()) {
        let (line, line_points) = compact_line(*src, toward_start);
        *dst = line;
        points = points.saturating_add(line_points);
    }
    (out, points)
}

/// Slide and merge one line.
///
/// Returns the compacted line and the points earned. Positions in the output
/// are stale until [`remap_positions`] runs.
pub(crate) fn compact_line(
    line: [Cell; GRID_SIZE],
    toward_start: bool,
) -> ([Cell; GRID_SIZE], u32) {
    let mut tiles: ArrayVec<Cell, GRID_SIZE> =
        line.iter().copied().filter(|c| !c.empty).collect();
    let mut points: u32 = 0;

    if toward_start {
        let mut j = 0;
        while j + 1 < tiles.len() {
            if tiles[j].value == tiles[j + 1].value {
                points = points.saturating_add(merge_pair(&mut tiles, j, j + 1));
                j += 2;
            } else {
                j += 1;
            }
        }
    } else {
        // `j` is one past the leading tile.
        let mut j = tiles.len();
        while j >= 2 {
            if tiles[j - 1].value == tiles[j - 2].value {
                points = points.saturating_add(merge_pair(&mut tiles, j - 1, j - 2));
                j -= 2;
            } else {
                j -= 1;
            }
        }
    }

    let survivors: ArrayVec<Cell, GRID_SIZE> = tiles.into_iter().filter(|c| !c.empty).collect();
    let mut out = [Cell::empty_at(Position::default()); GRID_SIZE];
    let offset = if toward_start { 0 } else { GRID_SIZE - survivors.len() };
    for (slot, cell) in out[offset..].iter_mut().zip(survivors) {
        *slot = cell;
    }
    (out, points)
}

/// Double `lead`, consume `trail`, return the points scored.
fn merge_pair(tiles: &mut [Cell], lead: usize, trail: usize) -> u32 {
    let merged = tiles[lead].value.saturating_mul(2);
    tiles[lead].value = merged;
    tiles[lead].bounce = true;
    tiles[trail].value = 0;
    tiles[trail].empty = true;
    merged
}

pub(crate) fn transpose(grid: Grid) -> Grid {
    let mut out = grid;
    for (row, line) in grid.iter().enumerate() {
        for (column, cell) in line.iter().enumerate() {
            out[column][row] = *cell;
        }
    }
    out
}

/// Rewrite every position to match its slot; empty slots become canonical
/// default cells.
fn remap_positions(grid: Grid) -> Grid {
    let mut out = grid;
    for (row, line) in out.iter_mut().enumerate() {
        for (column, cell) in line.iter_mut().enumerate() {
            let position = Position::new(row as u8, column as u8);
            *cell = if cell.empty {
                Cell::empty_at(position)
            } else {
                Cell {
                    position,
                    just_inserted: false,
                    ..*cell
                }
            };
        }
    }
    out
}
