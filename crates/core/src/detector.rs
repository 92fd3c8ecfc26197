//! Terminal detector - does any merge remain?

use crate::board::Board;
use crate::types::GRID_SIZE;

/// True iff some horizontally or vertically adjacent pair of non-empty cells
/// shares a value.
///
/// Empty cells are not considered; a board with room but no equal pair
/// returns false.
pub fn has_valid_move(board: &Board) -> bool {
    let rows = board.rows();
    for i in 0..GRID_SIZE {
        for j in 0..GRID_SIZE - 1 {
            let (a, b) = (&rows[i][j], &rows[i][j + 1]);
            if !a.empty && a.value == b.value {
                return true;
            }
            let (a, b) = (&rows[j][i], &rows[j + 1][i]);
            if !a.empty && a.value == b.value {
                return true;
            }
        }
    }
    false
}
