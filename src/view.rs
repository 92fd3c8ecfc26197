//! Plain-text lines the shell draws around the board.

use crate::core::GameState;
use crate::types::MoveEvent;

/// Header line: score, best score and the highest tile on the board.
pub fn status_line(game: &GameState, best: u32) -> String {
    format!(
        "2Power   score {:>7}   best {:>7}   max tile {:>5}",
        game.score(),
        best,
        game.board().highest_tile()
    )
}

/// "+N" for the last move's merge points, empty when it earned nothing.
pub fn points_line(last_event: Option<&MoveEvent>) -> String {
    match last_event {
        Some(event) if event.points_earned > 0 => format!("+{}", event.points_earned),
        _ => String::new(),
    }
}

pub fn footer_line(game: &GameState) -> &'static str {
    if game.game_over() {
        "Game over. Press r for a new game, q to quit."
    } else {
        "Arrows/hjkl/wasd move, r new game, q quit."
    }
}
