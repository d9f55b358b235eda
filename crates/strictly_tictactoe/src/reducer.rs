//! The state transition function.

use crate::{Action, GameState};
use tracing::{debug, instrument};

/// Computes the next state from `state` and `action`.
///
/// The input is only borrowed; the result is always a fresh value. Clicks
/// that cannot be played (game over, out of range, occupied square) return
/// an unchanged copy.
#[instrument(level = "debug", skip(state), fields(current_player = %state.current_player()))]
pub fn reduce(state: &GameState, action: Action) -> GameState {
    match action {
        Action::CellClicked(index) => cell_clicked(state, index),
        Action::Reset => {
            debug!("Game reset");
            GameState::new()
        }
    }
}

fn cell_clicked(state: &GameState, index: usize) -> GameState {
    if state.winning_player().is_some() || state.game_over() {
        debug!(index, "Click ignored, game is over");
        return *state;
    }

    let mark = state.current_player();
    let Some(board) = state.board().with_mark(index, mark) else {
        debug!(index, "Click ignored, square occupied or off the board");
        return *state;
    };

    // The turn passes even when this move ends the game.
    let next = GameState::from_board(board, mark.opponent());
    debug!(
        index,
        %mark,
        winner = ?next.winning_player(),
        game_over = next.game_over(),
        "Move applied"
    );
    next
}
