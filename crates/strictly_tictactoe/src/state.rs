//! Complete game state.

use crate::{Board, Mark, rules};
use serde::{Deserialize, Serialize};

/// Complete game state.
///
/// Values are only ever produced by [`GameState::new`] or by
/// [`reduce`](crate::reduce); the fields are read through accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark placed by the next accepted click.
    current_player: Mark,
    /// Winner, once a line is complete.
    winning_player: Option<Mark>,
    /// Set on a win or a full board.
    game_over: bool,
}

impl GameState {
    /// The initial state: empty board, X to move, no winner, not over.
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            winning_player: None,
            game_over: false,
        }
    }

    /// Builds the state reached by placing marks on `board`, deriving the
    /// winner and the game-over flag from the rules.
    pub fn from_board(board: Board, current_player: Mark) -> Self {
        let winning_player = rules::check_winner(&board);
        Self {
            board,
            current_player,
            winning_player,
            game_over: winning_player.is_some() || rules::is_full(&board),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the winner, if any.
    pub fn winning_player(&self) -> Option<Mark> {
        self.winning_player
    }

    /// True once the game has been won or the board is full.
    pub fn game_over(&self) -> bool {
        self.game_over
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
