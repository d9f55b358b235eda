//! Pure tic-tac-toe game logic.
//!
//! The whole game is a single state transition function:
//!
//! ```
//! use strictly_tictactoe::{Action, GameState, Mark, reduce};
//!
//! let state = GameState::new();
//! let state = reduce(&state, Action::CellClicked(4));
//! assert_eq!(state.current_player(), Mark::O);
//!
//! let state = reduce(&state, Action::Reset);
//! assert_eq!(state, GameState::new());
//! ```
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: win and draw detection over the eight fixed lines
//! - **Reducer**: [`reduce`] maps `(state, action)` to the next state

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
mod reducer;
pub mod rules;
mod state;
mod types;

pub use action::{Action, ActionError};
pub use position::Position;
pub use reducer::reduce;
pub use state::GameState;
pub use types::{BOARD_SIZE, Board, Mark, Square};
