//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board, kept apart from board storage so the
//! reducer and the view can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner};
