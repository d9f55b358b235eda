//! Translation of terminal events into game actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use strictly_tictactoe::{Action, Position};
use tracing::{debug, instrument};

use crate::view::{CellHandler, ClickMap};

/// What the event loop should do with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Send this action to the store.
    Dispatch(Action),
    /// Move the keyboard cursor.
    MoveCursor(Position),
    /// Leave the application.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Maps one terminal event to an [`Input`].
///
/// `clicks` must be the map returned when the current frame was drawn.
#[instrument(level = "trace", skip(clicks))]
pub fn translate(event: &Event, cursor: Position, clicks: &ClickMap) -> Input {
    match event {
        Event::Key(key) => translate_key(key, cursor),
        Event::Mouse(mouse) => translate_mouse(mouse, clicks),
        _ => Input::Ignore,
    }
}

fn translate_key(key: &KeyEvent, cursor: Position) -> Input {
    if key.kind != KeyEventKind::Press {
        return Input::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        KeyCode::Char('r') => Input::Dispatch(Action::Reset),
        KeyCode::Char(c @ '1'..='9') => {
            // Digits are 1-based, squares 0-based.
            let index = c as usize - '1' as usize;
            Input::Dispatch(CellHandler::ALL[index].on_click())
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            Input::Dispatch(CellHandler::for_position(cursor).on_click())
        }
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Input::MoveCursor(move_cursor(cursor, code))
        }
        _ => Input::Ignore,
    }
}

fn translate_mouse(mouse: &MouseEvent, clicks: &ClickMap) -> Input {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Input::Ignore;
    }

    match clicks.target_at(mouse.column, mouse.row) {
        Some(target) => {
            debug!(column = mouse.column, row = mouse.row, ?target, "Click on target");
            Input::Dispatch(target.on_click())
        }
        None => Input::Ignore,
    }
}

/// Moves cursor based on arrow keys, staying put at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::at(r, col)),
        KeyCode::Down => Position::at(row + 1, col),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::at(row, c)),
        KeyCode::Right => Position::at(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}
