//! Stateless rendering of a [`GameState`].
//!
//! [`draw`] paints one frame and returns the [`ClickMap`] for it, so the
//! event loop can turn a mouse click back into an [`Action`] without the
//! view holding any state of its own.

mod board;
pub mod status;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use strictly_tictactoe::{Action, BOARD_SIZE, GameState, Position};
use tracing::instrument;

use crate::config::Theme;

/// Width of a single square, in columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of a single square, in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Outer width of the board, frame included.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2 + 2;
/// Outer height of the board, frame included.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2 + 2;

const RESET_WIDTH: u16 = 11;
const RESET_HEIGHT: u16 = 3;
const CONTENT_HEIGHT: u16 = 1 + 1 + 1 + RESET_HEIGHT + 1 + BOARD_HEIGHT + 1;
const HELP: &str = "click or 1-9: play  arrows+enter: cursor  r: reset  q: quit";

/// Click handler bound to one square.
///
/// Every square gets its handler from [`CellHandler::ALL`], so a square
/// always reports its own index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellHandler {
    index: usize,
}

impl CellHandler {
    /// One handler per square, in index order.
    pub const ALL: [CellHandler; BOARD_SIZE] = {
        let mut handlers = [CellHandler { index: 0 }; BOARD_SIZE];
        let mut i = 0;
        while i < BOARD_SIZE {
            handlers[i] = CellHandler { index: i };
            i += 1;
        }
        handlers
    };

    /// Handler for `position`.
    pub const fn for_position(position: Position) -> Self {
        Self::ALL[position.to_index()]
    }

    /// Index of the square this handler belongs to.
    pub const fn index(self) -> usize {
        self.index
    }

    /// Action dispatched when the square is activated.
    pub const fn on_click(self) -> Action {
        Action::CellClicked(self.index)
    }
}

/// Something on screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// A square of the grid.
    Cell(CellHandler),
    /// The reset button.
    Reset,
}

impl ClickTarget {
    /// Action dispatched when the target is clicked.
    pub const fn on_click(self) -> Action {
        match self {
            ClickTarget::Cell(handler) => handler.on_click(),
            ClickTarget::Reset => Action::Reset,
        }
    }
}

/// Screen regions of the last drawn frame and what they react to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickMap {
    targets: Vec<(Rect, ClickTarget)>,
}

impl ClickMap {
    /// Registers a target covering `area`.
    pub fn push(&mut self, area: Rect, target: ClickTarget) {
        self.targets.push((area, target));
    }

    /// Target under the terminal cell at `column`/`row`, if any.
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        self.targets
            .iter()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .map(|(_, target)| *target)
    }

    /// Area registered for `target`, if it was drawn.
    pub fn area_of(&self, target: ClickTarget) -> Option<Rect> {
        self.targets
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }

    /// All registered targets.
    pub fn targets(&self) -> &[(Rect, ClickTarget)] {
        &self.targets
    }
}

/// Renders the whole game and returns the click map for this frame.
#[instrument(level = "trace", skip(frame, state, theme))]
pub fn draw(frame: &mut Frame, state: &GameState, cursor: Position, theme: &Theme) -> ClickMap {
    let mut clicks = ClickMap::default();
    let area = center_vertical(frame.area(), CONTENT_HEIGHT);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(1),             // Turn indicator
            Constraint::Length(1),             // Winner indicator
            Constraint::Length(RESET_HEIGHT),  // Reset
            Constraint::Length(1),             // Gap
            Constraint::Length(BOARD_HEIGHT),  // Board
            Constraint::Length(1),             // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    status::render_turn(frame, chunks[1], state);
    status::render_winner(frame, chunks[2], state, theme);

    let reset_area = center_horizontal(chunks[3], RESET_WIDTH);
    status::render_reset(frame, reset_area, theme);
    clicks.push(reset_area, ClickTarget::Reset);

    let board_area = center_horizontal(chunks[5], BOARD_WIDTH);
    board::render_board(frame, board_area, state, cursor, theme, &mut clicks);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[6]);

    clicks
}

fn center_horizontal(area: Rect, width: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area)[1]
}

fn center_vertical(area: Rect, height: u16) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area)[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handlers_report_their_own_index() {
        for (i, handler) in CellHandler::ALL.iter().enumerate() {
            assert_eq!(handler.index(), i);
            assert_eq!(handler.on_click(), Action::CellClicked(i));
        }
        assert_eq!(
            CellHandler::for_position(Position::BottomRight).on_click(),
            Action::CellClicked(8)
        );
    }

    #[test]
    fn test_click_map_lookup() {
        let mut clicks = ClickMap::default();
        clicks.push(Rect::new(2, 2, 3, 2), ClickTarget::Reset);
        clicks.push(Rect::new(10, 0, 2, 2), ClickTarget::Cell(CellHandler::ALL[4]));

        assert_eq!(clicks.target_at(2, 2), Some(ClickTarget::Reset));
        assert_eq!(clicks.target_at(4, 3), Some(ClickTarget::Reset));
        assert_eq!(clicks.target_at(5, 3), None);
        assert_eq!(
            clicks.target_at(11, 1).map(ClickTarget::on_click),
            Some(Action::CellClicked(4))
        );
        assert_eq!(clicks.area_of(ClickTarget::Reset), Some(Rect::new(2, 2, 3, 2)));
    }
}
