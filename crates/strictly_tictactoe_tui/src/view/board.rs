//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{GameState, Mark, Position, Square};

use super::{CELL_HEIGHT, CELL_WIDTH, CellHandler, ClickMap, ClickTarget};
use crate::config::Theme;

/// Renders the framed 3x3 grid and registers one click target per square.
pub(super) fn render_board(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    cursor: Position,
    theme: &Theme,
    clicks: &mut ClickMap,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.board))
        .style(Style::default().bg(theme.board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(inner);

    for (row_area, positions) in [rows[0], rows[2], rows[4]].into_iter().zip(Position::ROWS) {
        render_row(frame, row_area, state, cursor, theme, positions, clicks);
    }
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    cursor: Position,
    theme: &Theme,
    positions: [Position; 3],
    clicks: &mut ClickMap,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (cell_area, pos) in [cols[0], cols[2], cols[4]].into_iter().zip(positions) {
        render_square(frame, cell_area, state, pos == cursor, pos, theme);
        clicks.push(cell_area, ClickTarget::Cell(CellHandler::for_position(pos)));
    }
}

fn render_square(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    under_cursor: bool,
    pos: Position,
    theme: &Theme,
) {
    let square: Square = state.board().get(pos.to_index()).unwrap_or_default();

    let (symbol, mark_style) = match square.mark() {
        None => (" ", Style::default()),
        Some(Mark::X) => (
            "X",
            Style::default().fg(theme.mark_x).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            "O",
            Style::default().fg(theme.mark_o).add_modifier(Modifier::BOLD),
        ),
    };

    let background = if under_cursor { theme.accent } else { theme.square };
    let lines: Vec<Line> = (0..CELL_HEIGHT)
        .map(|row| {
            if row == CELL_HEIGHT / 2 {
                Line::from(Span::styled(symbol, mark_style))
            } else {
                Line::from("")
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(background).fg(Color::Black))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
