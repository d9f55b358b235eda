//! Turn indicator, winner indicator and the reset button.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::GameState;

use crate::config::Theme;

/// Label of the reset button.
pub const RESET_LABEL: &str = "Reset";

/// `Next player: <mark>` while the game is running, nothing once it is over.
pub fn turn_indicator(state: &GameState) -> Option<String> {
    (!state.game_over()).then(|| format!("Next player: {}", state.current_player()))
}

/// `Winner: <mark>` when the game has a winner.
pub fn winner_indicator(state: &GameState) -> Option<String> {
    state
        .winning_player()
        .map(|winner| format!("Winner: {}", winner))
}

pub(super) fn render_turn(frame: &mut Frame, area: Rect, state: &GameState) {
    if let Some(text) = turn_indicator(state) {
        let line = Paragraph::new(text)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(line, area);
    }
}

pub(super) fn render_winner(frame: &mut Frame, area: Rect, state: &GameState, theme: &Theme) {
    if let Some(text) = winner_indicator(state) {
        let line = Paragraph::new(text)
            .style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(line, area);
    }
}

pub(super) fn render_reset(frame: &mut Frame, area: Rect, theme: &Theme) {
    let button = Paragraph::new(RESET_LABEL)
        .style(
            Style::default()
                .bg(theme.accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}
