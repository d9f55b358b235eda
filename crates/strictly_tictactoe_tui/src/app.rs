//! Terminal lifecycle and the event loop.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use strictly_tictactoe::Position;
use tracing::{debug, error, info, instrument};

use crate::config::Theme;
use crate::input::{self, Input};
use crate::store::Store;
use crate::view::{self, ClickMap};

/// Application state owned by the event loop.
#[derive(Debug)]
pub struct App {
    store: Store,
    cursor: Position,
    clicks: ClickMap,
    theme: Theme,
}

impl App {
    /// Creates an application with a fresh game.
    #[instrument(skip(theme))]
    pub fn new(theme: Theme) -> Self {
        Self {
            store: Store::new(),
            cursor: Position::Center,
            clicks: ClickMap::default(),
            theme,
        }
    }

    /// The store holding the game state.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Draws the current state and remembers the frame's click targets.
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        let mut clicks = ClickMap::default();
        terminal.draw(|f| {
            clicks = view::draw(f, self.store.state(), self.cursor, &self.theme);
        })?;
        self.clicks = clicks;
        Ok(())
    }

    /// Handles one terminal event. Returns `false` once the user quits.
    #[instrument(level = "debug", skip(self, event))]
    pub fn handle_event(&mut self, event: &event::Event) -> bool {
        match input::translate(event, self.cursor, &self.clicks) {
            Input::Dispatch(action) => {
                self.store.dispatch(action);
                true
            }
            Input::MoveCursor(position) => {
                debug!(%position, "Cursor moved");
                self.cursor = position;
                true
            }
            Input::Quit => {
                info!("User quit");
                false
            }
            Input::Ignore => true,
        }
    }
}

/// Runs the game in the current terminal until the user quits.
#[instrument(skip(theme))]
pub fn run(theme: Theme) -> Result<()> {
    info!("Starting Strictly Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, App::new(theme));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for one event, handle it, repeat.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        app.render(terminal)?;
        let event = event::read()?;
        if !app.handle_event(&event) {
            info!(actions = app.store().dispatched(), "Leaving game loop");
            return Ok(());
        }
    }
}
