//! Owner of the single game state.

use strictly_tictactoe::{Action, GameState, reduce};
use tracing::{debug, info, instrument};

/// Holds the current [`GameState`] and feeds dispatched actions through the
/// reducer, one at a time.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: GameState,
    dispatched: u64,
}

impl Store {
    /// Creates a store holding the initial state.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating store with initial state");
        Self::default()
    }

    /// Borrows the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of actions dispatched so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Runs `action` through the reducer and keeps the result.
    ///
    /// Returns `true` when the state changed.
    #[instrument(skip(self), fields(seq = self.dispatched + 1))]
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = reduce(&self.state, action);
        let changed = next != self.state;
        self.dispatched += 1;
        self.state = next;

        if changed {
            debug!(
                next_player = %self.state.current_player(),
                winner = ?self.state.winning_player(),
                game_over = self.state.game_over(),
                "State updated"
            );
            if let Some(winner) = self.state.winning_player() {
                info!(%winner, "Game won");
            } else if self.state.game_over() {
                info!("Game drawn");
            }
        } else {
            debug!("Action left state unchanged");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Mark;

    #[test]
    fn test_dispatch_reports_change() {
        let mut store = Store::new();
        assert!(store.dispatch(Action::CellClicked(0)));
        assert!(!store.dispatch(Action::CellClicked(0)));
        assert_eq!(store.dispatched(), 2);
        assert_eq!(store.state().current_player(), Mark::O);
    }

    #[test]
    fn test_reset_on_fresh_store_is_unchanged() {
        let mut store = Store::new();
        assert!(!store.dispatch(Action::Reset));
        assert_eq!(*store.state(), GameState::new());
    }

    #[test]
    fn test_reset_replaces_state() {
        let mut store = Store::new();
        for i in [0, 3, 1, 4, 2] {
            store.dispatch(Action::CellClicked(i));
        }
        assert!(store.state().game_over());
        assert!(store.dispatch(Action::Reset));
        assert_eq!(*store.state(), GameState::new());
    }
}
