//! Headless replay of a recorded action script.

use anyhow::{Context, Result};
use std::path::Path;
use strictly_tictactoe::{Action, GameState, rules};
use tracing::{debug, info, instrument};

use crate::store::Store;
use crate::view::status;

/// Folds every action in `script` through a fresh [`Store`].
///
/// One JSON action per line; blank lines and `#` comments are skipped. The
/// first line that is not a known action aborts the replay.
#[instrument(skip(script))]
pub fn replay_script(script: &str) -> Result<GameState> {
    let mut store = Store::new();
    for (number, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let action = Action::decode(line).with_context(|| format!("line {}", number + 1))?;
        debug!(line = number + 1, %action, "Replaying action");
        store.dispatch(action);
    }
    info!(actions = store.dispatched(), "Replay finished");
    Ok(*store.state())
}

/// Replays the script stored at `path`.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn replay_file(path: impl AsRef<Path>) -> Result<GameState> {
    let script = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    replay_script(&script)
}

/// Text rendering of a state: the board followed by the status lines.
pub fn summary(state: &GameState) -> String {
    let mut lines = vec![state.board().display()];
    lines.extend(status::turn_indicator(state));
    lines.extend(status::winner_indicator(state));
    if rules::is_draw(state.board()) {
        lines.push("Draw".to_string());
    }
    lines.join("\n")
}
