//! Actions accepted by the reducer.
//!
//! Actions are plain data describing what the user did. They carry no
//! validation of their own: the reducer decides whether an action changes
//! the state.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Something the user did.
///
/// On the wire an action is adjacently tagged:
/// `{"type":"cell-clicked","payload":4}` or `{"type":"reset"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    /// A square was activated. The index may be out of range.
    CellClicked(usize),
    /// The reset control was activated.
    Reset,
}

impl Action {
    /// Decodes one action from its JSON form.
    ///
    /// Unknown action kinds are rejected here, since the typed enum cannot
    /// express them.
    #[instrument(level = "debug")]
    pub fn decode(json: &str) -> Result<Self, ActionError> {
        serde_json::from_str(json)
            .map_err(|e| ActionError::new(format!("Unknown or malformed action {json}: {e}")))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::CellClicked(index) => write!(f, "cell-clicked({index})"),
            Action::Reset => write!(f, "reset"),
        }
    }
}

/// An action could not be decoded.
#[derive(Debug, Clone, Display, Error)]
#[display("Action error: {} at {}:{}", message, file, line)]
pub struct ActionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ActionError {
    /// Creates a new action error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cell_clicked() {
        let action = Action::decode(r#"{"type":"cell-clicked","payload":4}"#).unwrap();
        assert_eq!(action, Action::CellClicked(4));
    }

    #[test]
    fn test_decode_reset() {
        assert_eq!(Action::decode(r#"{"type":"reset"}"#).unwrap(), Action::Reset);
    }

    #[test]
    fn test_serialized_form_matches_wire_format() {
        assert_eq!(
            serde_json::to_string(&Action::CellClicked(8)).unwrap(),
            r#"{"type":"cell-clicked","payload":8}"#
        );
        assert_eq!(
            serde_json::to_string(&Action::Reset).unwrap(),
            r#"{"type":"reset"}"#
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = Action::decode(r#"{"type":"undo"}"#).unwrap_err();
        assert!(err.message.contains("undo"));
        assert!(err.file.ends_with("action.rs"));
    }

    #[test]
    fn test_missing_payload_is_rejected() {
        assert!(Action::decode(r#"{"type":"cell-clicked"}"#).is_err());
    }
}
