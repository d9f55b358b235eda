//! Tests for headless replay of action files.

use std::io::Write;

use strictly_tictactoe::{GameState, Mark};
use strictly_tictactoe_tui::replay::{replay_file, summary};

fn script_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

#[test]
fn test_replay_diagonal_win() {
    let file = script_file(&[
        "# X takes the main diagonal",
        r#"{"type":"cell-clicked","payload":0}"#,
        r#"{"type":"cell-clicked","payload":1}"#,
        r#"{"type":"cell-clicked","payload":4}"#,
        r#"{"type":"cell-clicked","payload":2}"#,
        r#"{"type":"cell-clicked","payload":8}"#,
        r#"{"type":"cell-clicked","payload":5}"#,
    ]);

    let state = replay_file(file.path()).unwrap();

    assert_eq!(state.winning_player(), Some(Mark::X));
    assert!(state.game_over());
    assert!(!state.board().is_occupied(5));
    assert_eq!(
        summary(&state),
        "X|O|O\n-+-+-\n |X| \n-+-+-\n | |X\nWinner: X"
    );
}

#[test]
fn test_replay_draw_summary() {
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    let lines: Vec<String> = moves
        .iter()
        .map(|i| format!(r#"{{"type":"cell-clicked","payload":{i}}}"#))
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let file = script_file(&refs);

    let state = replay_file(file.path()).unwrap();

    assert!(state.game_over());
    assert_eq!(state.winning_player(), None);
    assert!(summary(&state).ends_with("\nDraw"));
}

#[test]
fn test_replay_reset_returns_to_initial_state() {
    let file = script_file(&[
        r#"{"type":"cell-clicked","payload":3}"#,
        r#"{"type":"reset"}"#,
    ]);

    assert_eq!(replay_file(file.path()).unwrap(), GameState::new());
}

#[test]
fn test_unknown_action_is_fatal() {
    let file = script_file(&[
        r#"{"type":"cell-clicked","payload":3}"#,
        r#"{"type":"undo"}"#,
    ]);

    let err = replay_file(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "line 2");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = replay_file(dir.path().join("nope.jsonl")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}
