//! Terminal front end for strictly_tictactoe.
//!
//! The game logic lives in [`strictly_tictactoe`]; this crate only draws
//! the state and turns key presses and mouse clicks into actions.
//!
//! # Architecture
//!
//! - **Store**: owns the single [`GameState`](strictly_tictactoe::GameState)
//! - **View**: renders a state with ratatui and reports click targets
//! - **Input**: maps crossterm events to actions
//! - **App**: terminal setup and the blocking event loop
//! - **Replay**: headless playback of JSON action scripts

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod replay;
pub mod store;
pub mod view;

pub use app::App;
pub use config::{ConfigError, Theme, ThemeConfig, TuiConfig};
pub use store::Store;
