//! rl-tui: Terminal UI layer using ratatui
//!
//! Everything terminal-specific lives here; the core only ever sees decoded
//! commands and hands back snapshots.

pub mod app;
pub mod input;
pub mod widgets;

pub use app::{App, UiMode};
