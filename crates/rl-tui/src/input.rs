//! Input handling - convert key events to commands.
//!
//! WASD like the classic controls, plus arrow keys and vi keys. Anything
//! unrecognized decodes to `None` and never reaches the engine.

use crossterm::event::{KeyCode, KeyEvent};
use rl_core::action::{Command, Direction};

/// Convert a key event to a game command.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('w') | KeyCode::Char('k') | KeyCode::Up => {
            Some(Command::Move(Direction::North))
        }
        KeyCode::Char('s') | KeyCode::Char('j') | KeyCode::Down => {
            Some(Command::Move(Direction::South))
        }
        KeyCode::Char('a') | KeyCode::Char('h') | KeyCode::Left => {
            Some(Command::Move(Direction::West))
        }
        KeyCode::Char('d') | KeyCode::Char('l') | KeyCode::Right => {
            Some(Command::Move(Direction::East))
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
