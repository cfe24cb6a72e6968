//! Application state and main UI controller

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use rl_core::{GameLoop, GameLoopResult, GameState, MESSAGE_LIMIT};

use crate::input::key_to_command;
use crate::widgets::{MapWidget, MessagesWidget, StatusWidget};

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone)]
pub enum UiMode {
    /// Normal gameplay
    Playing,
    /// End screen; any key exits
    GameOver { line: String },
}

/// Application state
pub struct App {
    /// Game loop controller
    game_loop: GameLoop,

    /// Current UI mode
    mode: UiMode,

    /// Should quit
    should_quit: bool,
}

impl App {
    pub fn new(state: GameState) -> Self {
        Self {
            game_loop: GameLoop::new(state),
            mode: UiMode::Playing,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Feed one key press into the game.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            UiMode::GameOver { .. } => {
                self.should_quit = true;
            }
            UiMode::Playing => {
                let Some(command) = key_to_command(key) else {
                    // unrecognized input never reaches the engine
                    return;
                };
                let result = self.game_loop.tick(command);
                let score = self.game_loop.state().score;
                match result {
                    GameLoopResult::Continue => {}
                    GameLoopResult::PlayerWon => {
                        self.mode = UiMode::GameOver {
                            line: format!("VICTORY! Final Score: {score}"),
                        };
                    }
                    GameLoopResult::PlayerDied => {
                        self.mode = UiMode::GameOver {
                            line: format!("GAME OVER! Final Score: {score}"),
                        };
                    }
                    GameLoopResult::PlayerQuit => {
                        self.mode = UiMode::GameOver {
                            line: format!("Thanks for playing! Final Score: {score}"),
                        };
                    }
                }
            }
        }
    }

    /// Render the UI
    pub fn draw(&self, frame: &mut Frame) {
        let snapshot = self.game_loop.state().snapshot();

        // Layout: map at top, status in middle, messages at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(snapshot.height as u16 + 2), // Map + border
                Constraint::Length(2),                       // Status lines
                Constraint::Length(MESSAGE_LIMIT as u16 + 2), // Messages + border
            ])
            .split(frame.area());

        frame.render_widget(MapWidget::new(&snapshot), chunks[0]);
        frame.render_widget(StatusWidget::new(&snapshot), chunks[1]);
        frame.render_widget(MessagesWidget::new(&snapshot.messages), chunks[2]);

        if let UiMode::GameOver { line } = &self.mode {
            let area = centered_rect(50, frame.area());
            frame.render_widget(Clear, area);
            let paragraph = Paragraph::new(vec![
                Line::from(line.as_str()),
                Line::from("Press any key to exit."),
            ])
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Game Over"));
            frame.render_widget(paragraph, area);
        }
    }
}

/// A horizontally centered, 4-row rectangle for the end screen.
fn centered_rect(percent_x: u16, r: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .split(r);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1]);
    cols[1]
}
