//! ASCII dungeon crawler
//!
//! Main entry point for the game.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use rl_core::{COLNO, GameConfig, GameRng, GameState, NROOMS, ROWNO};
use rl_tui::App;

/// ASCII dungeon crawler
#[derive(Parser, Debug)]
#[command(name = "roguelike")]
#[command(author, version, about = "Explore the dungeon and defeat every enemy!", long_about = None)]
struct Args {
    /// RNG seed for a reproducible dungeon (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Grid width in tiles
    #[arg(long, default_value_t = COLNO)]
    width: i32,

    /// Grid height in tiles
    #[arg(long, default_value_t = ROWNO)]
    height: i32,

    /// Room placement attempts
    #[arg(long, default_value_t = NROOMS)]
    rooms: usize,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let config = GameConfig {
        width: args.width,
        height: args.height,
        rooms: args.rooms,
    };
    let state = match GameState::with_config(config, rng) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("roguelike: {err}");
            std::process::exit(2);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(state);
    let result = run(&mut terminal, &mut app);

    // Restore terminal even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}
