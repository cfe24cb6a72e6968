//! Main turn engine.
//!
//! Owns the map, the player, the enemy collection, and the message log.
//! One [`Command`] drives one turn: player action, then the enemy phase,
//! then the win check. The presentation layer only ever sees a [`Snapshot`].

use std::collections::VecDeque;

use strum::Display;
use thiserror::Error;

use crate::action::{Command, Direction};
use crate::ai::{self, AiAction};
use crate::combat;
use crate::consts::{
    COLNO, KILL_SCORE, MAX_ENEMIES, MESSAGE_LIMIT, NROOMS, ROOM_MAX_H, ROOM_MAX_W, ROWNO,
};
use crate::dungeon::GameMap;
use crate::entity::{EnemyKind, Entity};
use crate::rng::GameRng;

/// Errors from malformed construction input.
///
/// Expected in-play outcomes (blocked moves, death signals) are plain
/// booleans, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("grid {width}x{height} is too small to place any room")]
    MapTooSmall { width: i32, height: i32 },
}

/// Game construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    /// Room placement attempts; the generated map may hold fewer rooms.
    pub rooms: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: COLNO,
            height: ROWNO,
            rooms: NROOMS,
        }
    }
}

/// Where the game stands. The three non-`Active` states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameStatus {
    Active,
    Victory,
    Defeat,
    Quit,
}

impl GameStatus {
    /// Terminal states process no further turns.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// Result of a game loop tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player defeated all enemies
    PlayerWon,
    /// Player died
    PlayerDied,
    /// Player quit
    PlayerQuit,
}

/// Renderable state copy handed to the presentation layer.
///
/// The engine computes the entity overlay here; the map itself is never
/// mutated by entity positions. Because execution is single-threaded, this
/// copy is all the isolation a reader needs between turns.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub width: i32,
    pub height: i32,
    /// Row-major symbol grid with living enemies and the player overlaid
    pub tiles: Vec<char>,
    pub hp: i32,
    pub hp_max: i32,
    pub score: u32,
    pub enemies_remaining: usize,
    pub turns: u64,
    /// Last messages, oldest first
    pub messages: Vec<String>,
    pub status: GameStatus,
}

impl Snapshot {
    /// Symbol at (x, y); out-of-bounds reads as a space.
    pub fn symbol_at(&self, x: i32, y: i32) -> char {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            self.tiles[(y * self.width + x) as usize]
        } else {
            ' '
        }
    }

    /// Iterate rows as strings, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(move |y| {
            (0..self.width)
                .map(|x| self.symbol_at(x, y))
                .collect::<String>()
        })
    }
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Dungeon map, immutable after generation
    pub map: GameMap,

    /// Player character; never removed, only marked defeated via status
    pub player: Entity,

    /// Living enemies in spawn order; removed on death
    pub enemies: Vec<Entity>,

    /// Score, +10 per enemy defeated
    pub score: u32,

    /// Current status
    pub status: GameStatus,

    /// Turn counter; increments only on successful player movement
    pub turns: u64,

    /// Random number generator
    pub rng: GameRng,

    /// Bounded ring of recent messages, oldest dropped first
    messages: VecDeque<String>,
}

impl GameState {
    /// Create a new game with the default 60x20 grid and 6 room attempts.
    pub fn new(rng: GameRng) -> Self {
        Self::build(GameConfig::default(), rng)
    }

    /// Create a new game with explicit parameters.
    ///
    /// Fails when the grid cannot hold even one maximum-size room inside the
    /// 1-tile border.
    pub fn with_config(config: GameConfig, rng: GameRng) -> Result<Self, GameError> {
        if config.width < ROOM_MAX_W + 2 || config.height < ROOM_MAX_H + 2 {
            return Err(GameError::MapTooSmall {
                width: config.width,
                height: config.height,
            });
        }
        Ok(Self::build(config, rng))
    }

    fn build(config: GameConfig, mut rng: GameRng) -> Self {
        let mut map = GameMap::new(config.width, config.height);
        map.generate(&mut rng, config.rooms);

        let (px, py) = map.random_position_in_room(0, &mut rng);
        let player = Entity::player(px, py);

        let room_count = map.rooms().len();
        let num_enemies = (room_count * 2).min(MAX_ENEMIES);
        let mut enemies = Vec::with_capacity(num_enemies);
        for i in 0..num_enemies {
            // Rooms after the spawn room, cycling. Degenerate maps with a
            // single room put enemies in room 0 alongside the player.
            let room_idx = if room_count > 1 {
                (i % (room_count - 1)) + 1
            } else {
                0
            };
            let (ex, ey) = map.random_position_in_room(room_idx, &mut rng);
            let kind = EnemyKind::spawn_roll(&mut rng);
            enemies.push(Entity::enemy(ex, ey, kind));
        }

        let mut state = Self {
            map,
            player,
            enemies,
            score: 0,
            status: GameStatus::Active,
            turns: 0,
            rng,
            messages: VecDeque::with_capacity(MESSAGE_LIMIT),
        };
        state.message("Welcome to the dungeon! Defeat all enemies to win.");
        state
    }

    /// Append a message, dropping the oldest beyond the ring limit.
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push_back(msg.into());
        while self.messages.len() > MESSAGE_LIMIT {
            self.messages.pop_front();
        }
    }

    /// Recent messages, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Index of the living enemy at (x, y), if any.
    pub fn enemy_at(&self, x: i32, y: i32) -> Option<usize> {
        self.enemies.iter().position(|e| e.x == x && e.y == y)
    }

    /// Player action for one directional command: attack the enemy on the
    /// destination tile, or attempt the move.
    ///
    /// Only a successful move advances the turn counter; attack turns and
    /// blocked moves leave it untouched.
    fn player_move(&mut self, dx: i32, dy: i32) {
        let new_x = self.player.x + dx;
        let new_y = self.player.y + dy;

        if let Some(idx) = self.enemy_at(new_x, new_y) {
            let attack = self.player.attack;
            let result = combat::strike(attack, &mut self.enemies[idx], &mut self.rng);
            let name = self.enemies[idx].name;
            self.message(format!(
                "{} attacks {} for {} damage!",
                self.player.name, name, result.damage
            ));
            if result.defender_died {
                self.message(format!("{} has been defeated!", name));
                self.enemies.remove(idx);
                self.score += KILL_SCORE;
            }
        } else if self.player.move_by(dx, dy, &self.map) {
            self.turns += 1;
        }
    }

    /// Enemy phase: every living enemy, in collection order, attacks when
    /// adjacent or takes its AI step.
    ///
    /// The occupancy snapshot is taken once at phase start; a defeat aborts
    /// the remainder of the phase immediately.
    fn enemy_phase(&mut self) {
        let mut occupied: Vec<(i32, i32)> = Vec::with_capacity(self.enemies.len() + 1);
        occupied.push((self.player.x, self.player.y));
        occupied.extend(self.enemies.iter().map(|e| (e.x, e.y)));

        for i in 0..self.enemies.len() {
            if self.enemies[i].is_adjacent(self.player.x, self.player.y) {
                let attack = self.enemies[i].attack;
                let name = self.enemies[i].name;
                let result = combat::strike(attack, &mut self.player, &mut self.rng);
                self.message(format!(
                    "{} attacks {} for {} damage!",
                    name, self.player.name, result.damage
                ));
                if result.defender_died {
                    self.message(format!("{} has been defeated!", self.player.name));
                    self.message("You have been defeated!");
                    self.status = GameStatus::Defeat;
                    return;
                }
            } else if let AiAction::Moved(nx, ny) =
                ai::pursue(&self.enemies[i], &self.player, &self.map, &occupied)
            {
                // An AI step never targets the mover's own tile, so the full
                // snapshot works for every enemy without exclusion.
                self.enemies[i].x = nx;
                self.enemies[i].y = ny;
            }
        }
    }

    /// Build the renderable state copy for this point between turns.
    pub fn snapshot(&self) -> Snapshot {
        let mut tiles: Vec<char> = (0..self.map.height())
            .flat_map(|y| (0..self.map.width()).map(move |x| self.map.tile(x, y).symbol()))
            .collect();

        let width = self.map.width();
        let in_bounds =
            |x: i32, y: i32| x >= 0 && x < width && y >= 0 && y < self.map.height();
        for enemy in &self.enemies {
            if in_bounds(enemy.x, enemy.y) {
                tiles[(enemy.y * width + enemy.x) as usize] = enemy.symbol;
            }
        }
        if in_bounds(self.player.x, self.player.y) {
            tiles[(self.player.y * width + self.player.x) as usize] = self.player.symbol;
        }

        Snapshot {
            width,
            height: self.map.height(),
            tiles,
            hp: self.player.hp,
            hp_max: self.player.hp_max,
            score: self.score,
            enemies_remaining: self.enemies.len(),
            turns: self.turns,
            messages: self.messages.iter().cloned().collect(),
            status: self.status,
        }
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consume the game loop and return the owned game state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Process one turn for one command.
    ///
    /// Terminal states reject further turns without mutating anything; a
    /// quit is honored only here, between turns, never mid-turn.
    pub fn tick(&mut self, command: Command) -> GameLoopResult {
        if self.state.status.is_terminal() {
            return Self::result_for(self.state.status);
        }

        match command {
            Command::Quit => {
                self.state.status = GameStatus::Quit;
                GameLoopResult::PlayerQuit
            }
            Command::Move(dir) => {
                self.move_turn(dir);
                Self::result_for(self.state.status)
            }
        }
    }

    fn move_turn(&mut self, dir: Direction) {
        let (dx, dy) = dir.delta();
        self.state.player_move(dx, dy);

        // The enemy phase runs after attack-only and blocked-move turns too.
        if self.state.status == GameStatus::Active {
            self.state.enemy_phase();
        }

        if self.state.status == GameStatus::Active && self.state.enemies.is_empty() {
            self.state
                .message("Congratulations! You've defeated all enemies!");
            self.state.status = GameStatus::Victory;
        }
    }

    const fn result_for(status: GameStatus) -> GameLoopResult {
        match status {
            GameStatus::Active => GameLoopResult::Continue,
            GameStatus::Victory => GameLoopResult::PlayerWon,
            GameStatus::Defeat => GameLoopResult::PlayerDied,
            GameStatus::Quit => GameLoopResult::PlayerQuit,
        }
    }
}
