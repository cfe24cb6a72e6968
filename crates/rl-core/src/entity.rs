//! Entity model shared by the player and enemies.
//!
//! A single `Entity` struct carries the capability set (position, health,
//! attack, movement, damage); a closed [`EntityKind`] tag distinguishes the
//! player from enemy variants. Only these two kinds ever exist, so there is
//! no trait-object dispatch.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::consts::S_PLAYER;
use crate::dungeon::GameMap;
use crate::rng::GameRng;

/// Player starting health
pub const PLAYER_HP: i32 = 30;
/// Player attack power
pub const PLAYER_ATTACK: i32 = 5;

/// Enemy variants.
///
/// `Nondescript` is the silent fallback for unrecognized kind names; it is
/// never spawned by the weighted roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum EnemyKind {
    Goblin,
    Orc,
    #[strum(serialize = "Enemy")]
    Nondescript,
}

impl EnemyKind {
    /// Parse a kind name, falling back to the default stats on anything
    /// unrecognized rather than signaling an error.
    pub fn from_name(name: &str) -> Self {
        Self::from_str(name).unwrap_or(EnemyKind::Nondescript)
    }

    /// Weighted spawn roll: 70% goblin, 30% orc.
    pub fn spawn_roll(rng: &mut GameRng) -> Self {
        if rng.percent(70) {
            EnemyKind::Goblin
        } else {
            EnemyKind::Orc
        }
    }

    /// Display symbol
    pub const fn symbol(&self) -> char {
        match self {
            EnemyKind::Goblin => 'g',
            EnemyKind::Orc => 'O',
            EnemyKind::Nondescript => 'e',
        }
    }

    /// Display name
    pub const fn name(&self) -> &'static str {
        match self {
            EnemyKind::Goblin => "Goblin",
            EnemyKind::Orc => "Orc",
            EnemyKind::Nondescript => "Enemy",
        }
    }

    /// Starting health
    pub const fn hp(&self) -> i32 {
        match self {
            EnemyKind::Goblin => 10,
            EnemyKind::Orc => 15,
            EnemyKind::Nondescript => 8,
        }
    }

    /// Attack power
    pub const fn attack(&self) -> i32 {
        match self {
            EnemyKind::Goblin => 3,
            EnemyKind::Orc => 4,
            EnemyKind::Nondescript => 2,
        }
    }
}

/// What an entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy(EnemyKind),
}

/// A creature on the map.
#[derive(Debug, Clone)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub symbol: char,
    pub name: &'static str,
    pub hp: i32,
    pub hp_max: i32,
    pub attack: i32,
    pub kind: EntityKind,
}

impl Entity {
    /// Create the player at the given position.
    pub fn player(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            symbol: S_PLAYER,
            name: "Player",
            hp: PLAYER_HP,
            hp_max: PLAYER_HP,
            attack: PLAYER_ATTACK,
            kind: EntityKind::Player,
        }
    }

    /// Create an enemy of the given kind at the given position.
    pub fn enemy(x: i32, y: i32, kind: EnemyKind) -> Self {
        Self {
            x,
            y,
            symbol: kind.symbol(),
            name: kind.name(),
            hp: kind.hp(),
            hp_max: kind.hp(),
            attack: kind.attack(),
            kind: EntityKind::Enemy(kind),
        }
    }

    /// Move by (dx, dy) if the destination is walkable.
    ///
    /// This is the movement primitive only: collision with other entities is
    /// the caller's responsibility.
    pub fn move_by(&mut self, dx: i32, dy: i32, map: &GameMap) -> bool {
        let new_x = self.x + dx;
        let new_y = self.y + dy;
        if map.is_walkable(new_x, new_y) {
            self.x = new_x;
            self.y = new_y;
            true
        } else {
            false
        }
    }

    /// Apply damage; returns whether the entity is now dead.
    ///
    /// Stored health never goes below zero, and the death signal stays true
    /// on repeated calls.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp = (self.hp - amount).max(0);
        self.hp <= 0
    }

    /// Chebyshev adjacency: both axis deltas at most 1, not co-located.
    pub const fn is_adjacent(&self, x: i32, y: i32) -> bool {
        let dx = (self.x - x).abs();
        let dy = (self.y - y).abs();
        dx <= 1 && dy <= 1 && (dx != 0 || dy != 0)
    }
}
