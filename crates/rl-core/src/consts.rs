//! Core game constants.

/// Default map dimensions
pub const COLNO: i32 = 60;
pub const ROWNO: i32 = 20;

/// Default number of room placement attempts per level
pub const NROOMS: usize = 6;

/// Room dimension bounds (inclusive)
pub const ROOM_MIN_W: i32 = 4;
pub const ROOM_MAX_W: i32 = 10;
pub const ROOM_MIN_H: i32 = 4;
pub const ROOM_MAX_H: i32 = 8;

/// Hard cap on enemies spawned at game start
pub const MAX_ENEMIES: usize = 8;

/// Score awarded per enemy defeated
pub const KILL_SCORE: u32 = 10;

/// Message log keeps only the most recent entries
pub const MESSAGE_LIMIT: usize = 5;

/// Map symbols
pub const S_WALL: char = '#';
pub const S_FLOOR: char = '.';
pub const S_PLAYER: char = '@';
