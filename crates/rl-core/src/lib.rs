//! rl-core: Core game logic for the dungeon crawler
//!
//! This crate contains all game logic with no I/O dependencies.
//! It is designed to be pure and testable: the presentation layer feeds
//! decoded [`action::Command`]s into the turn engine and reads back a
//! [`Snapshot`] to render.

pub mod action;
pub mod ai;
pub mod combat;
pub mod dungeon;
pub mod entity;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use gameloop::{
    GameConfig, GameError, GameLoop, GameLoopResult, GameState, GameStatus, Snapshot,
};
pub use rng::GameRng;
