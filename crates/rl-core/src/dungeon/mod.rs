//! Dungeon map: tile grid, room carving, and corridor connection.

mod cell;
mod map;
mod room;

pub use cell::CellType;
pub use map::GameMap;
pub use room::Room;
