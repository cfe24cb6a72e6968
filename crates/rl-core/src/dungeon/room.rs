//! Room rectangles.

use crate::rng::GameRng;

/// A rectangular room carved into the map.
///
/// Immutable once created; the map keeps rooms in generation order and only
/// ever hands out copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    /// Left column
    pub x: i32,
    /// Top row
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    /// Create a new room
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the room, used as the corridor anchor.
    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if this room's bounding rectangle intersects another's.
    ///
    /// The bounds are inclusive: two rooms sharing an edge line count as
    /// overlapping, so accepted rooms always keep at least one wall tile
    /// between them.
    pub const fn overlaps(&self, other: &Room) -> bool {
        !(self.x + self.width < other.x
            || self.x > other.x + other.width
            || self.y + self.height < other.y
            || self.y > other.y + other.height)
    }

    /// Uniformly drawn interior point, excluding the 1-tile room border.
    pub fn random_interior(&self, rng: &mut GameRng) -> (i32, i32) {
        let x = self.x + rng.range(1, self.width - 2);
        let y = self.y + rng.range(1, self.height - 2);
        (x, y)
    }
}
