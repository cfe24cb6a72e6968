//! Dungeon map with procedural generation.

use crate::consts::{ROOM_MAX_H, ROOM_MAX_W, ROOM_MIN_H, ROOM_MIN_W};
use crate::rng::GameRng;

use super::{CellType, Room};

/// The tile grid plus the ordered list of carved rooms.
///
/// Generated once at game start; no further carving happens during play.
/// Entity symbols are overlaid at render time, never written into the grid.
#[derive(Debug, Clone)]
pub struct GameMap {
    width: i32,
    height: i32,
    /// Row-major tile storage
    tiles: Vec<CellType>,
    /// Insertion order is generation order; corridor chaining and spawn-room
    /// selection both depend on it.
    rooms: Vec<Room>,
}

impl GameMap {
    /// Create a map filled entirely with wall tiles.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: vec![CellType::Wall; (width.max(0) * height.max(0)) as usize],
            rooms: Vec::new(),
        }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Rooms in generation order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Tile at (x, y); out-of-bounds reads as wall.
    pub fn tile(&self, x: i32, y: i32) -> CellType {
        if self.in_bounds(x, y) {
            self.tiles[(y * self.width + x) as usize]
        } else {
            CellType::Wall
        }
    }

    fn set_floor(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            self.tiles[(y * self.width + x) as usize] = CellType::Floor;
        }
    }

    /// Check if a tile can be stepped on. Out-of-bounds is never walkable.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.tile(x, y).is_passable()
    }

    /// Carve a rectangular room and append it to the room list.
    pub fn carve_room(&mut self, room: Room) {
        for dy in 0..room.height {
            for dx in 0..room.width {
                self.set_floor(room.x + dx, room.y + dy);
            }
        }
        self.rooms.push(room);
    }

    /// Carve an L-shaped corridor between two points: a full horizontal run
    /// on row y1, then a full vertical run on column x2. The bend always
    /// lands at (x2, y1).
    pub fn carve_corridor(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.set_floor(x, y1);
        }
        for y in y1.min(y2)..=y1.max(y2) {
            self.set_floor(x2, y);
        }
    }

    /// Attempt to place `target_rooms` non-overlapping rooms.
    ///
    /// Each attempt draws dimensions and an origin that keeps the room
    /// strictly inside a 1-tile border. A candidate that overlaps any
    /// existing room (inclusive bounds) is discarded without a retry, so the
    /// final count may fall short of the target; callers must tolerate that.
    /// Every accepted room after the first is connected to the immediately
    /// preceding one, center to center, horizontal leg first.
    pub fn generate(&mut self, rng: &mut GameRng, target_rooms: usize) {
        for _ in 0..target_rooms {
            let width = rng.range(ROOM_MIN_W, ROOM_MAX_W);
            let height = rng.range(ROOM_MIN_H, ROOM_MAX_H);
            let x = rng.range(1, self.width - width - 1);
            let y = rng.range(1, self.height - height - 1);

            let candidate = Room::new(x, y, width, height);
            if self.rooms.iter().any(|r| r.overlaps(&candidate)) {
                continue;
            }

            self.carve_room(candidate);

            if self.rooms.len() > 1 {
                let (px, py) = self.rooms[self.rooms.len() - 2].center();
                let (cx, cy) = candidate.center();
                self.carve_corridor(px, py, cx, cy);
            }
        }
    }

    /// Random interior point of the room at `index % room_count`.
    ///
    /// Falls back to the grid center when no rooms exist, so callers never
    /// see a fault from pathological generation.
    pub fn random_position_in_room(&self, index: usize, rng: &mut GameRng) -> (i32, i32) {
        if self.rooms.is_empty() {
            return (self.width / 2, self.height / 2);
        }
        self.rooms[index % self.rooms.len()].random_interior(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_all_wall() {
        let map = GameMap::new(10, 8);
        assert_eq!(map.width(), 10);
        assert_eq!(map.height(), 8);
        for y in 0..8 {
            for x in 0..10 {
                assert_eq!(map.tile(x, y), CellType::Wall);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_is_wall_and_unwalkable() {
        let mut map = GameMap::new(10, 8);
        map.carve_room(Room::new(1, 1, 5, 5));
        assert!(!map.is_walkable(-1, 2));
        assert!(!map.is_walkable(2, -1));
        assert!(!map.is_walkable(10, 2));
        assert!(!map.is_walkable(2, 8));
        assert_eq!(map.tile(-1, -1), CellType::Wall);
    }

    #[test]
    fn test_carve_room_floors_whole_rectangle() {
        let mut map = GameMap::new(20, 20);
        map.carve_room(Room::new(5, 5, 10, 10));
        for y in 5..15 {
            for x in 5..15 {
                assert!(map.is_walkable(x, y));
            }
        }
        assert!(!map.is_walkable(4, 5));
        assert!(!map.is_walkable(15, 5));
        assert_eq!(map.rooms().len(), 1);
    }

    #[test]
    fn test_corridor_bends_at_destination_column() {
        let mut map = GameMap::new(20, 20);
        map.carve_corridor(2, 3, 10, 12);
        // horizontal leg on row 3
        for x in 2..=10 {
            assert!(map.is_walkable(x, 3));
        }
        // vertical leg on column 10
        for y in 3..=12 {
            assert!(map.is_walkable(10, y));
        }
        // nothing carved on the source column below the bend row
        assert!(!map.is_walkable(2, 4));
    }

    #[test]
    fn test_generated_rooms_never_overlap() {
        for seed in 0..32 {
            let mut rng = GameRng::new(seed);
            let mut map = GameMap::new(60, 20);
            map.generate(&mut rng, 6);
            let rooms = map.rooms();
            assert!(!rooms.is_empty());
            assert!(rooms.len() <= 6);
            for (i, a) in rooms.iter().enumerate() {
                for b in &rooms[i + 1..] {
                    assert!(!a.overlaps(b), "rooms {a:?} and {b:?} overlap");
                }
            }
        }
    }

    #[test]
    fn test_generated_rooms_respect_border() {
        for seed in 0..32 {
            let mut rng = GameRng::new(seed);
            let mut map = GameMap::new(60, 20);
            map.generate(&mut rng, 6);
            for room in map.rooms() {
                assert!(room.x >= 1 && room.y >= 1);
                assert!(room.x + room.width < map.width());
                assert!(room.y + room.height < map.height());
            }
        }
    }

    #[test]
    fn test_random_position_in_room_cycles_index() {
        let mut rng = GameRng::new(11);
        let mut map = GameMap::new(40, 20);
        map.carve_room(Room::new(1, 1, 6, 6));
        map.carve_room(Room::new(10, 1, 6, 6));
        let (x, _) = map.random_position_in_room(3, &mut rng);
        // index 3 wraps to room 1
        assert!(x > 10);
    }

    #[test]
    fn test_random_position_falls_back_to_grid_center() {
        let mut rng = GameRng::new(11);
        let map = GameMap::new(40, 20);
        assert_eq!(map.random_position_in_room(0, &mut rng), (20, 10));
    }
}
