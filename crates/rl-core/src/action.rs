//! Player commands.
//!
//! The presentation layer decodes raw input into these; anything it cannot
//! decode never reaches the engine.

/// Player command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_are_unit_cardinal_steps() {
        for dir in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
