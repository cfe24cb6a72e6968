//! Map cell types.

use strum::{Display, EnumIter};

use crate::consts::{S_FLOOR, S_WALL};

/// Cell/terrain type
///
/// Corridors reuse [`CellType::Floor`]; the map never distinguishes them
/// after carving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[repr(u8)]
pub enum CellType {
    #[default]
    Wall = 0,
    Floor = 1,
}

impl CellType {
    /// Check if this is passable (can walk through)
    pub const fn is_passable(&self) -> bool {
        matches!(self, CellType::Floor)
    }

    /// Display symbol for this cell
    pub const fn symbol(&self) -> char {
        match self {
            CellType::Wall => S_WALL,
            CellType::Floor => S_FLOOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_passability() {
        assert!(CellType::Floor.is_passable());
        assert!(!CellType::Wall.is_passable());
    }

    #[test]
    fn test_every_cell_has_a_symbol() {
        for cell in CellType::iter() {
            assert!(cell.symbol() == S_WALL || cell.symbol() == S_FLOOR);
        }
    }
}
