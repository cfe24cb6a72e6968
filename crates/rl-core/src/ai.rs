//! Enemy AI.
//!
//! One decision per enemy per turn: hold position when already adjacent to
//! the player (the engine resolves that as an attack), otherwise take a
//! single-axis step toward the player.

use crate::dungeon::GameMap;
use crate::entity::Entity;

/// AI decision for one enemy turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiAction {
    /// Stay in place (adjacent to the player, or the step is blocked)
    Waited,
    /// Step to the given tile
    Moved(i32, i32),
}

/// Decide this enemy's move.
///
/// The step axis is whichever has the larger absolute distance to the
/// player; ties break toward the vertical axis. The step applies only when
/// the destination is walkable and absent from `occupied`, the position
/// snapshot of every other tracked entity (player included) taken at the
/// start of the enemy phase. Occupancy is not re-queried mid-phase.
pub fn pursue(
    enemy: &Entity,
    player: &Entity,
    map: &GameMap,
    occupied: &[(i32, i32)],
) -> AiAction {
    if enemy.is_adjacent(player.x, player.y) {
        return AiAction::Waited;
    }

    let dist_x = player.x - enemy.x;
    let dist_y = player.y - enemy.y;

    let (dx, dy) = if dist_x.abs() > dist_y.abs() {
        (dist_x.signum(), 0)
    } else {
        (0, dist_y.signum())
    };

    let new_x = enemy.x + dx;
    let new_y = enemy.y + dy;

    if map.is_walkable(new_x, new_y) && !occupied.contains(&(new_x, new_y)) {
        AiAction::Moved(new_x, new_y)
    } else {
        AiAction::Waited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::Room;
    use crate::entity::EnemyKind;

    fn open_map() -> GameMap {
        let mut map = GameMap::new(30, 30);
        map.carve_room(Room::new(1, 1, 28, 28));
        map
    }

    #[test]
    fn test_adjacent_enemy_holds_position() {
        let map = open_map();
        let player = Entity::player(10, 10);
        let enemy = Entity::enemy(11, 11, EnemyKind::Goblin);
        assert_eq!(pursue(&enemy, &player, &map, &[]), AiAction::Waited);
    }

    #[test]
    fn test_steps_along_dominant_axis() {
        let map = open_map();
        let player = Entity::player(20, 10);
        let enemy = Entity::enemy(10, 12, EnemyKind::Goblin);
        // |dx| = 10 beats |dy| = 2
        assert_eq!(pursue(&enemy, &player, &map, &[]), AiAction::Moved(11, 12));
    }

    #[test]
    fn test_tie_breaks_toward_vertical() {
        let map = open_map();
        let player = Entity::player(15, 15);
        let enemy = Entity::enemy(10, 10, EnemyKind::Orc);
        assert_eq!(pursue(&enemy, &player, &map, &[]), AiAction::Moved(10, 11));
    }

    #[test]
    fn test_blocked_by_occupied_tile() {
        let map = open_map();
        let player = Entity::player(15, 15);
        let enemy = Entity::enemy(10, 10, EnemyKind::Goblin);
        assert_eq!(
            pursue(&enemy, &player, &map, &[(10, 11)]),
            AiAction::Waited
        );
    }

    #[test]
    fn test_blocked_by_wall() {
        let mut map = GameMap::new(30, 30);
        // single-row room: any vertical step hits wall
        map.carve_room(Room::new(1, 10, 20, 1));
        let player = Entity::player(15, 13);
        let enemy = Entity::enemy(12, 10, EnemyKind::Goblin);
        // distances tie -> vertical step, which lands on wall
        assert_eq!(pursue(&enemy, &player, &map, &[]), AiAction::Waited);
    }
}
