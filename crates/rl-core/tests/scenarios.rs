//! End-to-end scenarios exercised through the public API.

use rl_core::action::{Command, Direction};
use rl_core::dungeon::{GameMap, Room};
use rl_core::entity::{EnemyKind, Entity};
use rl_core::{GameLoop, GameLoopResult, GameRng, GameState, GameStatus};

/// Movement against a hand-carved 20x20 map with one room spanning
/// columns/rows 5..15.
#[test]
fn movement_on_hand_carved_room() {
    let mut map = GameMap::new(20, 20);
    map.carve_room(Room::new(5, 5, 10, 10));

    let mut inside = Entity::enemy(7, 7, EnemyKind::Goblin);
    assert!(inside.move_by(1, 0, &map));
    assert_eq!((inside.x, inside.y), (8, 7));

    let mut outside = Entity::enemy(4, 5, EnemyKind::Goblin);
    assert!(!outside.move_by(-1, 0, &map));
    assert_eq!((outside.x, outside.y), (4, 5));
}

#[test]
fn damage_and_death_signals() {
    let mut rng = GameRng::new(9);
    let mut frail = Entity::enemy(0, 0, EnemyKind::Goblin);
    frail.hp = 1;
    assert!(rl_core::combat::strike(5, &mut frail, &mut rng).defender_died);

    let mut player = Entity::player(0, 0);
    assert!(!player.take_damage(3));
    assert_eq!(player.hp, 27);
}

#[test]
fn default_game_is_playable_from_turn_zero() {
    let game = GameState::new(GameRng::new(1234));
    assert!(!game.map.rooms().is_empty());
    assert!(game.map.is_walkable(game.player.x, game.player.y));
    assert!(!game.enemies.is_empty());
    assert_eq!(game.status, GameStatus::Active);
    assert_eq!(game.turns, 0);
}

/// Clearing the enemy collection through repeated kills ends in Victory,
/// and further turns are rejected.
#[test]
fn repeated_kills_reach_victory() {
    let mut game = GameState::new(GameRng::new(7));
    let (px, py) = game.map.rooms()[0].center();
    game.player.x = px;
    game.player.y = py;

    let mut east = Entity::enemy(px + 1, py, EnemyKind::Goblin);
    east.hp = 1;
    let mut west = Entity::enemy(px - 1, py, EnemyKind::Goblin);
    west.hp = 1;
    game.enemies = vec![east, west];

    let mut game = GameLoop::new(game);
    assert_eq!(
        game.tick(Command::Move(Direction::East)),
        GameLoopResult::Continue
    );
    assert_eq!(game.state().enemies.len(), 1);

    assert_eq!(
        game.tick(Command::Move(Direction::West)),
        GameLoopResult::PlayerWon
    );
    assert_eq!(game.state().status, GameStatus::Victory);
    assert_eq!(game.state().score, 20);

    // terminal: nothing moves any more
    let hp = game.state().player.hp;
    assert_eq!(
        game.tick(Command::Move(Direction::North)),
        GameLoopResult::PlayerWon
    );
    assert_eq!(game.state().player.hp, hp);
    assert_eq!((game.state().player.x, game.state().player.y), (px, py));
}
