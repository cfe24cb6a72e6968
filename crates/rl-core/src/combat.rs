//! Combat resolution.
//!
//! One melee exchange per call, symmetric for player-attacks-enemy and
//! enemy-attacks-player. Message formatting belongs to the turn engine.

use crate::entity::Entity;
use crate::rng::GameRng;

/// Result of a single melee strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatResult {
    /// Damage actually dealt
    pub damage: i32,
    /// Whether the defender died from this strike
    pub defender_died: bool,
}

/// Roll melee damage: attack power plus a uniform offset in {-1, 0, 1},
/// floored at 1.
pub fn melee_damage(attack: i32, rng: &mut GameRng) -> i32 {
    let offset = rng.rn2(3) as i32 - 1;
    (attack + offset).max(1)
}

/// Resolve one strike from an attacker with the given attack power.
pub fn strike(attack: i32, defender: &mut Entity, rng: &mut GameRng) -> CombatResult {
    let damage = melee_damage(attack, rng);
    let defender_died = defender.take_damage(damage);
    CombatResult {
        damage,
        defender_died,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EnemyKind;

    #[test]
    fn test_damage_is_within_one_of_attack_power() {
        let mut rng = GameRng::new(3);
        for _ in 0..500 {
            let dmg = melee_damage(5, &mut rng);
            assert!((4..=6).contains(&dmg));
        }
    }

    #[test]
    fn test_damage_never_drops_below_one() {
        let mut rng = GameRng::new(3);
        for _ in 0..500 {
            assert!(melee_damage(0, &mut rng) >= 1);
            assert!(melee_damage(1, &mut rng) >= 1);
        }
    }

    #[test]
    fn test_strike_reports_death() {
        let mut rng = GameRng::new(3);
        let mut victim = Entity::enemy(0, 0, EnemyKind::Goblin);
        victim.hp = 1;
        let result = strike(5, &mut victim, &mut rng);
        assert!(result.defender_died);
        assert_eq!(victim.hp, 0);
    }

    #[test]
    fn test_strike_reports_survival() {
        let mut rng = GameRng::new(3);
        let mut victim = Entity::player(0, 0);
        let result = strike(3, &mut victim, &mut rng);
        assert!(!result.defender_died);
        assert_eq!(victim.hp, victim.hp_max - result.damage);
    }
}
