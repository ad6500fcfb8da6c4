//! Basic attack rolls.
//!
//! The bounds here are the contract; seeded replays depend on them exactly.

use crate::config::GameConfig;
use crate::env::RngOracle;

/// Attack variants available from the attack submenu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackStyle {
    /// `[attack - 5, attack + 5]`, free.
    Normal,
    /// `[attack, attack + 10]`, costs mana.
    Strong,
}

impl AttackStyle {
    /// Inclusive roll bounds for a hero with the given base attack.
    pub const fn bounds(self, attack: i32) -> (i32, i32) {
        match self {
            AttackStyle::Normal => (attack - 5, attack + 5),
            AttackStyle::Strong => (attack, attack + 10),
        }
    }

    pub const fn mana_cost(self) -> i32 {
        match self {
            AttackStyle::Normal => 0,
            AttackStyle::Strong => GameConfig::STRONG_ATTACK_COST,
        }
    }

    pub fn roll(self, attack: i32, rng: &mut impl RngOracle) -> i32 {
        let (min, max) = self.bounds(attack);
        rng.range_inclusive(min, max)
    }
}

/// Inclusive roll bounds for the boss counter-attack.
pub const fn boss_attack_bounds(attack: i32) -> (i32, i32) {
    (attack - 5, attack + 10)
}

pub fn roll_boss_attack(attack: i32, rng: &mut impl RngOracle) -> i32 {
    let (min, max) = boss_attack_bounds(attack);
    rng.range_inclusive(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn bounds_match_contract() {
        assert_eq!(AttackStyle::Normal.bounds(25), (20, 30));
        assert_eq!(AttackStyle::Strong.bounds(25), (25, 35));
        assert_eq!(boss_attack_bounds(20), (15, 30));
    }

    #[test]
    fn rolls_stay_in_bounds() {
        let mut rng = PcgRng::new(11);
        for _ in 0..500 {
            assert!((35..=45).contains(&AttackStyle::Strong.roll(35, &mut rng)));
            assert!((25..=40).contains(&roll_boss_attack(30, &mut rng)));
        }
    }

    #[test]
    fn first_seeded_roll_is_reproducible() {
        let mut rng = PcgRng::new(42);
        assert_eq!(AttackStyle::Normal.roll(25, &mut rng), 26);
    }
}
