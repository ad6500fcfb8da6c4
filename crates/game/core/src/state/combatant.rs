//! Combatant model shared by heroes and the boss.
//!
//! "Dead" is a state (`health <= 0`), never removal: a fallen hero keeps its
//! seat in the party for the rest of the battle.

use crate::action::Skill;
use crate::env::{Difficulty, HeroArchetype};

/// Health and combat stats common to every combatant.
///
/// `health` may drop below zero internally; everything treats `<= 0` as down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub max_health: i32,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl CombatStats {
    pub const fn new(max_health: i32, attack: i32, defense: i32) -> Self {
        Self {
            max_health,
            health: max_health,
            attack,
            defense,
        }
    }

    /// Applies `raw` damage reduced by defense. At least 1 point always lands.
    pub fn take_damage(&mut self, raw: i32) -> i32 {
        let applied = (raw - self.defense).max(1);
        self.health -= applied;
        applied
    }

    /// Restores health up to `max_health`. Never lowers health.
    pub fn heal(&mut self, amount: i32) {
        if amount <= 0 || self.health >= self.max_health {
            return;
        }
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Capability shared by [`Hero`] and [`Boss`].
pub trait Combatant {
    fn name(&self) -> &str;
    fn stats(&self) -> &CombatStats;
    fn stats_mut(&mut self) -> &mut CombatStats;

    fn take_damage(&mut self, raw: i32) -> i32 {
        self.stats_mut().take_damage(raw)
    }

    fn heal(&mut self, amount: i32) {
        self.stats_mut().heal(amount);
    }

    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }
}

/// A party member built from one of the fixed archetypes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub archetype: HeroArchetype,
    pub stats: CombatStats,
    pub max_mana: i32,
    pub mana: i32,
    pub skills: Vec<Skill>,
    pub is_protagonist: bool,
}

impl Hero {
    /// Fresh hero at full health and mana.
    pub fn new(archetype: HeroArchetype) -> Self {
        let template = archetype.template();
        Self {
            archetype,
            stats: CombatStats::new(template.health, template.attack, template.defense),
            max_mana: template.mana,
            mana: template.mana,
            skills: template.skills.to_vec(),
            is_protagonist: false,
        }
    }

    /// Restores mana up to `max_mana`. Never lowers mana.
    pub fn restore_mana(&mut self, amount: i32) {
        if amount <= 0 || self.mana >= self.max_mana {
            return;
        }
        self.mana = (self.mana + amount).min(self.max_mana);
    }

    /// Deducts mana if the hero can afford it.
    pub fn spend_mana(&mut self, cost: i32) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana -= cost;
        true
    }

    /// Looks up a skill by name (case-insensitive).
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills
            .iter()
            .find(|skill| skill.name.eq_ignore_ascii_case(name))
    }

    /// True if at least one skill is affordable right now.
    pub fn can_cast_any(&self) -> bool {
        self.skills.iter().any(|skill| self.mana >= skill.mana_cost)
    }
}

impl Combatant for Hero {
    fn name(&self) -> &str {
        self.archetype.name()
    }

    fn stats(&self) -> &CombatStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats
    }
}

/// The single opponent; its stats come from the difficulty table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Boss {
    pub name: String,
    pub difficulty: Difficulty,
    pub stats: CombatStats,
}

impl Boss {
    pub fn new(difficulty: Difficulty) -> Self {
        let profile = difficulty.boss_profile();
        Self {
            name: Difficulty::BOSS_NAME.to_string(),
            difficulty,
            stats: CombatStats::new(profile.health, profile.attack, profile.defense),
        }
    }
}

impl Combatant for Boss {
    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> &CombatStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_floor_is_one_regardless_of_defense() {
        let mut stats = CombatStats::new(100, 10, 500);
        assert_eq!(stats.take_damage(3), 1);
        assert_eq!(stats.take_damage(0), 1);
        assert_eq!(stats.health, 98);
    }

    #[test]
    fn damage_is_reduced_by_defense() {
        let mut boss = Boss::new(Difficulty::Easy);
        assert_eq!(boss.take_damage(26), 21);
        assert_eq!(boss.stats.health, 279);
    }

    #[test]
    fn health_may_go_negative_but_counts_as_dead() {
        let mut stats = CombatStats::new(5, 1, 0);
        stats.take_damage(12);
        assert_eq!(stats.health, -7);
        assert!(!stats.is_alive());
    }

    #[test]
    fn heal_caps_at_max_and_never_lowers() {
        let mut hero = Hero::new(HeroArchetype::Warrior);
        hero.stats.health = 110;
        hero.heal(30);
        assert_eq!(hero.stats.health, 120);
        hero.heal(-20);
        assert_eq!(hero.stats.health, 120);
    }

    #[test]
    fn mana_restore_caps_and_spend_checks_balance() {
        let mut hero = Hero::new(HeroArchetype::Mage);
        assert!(hero.spend_mana(58));
        assert_eq!(hero.mana, 2);
        assert!(!hero.spend_mana(5));
        assert_eq!(hero.mana, 2);
        hero.restore_mana(100);
        assert_eq!(hero.mana, hero.max_mana);
    }

    #[test]
    fn can_cast_any_tracks_cheapest_skill() {
        let mut hero = Hero::new(HeroArchetype::Warrior);
        hero.mana = 8;
        assert!(hero.can_cast_any());
        hero.mana = 7;
        assert!(!hero.can_cast_any());
    }
}
