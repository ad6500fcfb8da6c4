//! Skill definitions and the small interpreter that applies their effects.
//!
//! A skill is data: a mana cost, a target rule and a tagged [`SkillEffect`].
//! Per-skill formulas are kept exactly as authored (some fixed, some scaling
//! with the caster's attack) rather than normalized.

use crate::state::Combatant;

/// How a damage skill computes its raw amount before defense.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageFormula {
    /// Flat amount independent of the caster.
    Fixed(i32),
    /// `attack + n`
    AttackPlus(i32),
    /// `attack * n`
    AttackTimes(i32),
}

impl DamageFormula {
    pub const fn evaluate(self, caster_attack: i32) -> i32 {
        match self {
            DamageFormula::Fixed(amount) => amount,
            DamageFormula::AttackPlus(bonus) => caster_attack + bonus,
            DamageFormula::AttackTimes(factor) => caster_attack * factor,
        }
    }
}

/// Stat a buff effect mutates.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    Attack,
    Defense,
    /// Restores health, capped at max.
    Health,
}

/// What a skill does when it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillEffect {
    Damage(DamageFormula),
    Buff { stat: StatKind, delta: i32 },
}

/// Who a skill lands on, resolved at cast time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillTarget {
    Boss,
    Caster,
    /// Living hero with the lowest health fraction (ties: lowest party index).
    WeakestAlly,
}

/// A named action in a hero's skill list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Skill {
    pub name: &'static str,
    pub mana_cost: i32,
    pub effect: SkillEffect,
    pub target: SkillTarget,
}

impl Skill {
    pub const fn new(
        name: &'static str,
        mana_cost: i32,
        effect: SkillEffect,
        target: SkillTarget,
    ) -> Self {
        Self {
            name,
            mana_cost,
            effect,
            target,
        }
    }
}

/// Result of a resolved skill, reported back for the battle log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillOutcome {
    /// Damage that actually landed after defense.
    Damage(i32),
    /// New stat value and a readable description of the change.
    Buff { value: i32, description: String },
}

impl SkillEffect {
    /// Applies the effect to `target` and reports what changed.
    pub fn apply(&self, caster_attack: i32, target: &mut dyn Combatant) -> SkillOutcome {
        match *self {
            SkillEffect::Damage(formula) => {
                let applied = target.take_damage(formula.evaluate(caster_attack));
                SkillOutcome::Damage(applied)
            }
            SkillEffect::Buff { stat, delta } => {
                let stats = target.stats_mut();
                let before = match stat {
                    StatKind::Attack => stats.attack,
                    StatKind::Defense => stats.defense,
                    StatKind::Health => stats.health,
                };
                let value = match stat {
                    StatKind::Attack => {
                        stats.attack += delta;
                        stats.attack
                    }
                    StatKind::Defense => {
                        stats.defense = (stats.defense + delta).max(0);
                        stats.defense
                    }
                    StatKind::Health => {
                        stats.heal(delta);
                        stats.health
                    }
                };
                let description = format!("{} {stat} {before} -> {value}", target.name());
                SkillOutcome::Buff { value, description }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Difficulty, HeroArchetype};
    use crate::state::{Boss, Hero};

    #[test]
    fn formulas_follow_caster_attack() {
        assert_eq!(DamageFormula::Fixed(45).evaluate(99), 45);
        assert_eq!(DamageFormula::AttackPlus(10).evaluate(25), 35);
        assert_eq!(DamageFormula::AttackTimes(2).evaluate(40), 80);
    }

    #[test]
    fn damage_effect_reports_applied_amount() {
        let mut boss = Boss::new(Difficulty::Medium);
        let effect = SkillEffect::Damage(DamageFormula::AttackTimes(2));
        assert_eq!(effect.apply(40, &mut boss), SkillOutcome::Damage(70));
        assert_eq!(boss.stats.health, 430);
    }

    #[test]
    fn defense_buff_returns_new_value() {
        let mut warrior = Hero::new(HeroArchetype::Warrior);
        let effect = SkillEffect::Buff {
            stat: StatKind::Defense,
            delta: 5,
        };
        let outcome = effect.apply(25, &mut warrior);
        assert_eq!(
            outcome,
            SkillOutcome::Buff {
                value: 20,
                description: "Warrior defense 15 -> 20".to_string(),
            }
        );
        assert_eq!(warrior.stats.defense, 20);
    }

    #[test]
    fn health_buff_is_capped() {
        let mut mage = Hero::new(HeroArchetype::Mage);
        mage.stats.health = 70;
        let effect = SkillEffect::Buff {
            stat: StatKind::Health,
            delta: 30,
        };
        let SkillOutcome::Buff { value, .. } = effect.apply(15, &mut mage) else {
            panic!("expected buff outcome");
        };
        assert_eq!(value, 80);
    }
}
