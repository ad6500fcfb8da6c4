//! The fixed pool of hero archetypes a party is drafted from.

use crate::action::{DamageFormula, Skill, SkillEffect, SkillTarget, StatKind};

/// One of the six recruitable hero classes. Declaration order is pool order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum HeroArchetype {
    Warrior,
    Mage,
    Archer,
    Priest,
    Rogue,
    Paladin,
}

/// Starting stats and skill list for an archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroTemplate {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub mana: i32,
    pub skills: &'static [Skill],
}

const WARRIOR_SKILLS: &[Skill] = &[
    Skill::new(
        "Power Strike",
        10,
        SkillEffect::Damage(DamageFormula::AttackPlus(10)),
        SkillTarget::Boss,
    ),
    Skill::new(
        "Shield Wall",
        8,
        SkillEffect::Buff {
            stat: StatKind::Defense,
            delta: 5,
        },
        SkillTarget::Caster,
    ),
];

const MAGE_SKILLS: &[Skill] = &[
    Skill::new(
        "Fireball",
        15,
        SkillEffect::Damage(DamageFormula::AttackTimes(2)),
        SkillTarget::Boss,
    ),
    Skill::new(
        "Ice Lance",
        10,
        SkillEffect::Damage(DamageFormula::Fixed(45)),
        SkillTarget::Boss,
    ),
];

const ARCHER_SKILLS: &[Skill] = &[
    Skill::new(
        "Critical Shot",
        12,
        SkillEffect::Damage(DamageFormula::AttackTimes(2)),
        SkillTarget::Boss,
    ),
    Skill::new(
        "Eagle Eye",
        8,
        SkillEffect::Buff {
            stat: StatKind::Attack,
            delta: 5,
        },
        SkillTarget::Caster,
    ),
];

const PRIEST_SKILLS: &[Skill] = &[
    Skill::new(
        "Heal",
        15,
        SkillEffect::Buff {
            stat: StatKind::Health,
            delta: 30,
        },
        SkillTarget::WeakestAlly,
    ),
    Skill::new(
        "Holy Light",
        10,
        SkillEffect::Damage(DamageFormula::Fixed(35)),
        SkillTarget::Boss,
    ),
];

const ROGUE_SKILLS: &[Skill] = &[
    Skill::new(
        "Backstab",
        12,
        SkillEffect::Damage(DamageFormula::AttackPlus(15)),
        SkillTarget::Boss,
    ),
    Skill::new(
        "Poison Blade",
        10,
        SkillEffect::Damage(DamageFormula::Fixed(40)),
        SkillTarget::Boss,
    ),
];

const PALADIN_SKILLS: &[Skill] = &[
    Skill::new(
        "Holy Strike",
        12,
        SkillEffect::Damage(DamageFormula::AttackPlus(12)),
        SkillTarget::Boss,
    ),
    Skill::new(
        "Divine Aegis",
        10,
        SkillEffect::Buff {
            stat: StatKind::Defense,
            delta: 5,
        },
        SkillTarget::Caster,
    ),
];

impl HeroArchetype {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub const fn template(self) -> HeroTemplate {
        match self {
            HeroArchetype::Warrior => HeroTemplate {
                health: 120,
                attack: 25,
                defense: 15,
                mana: 30,
                skills: WARRIOR_SKILLS,
            },
            HeroArchetype::Mage => HeroTemplate {
                health: 80,
                attack: 40,
                defense: 5,
                mana: 60,
                skills: MAGE_SKILLS,
            },
            HeroArchetype::Archer => HeroTemplate {
                health: 90,
                attack: 30,
                defense: 8,
                mana: 40,
                skills: ARCHER_SKILLS,
            },
            HeroArchetype::Priest => HeroTemplate {
                health: 100,
                attack: 15,
                defense: 10,
                mana: 70,
                skills: PRIEST_SKILLS,
            },
            HeroArchetype::Rogue => HeroTemplate {
                health: 85,
                attack: 35,
                defense: 6,
                mana: 40,
                skills: ROGUE_SKILLS,
            },
            HeroArchetype::Paladin => HeroTemplate {
                health: 130,
                attack: 22,
                defense: 12,
                mana: 50,
                skills: PALADIN_SKILLS,
            },
        }
    }

    /// Maps a party-selection code (`1`-`6`) to an archetype.
    pub fn from_pool_index(index: usize) -> Option<Self> {
        use strum::IntoEnumIterator;
        index.checked_sub(1).and_then(|i| Self::iter().nth(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn pool_has_six_archetypes_with_two_distinct_skills() {
        assert_eq!(HeroArchetype::COUNT, 6);
        for archetype in HeroArchetype::iter() {
            let skills = archetype.template().skills;
            assert_eq!(skills.len(), 2, "{archetype}");
            assert_ne!(skills[0].name, skills[1].name);
        }
    }

    #[test]
    fn pool_index_is_one_based() {
        assert_eq!(HeroArchetype::from_pool_index(1), Some(HeroArchetype::Warrior));
        assert_eq!(HeroArchetype::from_pool_index(6), Some(HeroArchetype::Paladin));
        assert_eq!(HeroArchetype::from_pool_index(0), None);
        assert_eq!(HeroArchetype::from_pool_index(7), None);
    }

    #[test]
    fn names_render_for_display() {
        assert_eq!(HeroArchetype::Priest.name(), "Priest");
        assert_eq!(HeroArchetype::Rogue.to_string(), "Rogue");
    }
}
