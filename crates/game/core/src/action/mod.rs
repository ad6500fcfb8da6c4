//! Hero actions: basic attacks and the skill registry.
mod attack;
mod error;
mod skill;

pub use attack::{AttackStyle, boss_attack_bounds, roll_boss_attack};
pub use error::ActionError;
pub use skill::{DamageFormula, Skill, SkillEffect, SkillOutcome, SkillTarget, StatKind};
