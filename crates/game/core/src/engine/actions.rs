use crate::action::{ActionError, AttackStyle, SkillOutcome, SkillTarget};
use crate::env::RngOracle;
use crate::state::Combatant;

use super::{BattleEngine, TargetRef};

/// Hero action methods for BattleEngine.
impl<'a, R: RngOracle> BattleEngine<'a, R> {
    /// Protagonist attacks the boss. Returns the damage that landed.
    pub fn attack(&mut self, style: AttackStyle) -> Result<i32, ActionError> {
        let hero = self.battle.party.protagonist_mut();
        if !hero.is_alive() {
            return Err(ActionError::ActorDead);
        }
        let cost = style.mana_cost();
        if !hero.spend_mana(cost) {
            return Err(ActionError::InsufficientMana {
                required: cost,
                available: hero.mana,
            });
        }

        let name = hero.archetype.name();
        let raw = style.roll(hero.stats.attack, self.rng);
        let applied = self.battle.boss.take_damage(raw);

        let message = match style {
            AttackStyle::Normal => format!("{name} attacks! Damage: {applied}"),
            AttackStyle::Strong => format!("{name} uses a strong attack! Damage: {applied}"),
        };
        tracing::debug!(hero = name, %style, raw, applied, "hero attack");
        self.log.push(message);
        Ok(applied)
    }

    /// Concrete target for a skill's targeting rule.
    pub fn resolve_target(&self, caster: usize, rule: SkillTarget) -> TargetRef {
        match rule {
            SkillTarget::Boss => TargetRef::Boss,
            SkillTarget::Caster => TargetRef::Hero(caster),
            SkillTarget::WeakestAlly => {
                TargetRef::Hero(self.battle.party.weakest_living().unwrap_or(caster))
            }
        }
    }

    /// Casts `skill_name` from the caster's list at `target`.
    ///
    /// Validates everything before touching state: on error mana is unspent
    /// and no effect applied.
    pub fn use_skill(
        &mut self,
        caster: usize,
        skill_name: &str,
        target: TargetRef,
    ) -> Result<SkillOutcome, ActionError> {
        let hero = self
            .battle
            .party
            .hero(caster)
            .ok_or(ActionError::ActorNotFound)?;
        if !hero.is_alive() {
            return Err(ActionError::ActorDead);
        }
        let skill = *hero
            .skill(skill_name)
            .ok_or_else(|| ActionError::UnknownSkill(skill_name.to_string()))?;
        if hero.mana < skill.mana_cost {
            return Err(ActionError::InsufficientMana {
                required: skill.mana_cost,
                available: hero.mana,
            });
        }
        if let TargetRef::Hero(index) = target {
            match self.battle.party.hero(index) {
                Some(ally) if ally.is_alive() => {}
                _ => return Err(ActionError::InvalidTarget),
            }
        }

        let (caster_name, caster_attack) = {
            let hero = self
                .battle
                .party
                .hero_mut(caster)
                .ok_or(ActionError::ActorNotFound)?;
            hero.spend_mana(skill.mana_cost);
            (hero.archetype.name(), hero.stats.attack)
        };

        let outcome = match target {
            TargetRef::Boss => skill.effect.apply(caster_attack, &mut self.battle.boss),
            TargetRef::Hero(index) => {
                let ally = self
                    .battle
                    .party
                    .hero_mut(index)
                    .ok_or(ActionError::InvalidTarget)?;
                skill.effect.apply(caster_attack, ally)
            }
        };

        let message = match &outcome {
            SkillOutcome::Damage(amount) => {
                format!("{caster_name} uses {}! Damage: {amount}", skill.name)
            }
            SkillOutcome::Buff { description, .. } => {
                format!("{caster_name} uses {}: {description}", skill.name)
            }
        };
        tracing::debug!(hero = caster_name, skill = skill.name, ?outcome, "skill resolved");
        self.log.push(message);
        Ok(outcome)
    }
}
