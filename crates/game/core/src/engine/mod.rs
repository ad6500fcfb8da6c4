//! Turn engine: resolves hero actions and full rounds.
//!
//! The [`BattleEngine`] borrows the battle, the log and the RNG handle for the
//! duration of one input event. Every combat mutation goes through it, so the
//! order of RNG draws (and therefore seeded replay) is fixed here:
//!
//! 1. hero action roll (attack only; skills draw nothing)
//! 2. boss target pick
//! 3. boss damage roll

mod actions;
mod turns;

use crate::action::{ActionError, AttackStyle};
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{Battle, BattleLog};

/// Turn-ending choices of the protagonist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Attack(AttackStyle),
    /// Skill by position in the protagonist's list (0-based).
    Skill(usize),
    Skip,
}

/// Where the battle stands after a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    Continue,
    Victory,
    Defeat,
}

impl RoundOutcome {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, RoundOutcome::Continue)
    }
}

/// Who a skill is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetRef {
    Boss,
    Hero(usize),
}

/// Mutating view over one battle for the duration of a single input.
pub struct BattleEngine<'a, R: RngOracle> {
    battle: &'a mut Battle,
    log: &'a mut BattleLog,
    rng: &'a mut R,
    config: &'a GameConfig,
}

impl<'a, R: RngOracle> BattleEngine<'a, R> {
    pub fn new(
        battle: &'a mut Battle,
        log: &'a mut BattleLog,
        rng: &'a mut R,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            battle,
            log,
            rng,
            config,
        }
    }

    /// Resolves the protagonist's action and, if it succeeded, the rest of the round.
    ///
    /// On error nothing was mutated and no round was consumed.
    pub fn take_turn(&mut self, action: &TurnAction) -> Result<RoundOutcome, ActionError> {
        match action {
            TurnAction::Attack(style) => {
                self.attack(*style)?;
            }
            TurnAction::Skill(index) => {
                let caster = self.battle.party.protagonist_index();
                let hero = self.battle.party.protagonist();
                let skill = hero
                    .skills
                    .get(*index)
                    .ok_or_else(|| ActionError::UnknownSkill(format!("#{}", index + 1)))?;
                let name = skill.name;
                let target = self.resolve_target(caster, skill.target);
                self.use_skill(caster, name, target)?;
            }
            TurnAction::Skip => {
                let name = self.battle.party.protagonist().archetype.name();
                self.log.push(format!("{name} skips the turn"));
            }
        }
        Ok(self.advance_round())
    }
}
