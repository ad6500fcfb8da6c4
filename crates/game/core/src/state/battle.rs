use crate::env::Difficulty;

use super::combatant::{Boss, Combatant};
use super::party::Party;

/// Combatants of an in-progress battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Battle {
    pub party: Party,
    pub boss: Boss,
}

impl Battle {
    pub fn new(party: Party, difficulty: Difficulty) -> Self {
        Self {
            party,
            boss: Boss::new(difficulty),
        }
    }

    pub fn boss_alive(&self) -> bool {
        self.boss.is_alive()
    }
}
