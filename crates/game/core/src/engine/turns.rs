use crate::action::roll_boss_attack;
use crate::env::RngOracle;
use crate::state::Combatant;

use super::{BattleEngine, RoundOutcome};

/// Round resolution methods for BattleEngine.
impl<'a, R: RngOracle> BattleEngine<'a, R> {
    /// Finishes the round after the protagonist acted.
    ///
    /// Order: mana regen for the living, boss counter-attack (if the boss
    /// still stands), terminal check, then the lead passes to the next
    /// living hero.
    pub fn advance_round(&mut self) -> RoundOutcome {
        let regen = self.config.mana_regen;
        for hero in self.battle.party.heroes_mut() {
            if hero.is_alive() {
                hero.restore_mana(regen);
            }
        }

        if self.battle.boss_alive() {
            self.boss_attack();
        }

        let outcome = self.evaluate();
        match outcome {
            RoundOutcome::Victory => {
                tracing::info!(boss = %self.battle.boss.name, "boss defeated");
                self.log.push(format!("{} is defeated!", self.battle.boss.name));
            }
            RoundOutcome::Defeat => {
                tracing::info!("party wiped");
                self.log.push("The party has fallen...");
            }
            RoundOutcome::Continue => {
                if let Some(next) = self.battle.party.advance_protagonist() {
                    tracing::debug!(next, "protagonist advanced");
                }
            }
        }
        outcome
    }

    /// Terminal check. A dead boss wins even if the party is wiped too.
    pub fn evaluate(&self) -> RoundOutcome {
        if !self.battle.boss_alive() {
            RoundOutcome::Victory
        } else if self.battle.party.all_dead() {
            RoundOutcome::Defeat
        } else {
            RoundOutcome::Continue
        }
    }

    fn boss_attack(&mut self) {
        let living = self.battle.party.living_indices();
        let Some(&target_index) = self.rng.choose(&living) else {
            return;
        };
        let raw = roll_boss_attack(self.battle.boss.stats.attack, self.rng);
        let Some(target) = self.battle.party.hero_mut(target_index) else {
            return;
        };
        let applied = target.take_damage(raw);
        let message = format!(
            "{} attacks {}! Damage: {applied}",
            self.battle.boss.name,
            target.name()
        );
        tracing::debug!(target = target_index, raw, applied, "boss attack");
        self.log.push(message);
    }
}
