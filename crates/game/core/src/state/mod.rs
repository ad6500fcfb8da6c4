//! Battle state: combatants, the party and the battle log.
mod battle;
mod combatant;
mod log;
mod party;

pub use battle::Battle;
pub use combatant::{Boss, CombatStats, Combatant, Hero};
pub use log::BattleLog;
pub use party::{DraftChange, Party, PartyDraft};
