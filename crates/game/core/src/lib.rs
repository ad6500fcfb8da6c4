//! Deterministic party-versus-boss battle rules.
//!
//! `game-core` holds the whole battle: the combatant model, the hero roster
//! and boss tables, skill dispatch, the turn engine and the menu state
//! machine. It performs no I/O. A frontend drives a [`GameSession`] by
//! feeding raw input codes to [`GameSession::handle_input`] and renders
//! [`GameSession::snapshot`]. All combat mutation flows through
//! [`engine::BattleEngine`], and all randomness through a seedable
//! [`env::RngOracle`] handle, so a seeded session replays bit-for-bit.
pub mod action;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod env;
pub mod error;
pub mod session;
pub mod state;

pub use action::{
    ActionError, AttackStyle, DamageFormula, Skill, SkillEffect, SkillOutcome, SkillTarget,
    StatKind,
};
pub use config::GameConfig;
pub use diagnostics::{SelfCheck, help_lines, run_self_checks};
pub use engine::{BattleEngine, RoundOutcome, TargetRef, TurnAction};
pub use env::{BossProfile, Difficulty, HeroArchetype, PcgRng, RngOracle};
pub use error::{ErrorSeverity, GameError, InputError};
pub use session::{
    BossView, GameSession, HeroView, MenuState, PoolEntry, SessionSnapshot, SideEffect,
    SkillView, Transition,
};
pub use state::{Battle, BattleLog, Boss, CombatStats, Combatant, DraftChange, Hero, Party, PartyDraft};
