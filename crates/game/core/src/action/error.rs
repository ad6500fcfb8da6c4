//! Action execution errors.
//!
//! These never escape the session as input errors: a failed hero action is
//! turned into an in-fiction battle log line and the state stays put.

use crate::error::{ErrorSeverity, GameError};

/// Errors that can occur while resolving a hero's attack or skill.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Caster index does not name a party member.
    #[error("Actor not found")]
    ActorNotFound,

    /// Caster is down (health <= 0).
    #[error("Actor is dead")]
    ActorDead,

    /// Skill name not in the caster's list.
    #[error("Unknown skill '{0}'")]
    UnknownSkill(String),

    /// Target index does not name a party member, or the target is down.
    #[error("Invalid target")]
    InvalidTarget,

    /// Not enough mana for the skill or strong attack.
    #[error("Not enough mana: need {required}, have {available}")]
    InsufficientMana { required: i32, available: i32 },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            ActorNotFound | UnknownSkill(_) | InvalidTarget => ErrorSeverity::Validation,
            ActorDead | InsufficientMana { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            ActorNotFound => "ACTION_ACTOR_NOT_FOUND",
            ActorDead => "ACTION_ACTOR_DEAD",
            UnknownSkill(_) => "ACTION_UNKNOWN_SKILL",
            InvalidTarget => "ACTION_INVALID_TARGET",
            InsufficientMana { .. } => "ACTION_INSUFFICIENT_RESOURCES",
        }
    }
}
