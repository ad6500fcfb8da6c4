//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`InputError`, `ActionError`) are defined next to the
//! code that produces them. This module provides the shared classification so
//! frontends can decide how to surface a failure without matching on every
//! variant.
//!
//! None of the errors in this crate are fatal: invalid input leaves the session
//! untouched, and resource shortfalls become in-fiction log lines.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same choice may succeed later (e.g. after mana regen)
/// - **Validation**: the input itself is malformed and should be re-entered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Rejected user input. The session state is left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputError {
    /// A menu expected a numeric choice.
    #[error("'{0}' is not a menu number")]
    NotANumber(String),

    /// Numeric choice outside the options offered by the current menu.
    #[error("option {index} is out of range (1-{max})")]
    OutOfRange { index: usize, max: usize },

    /// A command keyword the current menu does not understand.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// Seed entry that is neither empty nor a non-negative integer.
    #[error("seed must be a whole number, got '{0}'")]
    SeedNotNumeric(String),

    /// Tried to hand control to a fallen hero.
    #[error("{0} has fallen and cannot lead")]
    DeadHero(String),
}

impl GameError for InputError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InputError::*;
        match self {
            NotANumber(_) => "INPUT_NOT_A_NUMBER",
            OutOfRange { .. } => "INPUT_OUT_OF_RANGE",
            UnknownCommand(_) => "INPUT_UNKNOWN_COMMAND",
            SeedNotNumeric(_) => "INPUT_SEED_NOT_NUMERIC",
            DeadHero(_) => "INPUT_DEAD_HERO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_validation_failures() {
        let err = InputError::OutOfRange { index: 9, max: 6 };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(!err.severity().is_recoverable());
        assert_eq!(err.error_code(), "INPUT_OUT_OF_RANGE");
        assert_eq!(err.to_string(), "option 9 is out of range (1-6)");
    }

    #[test]
    fn severity_strings() {
        assert_eq!(ErrorSeverity::Recoverable.as_str(), "recoverable");
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert!(ErrorSeverity::Recoverable.is_recoverable());
    }
}
