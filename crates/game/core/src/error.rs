//! Common error infrastructure for game-core.
//!
//! Domain errors (`OracleError`, `ExecuteError`, `InventoryError`) live next to
//! the code that raises them and implement [`GameError`] so callers can
//! classify them uniformly.

use crate::state::EntityId;

/// Severity level of an error, used for logging and recovery decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The frame can simply be retried or skipped.
    Recoverable,

    /// Invalid input, should not be retried unchanged.
    Validation,

    /// Unexpected state inconsistency; indicates a bug.
    Internal,

    /// Content or state is unusable and the session cannot continue.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

/// Contextual information captured where an error is raised.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    pub unit: Option<EntityId>,
    /// Frame nonce at the time of the error.
    pub nonce: u64,
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(nonce: u64) -> Self {
        Self {
            unit: None,
            nonce,
            message: None,
        }
    }

    #[must_use]
    pub const fn with_unit(mut self, unit: EntityId) -> Self {
        self.unit = Some(unit);
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Common trait for all game-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Stable identifier for this error variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
