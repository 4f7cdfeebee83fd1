//! Unified error type surfaced by the runtime API.
//!
//! Wraps engine failures, scenario problems and state allocation errors so
//! clients can bubble them up with consistent context.
use std::path::PathBuf;

use game_core::{ErrorSeverity, ExecuteError, GameError, StateError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("runtime requires an initial state or a scenario before building")]
    MissingInitialState,

    #[error("failed to read scenario {}", path.display())]
    ScenarioRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario {}", path.display())]
    ScenarioParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("scenario must place exactly one player, found {found}")]
    PlayerPlacement { found: usize },

    #[error("unit template '{0}' not found")]
    UnknownTemplate(String),

    #[error("item handle {0} has no definition")]
    UnknownItem(u16),

    #[error("scenario targets map '{scenario}' but the loaded map is '{loaded}'")]
    MapMismatch { scenario: String, loaded: String },

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

impl RuntimeError {
    /// Severity of the underlying failure, for logging and frontend decisions.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Execute(error) => error.severity(),
            Self::State(error) => error.severity(),
            _ => ErrorSeverity::Fatal,
        }
    }
}
