//! State management errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemHandle;

/// Errors raised by inventory operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("inventory is full (capacity: {capacity})")]
    Full { capacity: usize },

    #[error("item {handle:?} is not carried")]
    NotCarried { handle: ItemHandle },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "INVENTORY_FULL",
            Self::NotCarried { .. } => "INVENTORY_NOT_CARRIED",
        }
    }
}

/// Errors raised while building or mutating the entity list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("entity ID overflow (current: {current})")]
    EntityIdOverflow { current: u32 },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EntityIdOverflow { .. } => "STATE_ENTITY_ID_OVERFLOW",
        }
    }
}
