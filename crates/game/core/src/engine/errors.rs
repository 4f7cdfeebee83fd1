//! Error types for the frame engine.

use crate::env::OracleError;
use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::{EntityId, InventoryError, ItemHandle};

/// Errors surfaced while advancing a frame.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("item {item} refers to unknown definition {handle:?}")]
    ItemDefinitionMissing {
        item: EntityId,
        handle: ItemHandle,
        context: ErrorContext,
    },
}

impl ExecuteError {
    pub fn item_definition_missing(item: EntityId, handle: ItemHandle, nonce: u64) -> Self {
        Self::ItemDefinitionMissing {
            item,
            handle,
            context: ErrorContext::new(nonce)
                .with_unit(EntityId::PLAYER)
                .with_message("pickup"),
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(error) => error.severity(),
            Self::Inventory(error) => error.severity(),
            Self::ItemDefinitionMissing { .. } => ErrorSeverity::Internal,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::ItemDefinitionMissing { context, .. } => Some(context),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(error) => error.error_code(),
            Self::Inventory(error) => error.error_code(),
            Self::ItemDefinitionMissing { .. } => "EXECUTE_ITEM_DEFINITION_MISSING",
        }
    }
}
