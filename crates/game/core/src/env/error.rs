//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemHandle;

/// Errors that occur when accessing oracle data.
///
/// Missing oracles are fatal since the engine cannot run a frame without
/// them; dangling references into content are validation errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("MapOracle not available")]
    MapNotAvailable,

    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("UnitOracle not available")]
    UnitsNotAvailable,

    #[error("DialogueOracle not available")]
    DialogueNotAvailable,

    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("item definition {0:?} not found")]
    ItemNotFound(ItemHandle),

    #[error("unit template '{0}' not found")]
    UnitTemplateNotFound(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            MapNotAvailable | ItemsNotAvailable | UnitsNotAvailable | DialogueNotAvailable
            | ConfigNotAvailable | RngNotAvailable => ErrorSeverity::Fatal,

            ItemNotFound(_) | UnitTemplateNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            MapNotAvailable => "ORACLE_MAP_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            UnitsNotAvailable => "ORACLE_UNITS_NOT_AVAILABLE",
            DialogueNotAvailable => "ORACLE_DIALOGUE_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            UnitTemplateNotFound(_) => "ORACLE_UNIT_TEMPLATE_NOT_FOUND",
        }
    }
}
