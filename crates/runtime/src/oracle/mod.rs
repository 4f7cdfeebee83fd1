//! Runtime wrappers around static game content oracles.
//!
//! These implementations expose `game-core` oracle traits and bundle them into
//! an [`OracleBundle`] so the runtime can build [`game_core::Env`] views on
//! demand. The data is immutable at runtime; dynamic state lives in
//! [`game_core::GameState`].
mod config;
mod dialogue;
mod items;
mod map;
mod units;

use game_core::{Env, GameConfig, GameEnv, PcgRng};
use std::sync::Arc;

pub use config::ConfigOracleImpl;
pub use dialogue::DialogueOracleImpl;
pub use items::ItemOracleImpl;
pub use map::MapOracleImpl;
pub use units::UnitOracleImpl;

/// Shared handles to every oracle the engine needs.
#[derive(Clone)]
pub struct OracleBundle {
    pub(crate) map: Arc<MapOracleImpl>,
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) units: Arc<UnitOracleImpl>,
    pub(crate) dialogue: Arc<DialogueOracleImpl>,
    pub(crate) config: Arc<ConfigOracleImpl>,
    pub(crate) rng: PcgRng,
}

impl OracleBundle {
    pub fn new(
        map: Arc<MapOracleImpl>,
        items: Arc<ItemOracleImpl>,
        units: Arc<UnitOracleImpl>,
        dialogue: Arc<DialogueOracleImpl>,
        config: Arc<ConfigOracleImpl>,
    ) -> Self {
        Self {
            map,
            items,
            units,
            dialogue,
            config,
            rng: PcgRng,
        }
    }

    /// Converts the bundle into the trait-object environment used by game-core.
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(
            self.map.as_ref(),
            self.items.as_ref(),
            self.units.as_ref(),
            self.dialogue.as_ref(),
            self.config.as_ref(),
            &self.rng,
        )
        .as_game_env()
    }

    pub fn map(&self) -> &MapOracleImpl {
        &self.map
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }

    pub fn units(&self) -> &UnitOracleImpl {
        &self.units
    }

    pub fn dialogue(&self) -> &DialogueOracleImpl {
        &self.dialogue
    }

    pub fn game_config(&self) -> GameConfig {
        self.config.config()
    }
}
