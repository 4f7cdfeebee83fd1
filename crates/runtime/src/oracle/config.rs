//! Config oracle implementation for runtime.

use game_core::{ConfigOracle, GameConfig};

/// Runtime implementation of ConfigOracle that wraps GameConfig.
pub struct ConfigOracleImpl {
    config: GameConfig,
}

impl ConfigOracleImpl {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }
}

impl Default for ConfigOracleImpl {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl ConfigOracle for ConfigOracleImpl {
    fn game_config(&self) -> GameConfig {
        self.config
    }
}
