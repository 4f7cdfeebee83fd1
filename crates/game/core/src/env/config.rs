//! Configuration oracle for exposing game tunables to the engine.

use crate::config::GameConfig;

/// Provides access to runtime configuration values.
pub trait ConfigOracle: Send + Sync {
    fn game_config(&self) -> GameConfig;
}
