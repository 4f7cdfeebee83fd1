//! Game rules and data types shared across the workspace.
//!
//! `game-core` defines the canonical world state, the read-only content
//! oracles and the per-frame engine. It performs no I/O: content arrives
//! through the [`env`] traits and all state mutation flows through
//! [`engine::GameEngine`].
pub mod camera;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use camera::Camera;
pub use config::GameConfig;
pub use engine::{ExecuteError, FrameOutcome, GameEngine, GameEvent, PlayerInput};
pub use env::{
    ConfigOracle, DialogueOracle, Env, GameEnv, ItemDefinition, ItemEffect, ItemOracle,
    MapDimensions, MapOracle, OracleError, PcgRng, RngOracle, StaticTile, TerrainKind,
    UnitOracle, UnitTemplate, VillagerScript,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use state::{
    Direction, EntitiesState, EntityId, Facing, GameState, InventoryError, InventoryState,
    ItemHandle, ItemState, PassiveState, PlayerState, Position, StateError, TilePosition,
    UnitKind, UnitRole, UnitState, UnitStats, VillagerState,
};
