//! Session orchestration for the frame-driven game simulation.
//!
//! This crate wires together oracle implementations, scenario loading, the
//! per-frame engine and a topic event bus. Consumers embed [`Runtime`] to
//! advance frames and subscribe to events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`events`] provides the topic-based event bus
//! - [`oracle`] adapts loaded content to the `game-core` oracle traits
//! - [`scenario`] turns entity placements into an initial [`game_core::GameState`]
pub mod error;
pub mod events;
pub mod oracle;
pub mod runtime;
pub mod scenario;

pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, GameStateEvent, SessionEvent, Topic};
pub use oracle::{
    ConfigOracleImpl, DialogueOracleImpl, ItemOracleImpl, MapOracleImpl, OracleBundle,
    UnitOracleImpl,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use scenario::{EntityPlacement, PLAYER_TEMPLATE, PlacementKind, Scenario};
