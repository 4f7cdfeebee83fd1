//! Authoritative game state representation.
//!
//! This module owns the data structures that describe entities, the camera
//! and frame bookkeeping. Runtime layers clone or query this state but mutate
//! it exclusively through the engine.
pub mod error;
pub mod types;

pub use error::{InventoryError, StateError};
pub use types::{
    Direction, EntitiesState, EntityId, Facing, InventoryState, ItemHandle, ItemState,
    PassiveState, PlayerState, Position, TilePosition, UnitKind, UnitRole, UnitState, UnitStats,
    VillagerState,
};

use crate::camera::Camera;

/// Canonical snapshot of the game world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Seed for deterministic random rolls, fixed for the whole session.
    ///
    /// Combined with `nonce` to derive a unique seed per roll.
    pub game_seed: u64,

    /// Frames processed so far.
    pub nonce: u64,

    /// Simulated milliseconds since the session started.
    pub clock: u64,

    pub entities: EntitiesState,
    pub camera: Camera,

    /// Sequential entity ID allocator. IDs are never reused; 0 is the player.
    next_entity_id: u32,
}

impl GameState {
    /// Creates a world holding only the player.
    pub fn new(game_seed: u64, mut player: UnitState, camera: Camera) -> Self {
        player.id = EntityId::PLAYER;
        let mut state = Self {
            game_seed,
            nonce: 0,
            clock: 0,
            entities: EntitiesState::new(PlayerState::new(player)),
            camera,
            next_entity_id: EntityId::PLAYER.0 + 1,
        };
        state.camera.update(state.entities.player.unit.position);
        state
    }

    /// Allocates a new unique EntityId.
    pub fn allocate_entity_id(&mut self) -> Result<EntityId, StateError> {
        let current = self.next_entity_id;
        self.next_entity_id = current
            .checked_add(1)
            .ok_or(StateError::EntityIdOverflow { current })?;
        Ok(EntityId(current))
    }

    /// Spawns a non-player unit, assigning it a fresh ID.
    pub fn spawn_unit(&mut self, mut unit: UnitState) -> Result<EntityId, StateError> {
        let id = self.allocate_entity_id()?;
        unit.id = id;
        self.entities.units.push(unit);
        Ok(id)
    }

    /// Places an item in the world, assigning it a fresh ID.
    pub fn spawn_item(
        &mut self,
        handle: ItemHandle,
        position: Position,
    ) -> Result<EntityId, StateError> {
        let id = self.allocate_entity_id()?;
        self.entities
            .items
            .push(ItemState::new(id, handle, position));
        Ok(id)
    }

    pub fn player(&self) -> &UnitState {
        &self.entities.player.unit
    }
}
