//! Items lying in the world.

use super::{EntityId, Position};

/// Reference to an item definition stored outside the core (lookup via Env).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemHandle(pub u16);

/// An item on the ground, waiting to be picked up.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: EntityId,
    pub handle: ItemHandle,
    pub position: Position,
}

impl ItemState {
    pub fn new(id: EntityId, handle: ItemHandle, position: Position) -> Self {
        Self {
            id,
            handle,
            position,
        }
    }
}
