pub mod common;
pub mod entities;
pub mod inventory;
pub mod item;
pub mod unit;

pub use common::{Direction, EntityId, Facing, Position, TilePosition};
pub use entities::{EntitiesState, PlayerState};
pub use inventory::InventoryState;
pub use item::{ItemHandle, ItemState};
pub use unit::{PassiveState, UnitKind, UnitRole, UnitState, UnitStats, VillagerState};
