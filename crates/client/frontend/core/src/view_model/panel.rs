//! Data for the status panel under the map.

use game_core::{Facing, GameConfig, GameState, ItemHandle, ItemOracle, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventorySlot {
    pub handle: ItemHandle,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerPanel {
    pub name: String,
    pub position: Position,
    pub facing: Facing,
    pub hp: i32,
    pub max_hp: i32,
    pub health: f64,
    /// Maximum damage per blow.
    pub damage: u32,
    /// Attack cooldown in milliseconds, shown as "Rate".
    pub cooldown: u32,
    /// Whether the next attack would land right now.
    pub ready: bool,
    pub inventory: Vec<InventorySlot>,
    pub capacity: usize,
}

impl PlayerPanel {
    pub fn from_state<I>(state: &GameState, items: &I) -> Self
    where
        I: ItemOracle + ?Sized,
    {
        let player = &state.entities.player;
        let unit = &player.unit;
        let inventory = player
            .inventory
            .iter()
            .map(|handle| InventorySlot {
                handle,
                name: items
                    .definition(handle)
                    .map_or_else(|| format!("item {}", handle.0), |def| def.name),
            })
            .collect();

        Self {
            name: unit.name.clone(),
            position: unit.position,
            facing: unit.facing,
            hp: unit.stats.hp,
            max_hp: unit.stats.max_hp,
            health: unit.stats.health_ratio(),
            damage: unit.stats.damage,
            cooldown: unit.stats.cooldown,
            ready: unit.is_ready(),
            inventory,
            capacity: GameConfig::MAX_INVENTORY_SLOTS,
        }
    }
}
