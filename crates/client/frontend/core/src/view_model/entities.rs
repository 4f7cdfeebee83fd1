//! Units and items inside the viewport.

use game_core::{
    EntityId, Facing, GameState, ItemHandle, ItemOracle, Position, UnitKind, UnitState,
};

#[derive(Clone, Debug, PartialEq)]
pub struct UnitView {
    pub id: EntityId,
    pub name: String,
    pub kind: UnitKind,
    pub position: Position,
    pub facing: Facing,
    pub hp: i32,
    pub max_hp: i32,
    /// Health in `[0, 1]`, for bars.
    pub health: f64,
    /// Line shown above a speaking villager.
    pub dialogue: Option<String>,
}

impl UnitView {
    pub fn from_unit(unit: &UnitState) -> Self {
        Self {
            id: unit.id,
            name: unit.name.clone(),
            kind: unit.kind(),
            position: unit.position,
            facing: unit.facing,
            hp: unit.stats.hp,
            max_hp: unit.stats.max_hp,
            health: unit.stats.health_ratio(),
            dialogue: unit.dialogue().map(str::to_owned),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemView {
    pub id: EntityId,
    pub handle: ItemHandle,
    pub name: String,
    pub position: Position,
}

pub(super) fn visible_units(state: &GameState) -> Vec<UnitView> {
    state
        .entities
        .units
        .iter()
        .filter(|unit| state.camera.is_visible(unit.position))
        .map(UnitView::from_unit)
        .collect()
}

pub(super) fn visible_items<I>(state: &GameState, items: &I) -> Vec<ItemView>
where
    I: ItemOracle + ?Sized,
{
    state
        .entities
        .items
        .iter()
        .filter(|item| state.camera.is_visible(item.position))
        .map(|item| ItemView {
            id: item.id,
            handle: item.handle,
            name: items
                .definition(item.handle)
                .map_or_else(|| format!("item {}", item.handle.0), |def| def.name),
            position: item.position,
        })
        .collect()
}
