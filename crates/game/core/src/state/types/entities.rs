use super::{EntityId, InventoryState, ItemHandle, ItemState, Position, UnitState};

/// The player's unit plus everything only the player owns.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub unit: UnitState,
    pub inventory: InventoryState,
}

impl PlayerState {
    pub fn new(unit: UnitState) -> Self {
        Self {
            unit,
            inventory: InventoryState::empty(),
        }
    }
}

/// Aggregate state for every entity in the world.
///
/// The player is kept apart from `units`; everything else the world updates
/// each frame lives in `units`, in spawn order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: PlayerState,
    pub units: Vec<UnitState>,
    pub items: Vec<ItemState>,
}

impl EntitiesState {
    pub fn new(player: PlayerState) -> Self {
        Self {
            player,
            units: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Returns a unit by ID, including the player.
    pub fn unit(&self, id: EntityId) -> Option<&UnitState> {
        if self.player.unit.id == id {
            return Some(&self.player.unit);
        }
        self.units.iter().find(|unit| unit.id == id)
    }

    pub fn unit_mut(&mut self, id: EntityId) -> Option<&mut UnitState> {
        if self.player.unit.id == id {
            return Some(&mut self.player.unit);
        }
        self.units.iter_mut().find(|unit| unit.id == id)
    }

    /// Player first, then the rest in spawn order.
    pub fn all_units(&self) -> impl Iterator<Item = &UnitState> {
        std::iter::once(&self.player.unit).chain(self.units.iter())
    }

    /// IDs of non-player units strictly closer than `range` to `position`.
    pub fn units_near(&self, position: Position, range: f64) -> Vec<EntityId> {
        self.units
            .iter()
            .filter(|unit| unit.position.distance(position) < range)
            .map(|unit| unit.id)
            .collect()
    }

    /// IDs of world items strictly closer than `range` to `position`.
    pub fn items_near(&self, position: Position, range: f64) -> Vec<EntityId> {
        self.items
            .iter()
            .filter(|item| item.position.distance(position) < range)
            .map(|item| item.id)
            .collect()
    }

    /// Whether an item with this handle still lies somewhere in the world.
    pub fn contains_item(&self, handle: ItemHandle) -> bool {
        self.items.iter().any(|item| item.handle == handle)
    }

    pub fn remove_unit(&mut self, id: EntityId) -> Option<UnitState> {
        let index = self.units.iter().position(|unit| unit.id == id)?;
        Some(self.units.remove(index))
    }

    pub fn remove_item(&mut self, id: EntityId) -> Option<ItemState> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{UnitRole, UnitStats};

    fn entities() -> EntitiesState {
        let player = UnitState::new(
            EntityId::PLAYER,
            "Player",
            Position::new(100.0, 100.0),
            UnitStats::new(100, 10, 500, 0.25),
            UnitRole::Player,
        );
        let mut entities = EntitiesState::new(PlayerState::new(player));
        entities.units.push(UnitState::new(
            EntityId(1),
            "Bat",
            Position::new(149.0, 100.0),
            UnitStats::new(20, 2, 800, 0.2),
            UnitRole::Aggressive,
        ));
        entities.units.push(UnitState::new(
            EntityId(2),
            "Bat",
            Position::new(150.0, 100.0),
            UnitStats::new(20, 2, 800, 0.2),
            UnitRole::Aggressive,
        ));
        entities
            .items
            .push(ItemState::new(EntityId(3), ItemHandle(1), Position::new(90.0, 90.0)));
        entities
    }

    #[test]
    fn range_queries_use_strict_distance() {
        let entities = entities();
        let origin = entities.player.unit.position;
        assert_eq!(entities.units_near(origin, 50.0), vec![EntityId(1)]);
        assert_eq!(entities.items_near(origin, 50.0), vec![EntityId(3)]);
    }

    #[test]
    fn player_is_not_part_of_units() {
        let entities = entities();
        assert!(entities.units_near(entities.player.unit.position, 1.0).is_empty());
        assert_eq!(entities.all_units().count(), 3);
        assert!(entities.unit(EntityId::PLAYER).is_some());
    }

    #[test]
    fn contains_item_tracks_removal() {
        let mut entities = entities();
        assert!(entities.contains_item(ItemHandle(1)));
        entities.remove_item(EntityId(3));
        assert!(!entities.contains_item(ItemHandle(1)));
    }
}
