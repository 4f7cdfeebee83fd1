//! View-model snapshots derived from [`game_core::GameState`].
//!
//! A [`ViewModel`] is rebuilt after every frame. It resolves names through the
//! oracles and keeps only what lies inside the camera, so renderers never
//! touch the state or the oracles directly.
mod entities;
mod map;
mod panel;

pub use entities::{ItemView, UnitView};
pub use map::MapView;
pub use panel::{InventorySlot, PlayerPanel};

use game_core::{Camera, GameEnv, GameState, OracleError};

#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub nonce: u64,
    /// Game clock in milliseconds.
    pub clock: u64,
    pub camera: Camera,
    /// Terrain under the viewport.
    pub map: MapView,
    pub player: PlayerPanel,
    /// Non-player units inside the viewport, in state order.
    pub units: Vec<UnitView>,
    /// Ground items inside the viewport.
    pub items: Vec<ItemView>,
}

impl ViewModel {
    /// # Errors
    ///
    /// Returns an [`OracleError`] if the map or item oracle is missing.
    pub fn from_state(state: &GameState, env: &GameEnv<'_>) -> Result<Self, OracleError> {
        let map = env.map()?;
        let items = env.items()?;
        let camera = state.camera;

        Ok(Self {
            nonce: state.nonce,
            clock: state.clock,
            camera,
            map: MapView::from_camera(map, &camera),
            player: PlayerPanel::from_state(state, items),
            units: entities::visible_units(state),
            items: entities::visible_items(state, items),
        })
    }

    /// Villagers in view that are currently speaking.
    pub fn speaking(&self) -> impl Iterator<Item = &UnitView> {
        self.units.iter().filter(|unit| unit.dialogue.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{
        ConfigOracle, DialogueOracle, EntityId, Env, GameConfig, ItemDefinition, ItemEffect,
        ItemHandle, ItemOracle, MapDimensions, MapOracle, PcgRng, Position, StaticTile,
        TerrainKind, TilePosition, UnitOracle, UnitRole, UnitState, UnitStats, UnitTemplate,
        VillagerScript, VillagerState,
    };

    /// 30x30 grass with a water column at x = 12.
    struct Meadow;

    impl MapOracle for Meadow {
        fn dimensions(&self) -> MapDimensions {
            MapDimensions::new(30, 30)
        }

        fn tile(&self, position: TilePosition) -> Option<StaticTile> {
            if !self.contains(position) {
                return None;
            }
            let terrain = if position.x == 12 {
                TerrainKind::Water
            } else {
                TerrainKind::Grass
            };
            Some(StaticTile::new(terrain))
        }
    }

    struct Items;

    impl ItemOracle for Items {
        fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
            self.all_definitions().into_iter().find(|d| d.handle == handle)
        }

        fn all_definitions(&self) -> Vec<ItemDefinition> {
            vec![
                ItemDefinition::new(ItemHandle(0), "Amulet of Vitality", ItemEffect::MaxHealth(80)),
                ItemDefinition::new(ItemHandle(1), "Sword of Strength", ItemEffect::Damage(30)),
            ]
        }
    }

    struct Nobody;

    impl UnitOracle for Nobody {
        fn template(&self, _key: &str) -> Option<UnitTemplate> {
            None
        }
    }

    impl DialogueOracle for Nobody {
        fn script(&self, _villager: &str) -> Option<VillagerScript> {
            None
        }
    }

    impl ConfigOracle for Nobody {
        fn game_config(&self) -> GameConfig {
            GameConfig::default()
        }
    }

    fn state() -> GameState {
        let player = UnitState::new(
            EntityId::PLAYER,
            "Player",
            Position::new(738.0, 549.0),
            UnitStats::new(100, 26, 600, 0.25),
            UnitRole::Player,
        );
        let mut state = GameState::new(3, player, Camera::default());
        state.entities.player.inventory.push(ItemHandle(1)).unwrap();

        let mut talker = VillagerState::idle(4000);
        talker.dialogue = Some("Hello there.".into());
        talker.talk_elapsed = 0;
        state
            .spawn_unit(UnitState::new(
                EntityId::PLAYER,
                "Garth",
                Position::new(830.0, 460.0),
                UnitStats::new(1, 0, 0, 0.0),
                UnitRole::Villager(talker),
            ))
            .unwrap();
        state
            .spawn_unit(UnitState::new(
                EntityId::PLAYER,
                "Zombie",
                Position::new(1900.0, 1900.0),
                UnitStats::new(60, 10, 800, 0.25),
                UnitRole::Aggressive,
            ))
            .unwrap();
        state.spawn_item(ItemHandle(0), Position::new(700.0, 500.0)).unwrap();
        state
    }

    fn view() -> ViewModel {
        let env = Env::with_all(&Meadow, &Items, &Nobody, &Nobody, &Nobody, &PcgRng);
        ViewModel::from_state(&state(), &env.as_game_env()).unwrap()
    }

    #[test]
    fn keeps_only_what_the_camera_sees() {
        let view = view();
        let names: Vec<&str> = view.units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Garth"]);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "Amulet of Vitality");
    }

    #[test]
    fn panel_lists_inventory_by_name() {
        let panel = view().player;
        assert_eq!(panel.hp, 100);
        assert_eq!(panel.max_hp, 100);
        assert_eq!(panel.damage, 26);
        assert_eq!(panel.cooldown, 600);
        let names: Vec<&str> = panel.inventory.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Sword of Strength"]);
    }

    #[test]
    fn speaking_villagers_are_exposed() {
        let view = view();
        let lines: Vec<&str> = view
            .speaking()
            .filter_map(|u| u.dialogue.as_deref())
            .collect();
        assert_eq!(lines, ["Hello there."]);
    }

    #[test]
    fn map_covers_the_viewport() {
        let view = view();
        // camera at (338, 284): tiles from (4, 3), 13 x 9 of them
        assert_eq!(view.map.origin, TilePosition::new(4, 3));
        assert_eq!((view.map.columns, view.map.rows), (13, 9));
        assert_eq!(
            view.map.terrain_at(TilePosition::new(12, 5)),
            TerrainKind::Water
        );
        assert_eq!(
            view.map.terrain_at(TilePosition::new(100, 5)),
            TerrainKind::Void
        );
    }

    #[test]
    fn missing_map_oracle_is_reported() {
        let env = Env::new(
            None::<&Meadow>,
            Some(&Items),
            Some(&Nobody),
            Some(&Nobody),
            Some(&Nobody),
            Some(&PcgRng),
        );
        let result = ViewModel::from_state(&state(), &env.as_game_env());
        assert_eq!(result.err(), Some(OracleError::MapNotAvailable));
    }
}
