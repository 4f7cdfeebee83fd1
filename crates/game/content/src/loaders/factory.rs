//! Content factory for loading every data file from one directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use game_core::{
    GameConfig, ItemDefinition, MapDimensions, StaticTile, TilePosition, UnitTemplate,
    VillagerScript,
};

use crate::loaders::{
    ConfigLoader, DialogueLoader, ItemLoader, LoadResult, MapLoader, UnitLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── units.ron
/// ├── items.ron
/// ├── dialogue.ron
/// ├── maps/
/// │   └── overworld.ron
/// └── scenarios/
///     └── overworld.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load unit templates from `units.ron`.
    pub fn load_units(&self) -> LoadResult<Vec<(String, UnitTemplate)>> {
        UnitLoader::load(&self.data_dir.join("units.ron"))
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load villager scripts from `dialogue.ron`.
    pub fn load_dialogue(&self) -> LoadResult<Vec<(String, VillagerScript)>> {
        DialogueLoader::load(&self.data_dir.join("dialogue.ron"))
    }

    /// Load a map from `maps/{map_name}.ron`.
    ///
    /// Returns terrain data only. For entity placement, see [`Self::scenario_path`].
    pub fn load_map(
        &self,
        map_name: &str,
    ) -> LoadResult<(MapDimensions, HashMap<TilePosition, StaticTile>)> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Path of `scenarios/{scenario_name}.ron`.
    pub fn scenario_path(&self, scenario_name: &str) -> PathBuf {
        self.data_dir
            .join("scenarios")
            .join(format!("{}.ron", scenario_name))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use game_core::{ItemEffect, ItemHandle, UnitKind};

    use super::*;
    use crate::bundled_data_dir;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.scenario_path("overworld"),
            Path::new("/tmp/data/scenarios/overworld.ron")
        );
    }

    #[test]
    fn bundled_content_loads() {
        let factory = ContentFactory::new(bundled_data_dir());

        let config = factory.load_config().unwrap();
        assert_eq!(config, GameConfig::default());

        let units = factory.load_units().unwrap();
        assert!(units.iter().any(|(key, t)| key == "player" && t.kind == UnitKind::Player));

        let items = factory.load_items().unwrap();
        let effects: Vec<_> = items.iter().map(|item| (item.handle, item.effect)).collect();
        assert_eq!(
            effects,
            vec![
                (ItemHandle(0), ItemEffect::MaxHealth(80)),
                (ItemHandle(1), ItemEffect::Damage(30)),
                (ItemHandle(2), ItemEffect::CooldownReduction(300)),
                (ItemHandle(3), ItemEffect::Quest),
            ]
        );

        let dialogue = factory.load_dialogue().unwrap();
        let names: Vec<_> = dialogue.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Elvira", "Garth", "Prince Aldric"]);

        let (dimensions, tiles) = factory.load_map("overworld").unwrap();
        assert_eq!(tiles.len(), dimensions.tile_count());
        assert!(factory.scenario_path("overworld").exists());
    }
}
