//! Static overworld layout served through [`game_core::MapOracle`].
use game_core::{MapDimensions, MapOracle, StaticTile, TerrainKind, TilePosition};
use std::collections::HashMap;

/// MapOracle implementation with static map data.
///
/// Holds the immutable terrain grid; tiles missing from the table fall back to
/// the map's default terrain.
pub struct MapOracleImpl {
    name: String,
    dimensions: MapDimensions,
    tiles: HashMap<TilePosition, StaticTile>,
}

impl MapOracleImpl {
    pub fn new(
        name: impl Into<String>,
        dimensions: MapDimensions,
        tiles: HashMap<TilePosition, StaticTile>,
    ) -> Self {
        Self {
            name: name.into(),
            dimensions,
            tiles,
        }
    }

    /// Creates an open grass field, handy for tests and demos.
    pub fn open_field(width: u32, height: u32) -> Self {
        let dimensions = MapDimensions::new(width, height);
        let mut tiles = HashMap::new();
        for x in 0..width as i32 {
            for y in 0..height as i32 {
                tiles.insert(TilePosition::new(x, y), StaticTile::new(TerrainKind::Grass));
            }
        }
        Self::new("open_field", dimensions, tiles)
    }

    /// Identifier the map was loaded under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl MapOracle for MapOracleImpl {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: TilePosition) -> Option<StaticTile> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(self.tiles.get(&position).copied().unwrap_or_default())
    }
}
