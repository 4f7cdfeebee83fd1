//! Map data loader.
//!
//! Maps are described as a default terrain, a list of rectangle fills applied
//! in order, and individual tile overrides applied last. Entity placement is
//! handled separately via scenario files.

use std::collections::HashMap;
use std::path::Path;

use game_core::{MapDimensions, StaticTile, TerrainKind, TilePosition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Rectangle of uniform terrain, in tile coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainFill {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub terrain: TerrainKind,
}

/// Map file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapLayout {
    pub dimensions: (u32, u32),
    #[serde(default)]
    pub default: TerrainKind,
    #[serde(default)]
    pub fills: Vec<TerrainFill>,
    #[serde(default)]
    pub tiles: Vec<(u32, u32, TerrainKind)>,
}

impl MapLayout {
    /// Expands the layout into one tile per grid cell.
    pub fn build(&self) -> LoadResult<(MapDimensions, HashMap<TilePosition, StaticTile>)> {
        let dimensions = MapDimensions::new(self.dimensions.0, self.dimensions.1);
        if dimensions.width == 0 || dimensions.height == 0 {
            anyhow::bail!("Map dimensions must be non-zero, got {:?}", self.dimensions);
        }

        let mut tiles = HashMap::with_capacity(dimensions.tile_count());
        for y in 0..dimensions.height {
            for x in 0..dimensions.width {
                tiles.insert(tile_position(x, y), StaticTile::new(self.default));
            }
        }

        for fill in &self.fills {
            let fits = fill.x.checked_add(fill.width).is_some_and(|end| end <= dimensions.width)
                && fill.y.checked_add(fill.height).is_some_and(|end| end <= dimensions.height);
            if !fits {
                anyhow::bail!("Terrain fill {:?} exceeds map bounds {:?}", fill, self.dimensions);
            }
            for y in fill.y..fill.y + fill.height {
                for x in fill.x..fill.x + fill.width {
                    tiles.insert(tile_position(x, y), StaticTile::new(fill.terrain));
                }
            }
        }

        for &(x, y, terrain) in &self.tiles {
            if x >= dimensions.width || y >= dimensions.height {
                anyhow::bail!("Tile ({}, {}) is outside the map {:?}", x, y, self.dimensions);
            }
            tiles.insert(tile_position(x, y), StaticTile::new(terrain));
        }

        Ok((dimensions, tiles))
    }
}

fn tile_position(x: u32, y: u32) -> TilePosition {
    TilePosition::new(x as i32, y as i32)
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load map data, returning dimensions and every tile of the grid.
    pub fn load(path: &Path) -> LoadResult<(MapDimensions, HashMap<TilePosition, StaticTile>)> {
        let content = read_file(path)?;
        let layout: MapLayout = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;
        layout
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid map {}: {}", path.display(), e))
    }
}
