use strum::{Display, EnumIter};

use crate::config::GameConfig;
use crate::state::{Position, TilePosition};

/// Static map oracle exposing the immutable tile layout.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;
    fn tile(&self, position: TilePosition) -> Option<StaticTile>;

    /// Edge length of a tile in world pixels.
    fn tile_size(&self) -> u32 {
        GameConfig::TILE_SIZE
    }

    fn contains(&self, position: TilePosition) -> bool {
        self.dimensions().contains(position)
    }

    /// Whether a unit may not stand at this world position.
    ///
    /// Positions outside the map count as blocked.
    fn is_blocked(&self, position: Position) -> bool {
        let tile = position.tile(self.tile_size());
        match self.tile(tile) {
            Some(tile) => tile.blocks(),
            None => true,
        }
    }
}

/// Map size in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: TilePosition) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
}

impl StaticTile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self { terrain }
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn blocks(self) -> bool {
        self.terrain.blocks()
    }
}

/// Terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Grass,
    Floor,
    Road,
    Bridge,
    Sand,
    Wall,
    Water,
    Tree,
    Rock,
    Void,
}

impl TerrainKind {
    pub fn blocks(self) -> bool {
        matches!(
            self,
            TerrainKind::Wall
                | TerrainKind::Water
                | TerrainKind::Tree
                | TerrainKind::Rock
                | TerrainKind::Void
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x2 map with a wall in the middle of the top row.
    struct TinyMap;

    impl MapOracle for TinyMap {
        fn dimensions(&self) -> MapDimensions {
            MapDimensions::new(3, 2)
        }

        fn tile(&self, position: TilePosition) -> Option<StaticTile> {
            if !self.contains(position) {
                return None;
            }
            let terrain = if position == TilePosition::new(1, 0) {
                TerrainKind::Wall
            } else {
                TerrainKind::Grass
            };
            Some(StaticTile::new(terrain))
        }
    }

    #[test]
    fn blocked_by_terrain() {
        assert!(TinyMap.is_blocked(Position::new(100.0, 10.0)));
        assert!(!TinyMap.is_blocked(Position::new(10.0, 10.0)));
        assert!(!TinyMap.is_blocked(Position::new(100.0, 100.0)));
    }

    #[test]
    fn out_of_bounds_is_blocked() {
        assert!(TinyMap.is_blocked(Position::new(-0.5, 10.0)));
        assert!(TinyMap.is_blocked(Position::new(216.0, 10.0)));
        assert!(TinyMap.is_blocked(Position::new(10.0, 144.0)));
    }

    #[test]
    fn only_solid_terrain_blocks() {
        use strum::IntoEnumIterator;
        let blocking: Vec<_> = TerrainKind::iter().filter(|t| t.blocks()).collect();
        assert_eq!(
            blocking,
            vec![
                TerrainKind::Wall,
                TerrainKind::Water,
                TerrainKind::Tree,
                TerrainKind::Rock,
                TerrainKind::Void
            ]
        );
    }
}
