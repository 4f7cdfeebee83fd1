//! Terrain window under the camera.

use game_core::{Camera, MapOracle, TerrainKind, TilePosition};

/// Terrain for every tile the viewport touches, row-major from `origin`.
///
/// Tiles outside the map read as [`TerrainKind::Void`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapView {
    pub origin: TilePosition,
    pub columns: u32,
    pub rows: u32,
    tiles: Vec<TerrainKind>,
}

impl MapView {
    pub fn from_camera<M: MapOracle + ?Sized>(map: &M, camera: &Camera) -> Self {
        let origin = TilePosition::new(camera.tile_x(), camera.tile_y());
        let (columns, rows) = camera.visible_tiles();

        let mut tiles = Vec::with_capacity((columns * rows) as usize);
        for row in 0..rows as i32 {
            for column in 0..columns as i32 {
                let position = TilePosition::new(origin.x + column, origin.y + row);
                let terrain = map
                    .tile(position)
                    .map_or(TerrainKind::Void, |tile| tile.terrain());
                tiles.push(terrain);
            }
        }

        Self {
            origin,
            columns,
            rows,
            tiles,
        }
    }

    /// Terrain at an absolute tile position.
    pub fn terrain_at(&self, position: TilePosition) -> TerrainKind {
        let column = position.x - self.origin.x;
        let row = position.y - self.origin.y;
        if column < 0 || row < 0 || column >= self.columns as i32 || row >= self.rows as i32 {
            return TerrainKind::Void;
        }
        self.tiles[(row as u32 * self.columns + column as u32) as usize]
    }
}
