//! Viewport tracking.
//!
//! The camera keeps its top-left corner in world pixels and derives the tile
//! window and sub-tile offset used by renderers. It follows the player only.

use crate::config::GameConfig;
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    tile_size: u32,
    viewport_width: u32,
    viewport_height: u32,
    x: i32,
    y: i32,
}

impl Camera {
    pub fn new(tile_size: u32, viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            tile_size: tile_size.max(1),
            viewport_width,
            viewport_height,
            x: 0,
            y: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            GameConfig::TILE_SIZE,
            config.viewport_width,
            config.viewport_height,
        )
    }

    /// Centers the viewport on `follow`.
    pub fn update(&mut self, follow: Position) {
        self.x = (follow.x - f64::from(self.viewport_width / 2)) as i32;
        self.y = (follow.y - f64::from(self.viewport_height / 2)) as i32;
    }

    /// Changes the viewport size; takes effect on the next `update`.
    pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Tile column under the viewport's left edge.
    pub fn tile_x(&self) -> i32 {
        self.x.div_euclid(self.tile_size as i32)
    }

    pub fn tile_y(&self) -> i32 {
        self.y.div_euclid(self.tile_size as i32)
    }

    /// Screen x of the first visible tile column; always in `(-tile_size, 0]`.
    pub fn offset_x(&self) -> i32 {
        self.tile_x() * self.tile_size as i32 - self.x
    }

    pub fn offset_y(&self) -> i32 {
        self.tile_y() * self.tile_size as i32 - self.y
    }

    /// Converts a world x coordinate to screen pixels.
    pub fn relative_x(&self, world_x: f64) -> i32 {
        world_x as i32 - self.x
    }

    pub fn relative_y(&self, world_y: f64) -> i32 {
        world_y as i32 - self.y
    }

    /// Tile columns and rows needed to cover the viewport, partial tiles included.
    pub fn visible_tiles(&self) -> (u32, u32) {
        (
            self.viewport_width.div_ceil(self.tile_size) + 1,
            self.viewport_height.div_ceil(self.tile_size) + 1,
        )
    }

    /// Whether a world position falls inside the viewport.
    pub fn is_visible(&self, position: Position) -> bool {
        let rx = self.relative_x(position.x);
        let ry = self.relative_y(position.y);
        rx >= 0 && ry >= 0 && (rx as u32) < self.viewport_width && (ry as u32) < self.viewport_height
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
