use std::fmt;

/// Unique identifier for any entity tracked in the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);

    /// Returns true if this entity represents the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Continuous world position expressed in pixels.
///
/// Tiles are `GameConfig::TILE_SIZE` pixels wide, so `(738.0, 549.0)` lies in
/// tile `(10, 7)`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in pixels.
    pub fn distance(self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Tile containing this position (floor division, so negative pixels map to negative tiles).
    pub fn tile(self, tile_size: u32) -> TilePosition {
        let size = f64::from(tile_size);
        TilePosition::new((self.x / size).floor() as i32, (self.y / size).floor() as i32)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.0}, {:.0})", self.x, self.y)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePosition {
    pub x: i32,
    pub y: i32,
}

impl TilePosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Per-frame movement intent. Each axis is nominally in `[-1, 1]`; it is
/// scaled by the unit's speed and the frame delta when applied.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    pub dx: f64,
    pub dy: f64,
}

impl Direction {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Unit vector from `from` toward `to`, multiplied by `sign`.
    ///
    /// `sign` is `1.0` to approach and `-1.0` to retreat. `distance` is passed
    /// in because callers already computed it for their range checks.
    pub fn toward(from: Position, to: Position, distance: f64, sign: f64) -> Self {
        if distance <= f64::EPSILON {
            return Self::ZERO;
        }
        Self {
            dx: sign * (to.x - from.x) / distance,
            dy: sign * (to.y - from.y) / distance,
        }
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Horizontal orientation used to mirror a unit's glyph or sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Units face left only while moving left; any other motion faces right.
    pub fn from_motion(dx: f64) -> Self {
        if dx < 0.0 { Facing::Left } else { Facing::Right }
    }
}
