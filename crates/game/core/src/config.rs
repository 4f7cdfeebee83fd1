use crate::state::Position;

/// Game configuration constants and tunable parameters.
///
/// Distances are in pixels, durations in milliseconds and speeds in pixels per
/// millisecond. Every field has a default so `config.toml` only needs to list
/// the values it overrides.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub player_speed: f64,
    pub aggressive_speed: f64,
    pub passive_speed: f64,
    pub villager_speed: f64,

    /// Range for item pickup, player attacks and talking.
    pub interact_range: f64,
    /// Aggressive monsters chase the player inside this range.
    pub walk_range: f64,
    /// Aggressive monsters strike the player inside this range.
    pub attack_range: f64,

    /// How long a passive monster keeps one wander direction.
    pub wander_time: u32,
    /// How long a passive monster keeps fleeing after being hit.
    pub safe_time: u32,
    /// How long a villager's line stays up.
    pub talk_time: u32,

    /// Where the player reappears after dying.
    pub respawn: Position,

    /// Camera viewport size in pixels.
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Edge length of a map tile in pixels.
    pub const TILE_SIZE: u32 = 72;
    pub const MAX_INVENTORY_SLOTS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_SPEED: f64 = 0.25;
    pub const DEFAULT_AGGRESSIVE_SPEED: f64 = 0.25;
    pub const DEFAULT_PASSIVE_SPEED: f64 = 0.2;
    pub const DEFAULT_INTERACT_RANGE: f64 = 50.0;
    pub const DEFAULT_WALK_RANGE: f64 = 150.0;
    pub const DEFAULT_ATTACK_RANGE: f64 = 50.0;
    pub const DEFAULT_WANDER_TIME: u32 = 3000;
    pub const DEFAULT_SAFE_TIME: u32 = 5000;
    pub const DEFAULT_TALK_TIME: u32 = 4000;
    pub const DEFAULT_RESPAWN: Position = Position::new(738.0, 549.0);
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;
    pub const PANEL_HEIGHT: u32 = 70;

    pub const fn new() -> Self {
        Self {
            player_speed: Self::DEFAULT_PLAYER_SPEED,
            aggressive_speed: Self::DEFAULT_AGGRESSIVE_SPEED,
            passive_speed: Self::DEFAULT_PASSIVE_SPEED,
            villager_speed: 0.0,
            interact_range: Self::DEFAULT_INTERACT_RANGE,
            walk_range: Self::DEFAULT_WALK_RANGE,
            attack_range: Self::DEFAULT_ATTACK_RANGE,
            wander_time: Self::DEFAULT_WANDER_TIME,
            safe_time: Self::DEFAULT_SAFE_TIME,
            talk_time: Self::DEFAULT_TALK_TIME,
            respawn: Self::DEFAULT_RESPAWN,
            viewport_width: Self::SCREEN_WIDTH,
            viewport_height: Self::SCREEN_HEIGHT - Self::PANEL_HEIGHT,
        }
    }

    /// Movement speed assigned to freshly spawned units of the given kind.
    pub fn speed_for(&self, kind: crate::state::UnitKind) -> f64 {
        use crate::state::UnitKind;
        match kind {
            UnitKind::Player => self.player_speed,
            UnitKind::Villager => self.villager_speed,
            UnitKind::AggressiveMonster => self.aggressive_speed,
            UnitKind::PassiveMonster => self.passive_speed,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
