//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations.

use std::env;
use std::time::Duration;

use game_core::GameEvent;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub frame: FrameConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(frame: FrameConfig, messages: MessageConfig) -> Self {
        Self { frame, messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FRAME_INTERVAL_MS` - Target time between frames (default: 16)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `SHOW_COMBAT_MESSAGES` - Show attack and kill messages (default: true)
    /// - `SHOW_ITEM_MESSAGES` - Show pickup messages (default: true)
    /// - `SHOW_DIALOGUE_MESSAGES` - Echo villager lines in the log (default: true)
    /// - `SHOW_HEALING_MESSAGES` - Show healing and respawn messages (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("FRAME_INTERVAL_MS") {
            config.frame.interval_ms = interval.max(1);
        }

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        let visibility = &mut config.messages.visibility;
        if let Some(show) = read_env_bool("SHOW_COMBAT_MESSAGES") {
            visibility.show_combat = show;
        }
        if let Some(show) = read_env_bool("SHOW_ITEM_MESSAGES") {
            visibility.show_items = show;
        }
        if let Some(show) = read_env_bool("SHOW_DIALOGUE_MESSAGES") {
            visibility.show_dialogue = show;
        }
        if let Some(show) = read_env_bool("SHOW_HEALING_MESSAGES") {
            visibility.show_healing = show;
        }

        config
    }
}

/// Frame pacing.
#[derive(Clone, Debug)]
pub struct FrameConfig {
    pub interval_ms: u64,
}

impl FrameConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { interval_ms: 16 }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    pub visibility: MessageVisibility,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            visibility: MessageVisibility::default(),
        }
    }
}

/// Controls which game events generate visible messages.
#[derive(Clone, Debug)]
pub struct MessageVisibility {
    /// Attacks and kills (e.g., "Zombie hits you for 7").
    pub show_combat: bool,
    /// Item pickups and quest deliveries.
    pub show_items: bool,
    /// Villager lines; they are always shown above the villager regardless.
    pub show_dialogue: bool,
    /// Healing and respawns.
    pub show_healing: bool,
}

impl Default for MessageVisibility {
    fn default() -> Self {
        Self {
            show_combat: true,
            show_items: true,
            show_dialogue: true,
            show_healing: true,
        }
    }
}

impl MessageVisibility {
    /// Returns true if a message should be logged for this event.
    pub fn should_show(&self, event: &GameEvent) -> bool {
        match event {
            GameEvent::UnitAttacked { .. } | GameEvent::UnitSlain { .. } => self.show_combat,
            GameEvent::ItemCollected { .. } | GameEvent::QuestItemDelivered { .. } => {
                self.show_items
            }
            GameEvent::VillagerSpoke { .. } => self.show_dialogue,
            GameEvent::PlayerHealed { .. } | GameEvent::PlayerRespawned { .. } => {
                self.show_healing
            }
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EntityId, Position};

    #[test]
    fn visibility_filters_by_category() {
        let visibility = MessageVisibility {
            show_combat: false,
            ..MessageVisibility::default()
        };
        let hit = GameEvent::UnitAttacked {
            attacker: EntityId(3),
            target: EntityId::PLAYER,
            damage: 4,
            remaining_hp: 96,
        };
        let respawn = GameEvent::PlayerRespawned {
            position: Position::new(738.0, 549.0),
        };

        assert!(!visibility.should_show(&hit));
        assert!(visibility.should_show(&respawn));
    }

    #[test]
    fn default_frame_interval_is_about_sixty_hertz() {
        assert_eq!(FrameConfig::default().interval(), Duration::from_millis(16));
    }
}
