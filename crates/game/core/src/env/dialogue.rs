//! Villager dialogue scripts.

use crate::state::ItemHandle;

/// Provides the script a villager follows, keyed by the villager's name.
pub trait DialogueOracle: Send + Sync {
    fn script(&self, villager: &str) -> Option<VillagerScript>;
}

/// Decides what a villager says when the player talks to them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VillagerScript {
    /// Restores the player to full health.
    Healer { full_health: String, healed: String },

    /// Waits for one item and takes it from the player.
    QuestGiver {
        wants: ItemHandle,
        delivered: String,
        waiting: String,
    },

    /// Points the player at the first listed item they do not carry yet.
    Guide {
        hints: Vec<(ItemHandle, String)>,
        complete: String,
    },
}
