use crate::env::ItemEffect;
use crate::state::{EntityId, ItemHandle, Position};

/// Something noteworthy that happened during a frame.
///
/// Events are informational: the state has already been updated by the time
/// they are emitted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    ItemCollected {
        item: EntityId,
        handle: ItemHandle,
        name: String,
        effect: ItemEffect,
    },
    UnitAttacked {
        attacker: EntityId,
        target: EntityId,
        damage: u32,
        remaining_hp: i32,
    },
    UnitSlain {
        unit: EntityId,
        name: String,
        by: EntityId,
    },
    PlayerRespawned {
        position: Position,
    },
    VillagerSpoke {
        villager: EntityId,
        name: String,
        line: String,
    },
    PlayerHealed {
        by: EntityId,
        amount: i32,
    },
    QuestItemDelivered {
        villager: EntityId,
        handle: ItemHandle,
    },
}

impl GameEvent {
    /// Whether the event concerns the player directly.
    pub fn involves_player(&self) -> bool {
        match self {
            Self::ItemCollected { .. }
            | Self::PlayerRespawned { .. }
            | Self::PlayerHealed { .. }
            | Self::QuestItemDelivered { .. } => true,
            Self::UnitAttacked {
                attacker, target, ..
            } => attacker.is_player() || target.is_player(),
            Self::UnitSlain { by, .. } => by.is_player(),
            Self::VillagerSpoke { .. } => false,
        }
    }
}
