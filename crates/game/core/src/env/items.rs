use crate::state::ItemHandle;

pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition>;

    /// Returns all item definitions, ordered by handle.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

/// Catalog entry for an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub effect: ItemEffect,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, name: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            handle,
            name: name.into(),
            effect,
        }
    }
}

/// What happens to the player's stats when the item is picked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Raises maximum and current health.
    MaxHealth(i32),

    /// Raises the damage ceiling.
    Damage(u32),

    /// Shortens the attack cooldown (saturating at zero).
    CooldownReduction(u32),

    /// No stat change; the item matters to a villager.
    Quest,
}
