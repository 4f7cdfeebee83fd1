//! The player's inventory.

use arrayvec::ArrayVec;

use super::ItemHandle;
use crate::config::GameConfig;
use crate::state::InventoryError;

/// Ordered list of carried items, in pickup order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub items: ArrayVec<ItemHandle, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl InventoryState {
    pub fn empty() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.items.contains(&handle)
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, handle: ItemHandle) -> Result<(), InventoryError> {
        self.items
            .try_push(handle)
            .map_err(|_| InventoryError::Full {
                capacity: GameConfig::MAX_INVENTORY_SLOTS,
            })
    }

    /// Removes the first occurrence of `handle`.
    pub fn remove(&mut self, handle: ItemHandle) -> Result<(), InventoryError> {
        let index = self
            .items
            .iter()
            .position(|carried| *carried == handle)
            .ok_or(InventoryError::NotCarried { handle })?;
        self.items.remove(index);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemHandle> + '_ {
        self.items.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_stops_at_capacity() {
        let mut inventory = InventoryState::empty();
        for i in 0..GameConfig::MAX_INVENTORY_SLOTS {
            inventory.push(ItemHandle(i as u16)).unwrap();
        }
        assert!(inventory.is_full());
        assert_eq!(
            inventory.push(ItemHandle(99)),
            Err(InventoryError::Full {
                capacity: GameConfig::MAX_INVENTORY_SLOTS
            })
        );
    }

    #[test]
    fn remove_keeps_order_of_remaining_items() {
        let mut inventory = InventoryState::empty();
        inventory.push(ItemHandle(0)).unwrap();
        inventory.push(ItemHandle(3)).unwrap();
        inventory.push(ItemHandle(1)).unwrap();

        inventory.remove(ItemHandle(3)).unwrap();
        assert_eq!(inventory.iter().collect::<Vec<_>>(), vec![ItemHandle(0), ItemHandle(1)]);
        assert!(!inventory.contains(ItemHandle(3)));
        assert_eq!(
            inventory.remove(ItemHandle(3)),
            Err(InventoryError::NotCarried {
                handle: ItemHandle(3)
            })
        );
    }
}
