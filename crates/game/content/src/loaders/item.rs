//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the item catalog. Handles must be unique.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for item in &catalog.items {
            if !seen.insert(item.handle) {
                anyhow::bail!("Duplicate item handle {:?} ('{}')", item.handle, item.name);
            }
        }

        Ok(catalog.items)
    }
}
