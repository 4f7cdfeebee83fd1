//! Villager dialogue loader.

use std::path::Path;

use game_core::VillagerScript;

use crate::loaders::{LoadResult, read_file};

/// Loader for villager scripts.
///
/// RON format: `Vec<(String, VillagerScript)>`, keyed by the villager's display name.
pub struct DialogueLoader;

impl DialogueLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<(String, VillagerScript)>> {
        let content = read_file(path)?;
        let scripts: Vec<(String, VillagerScript)> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse dialogue RON: {}", e))?;
        Ok(scripts)
    }
}
