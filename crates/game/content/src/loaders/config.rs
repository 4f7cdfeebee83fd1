//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`GameConfig`] from TOML. Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.interact_range <= 0.0 || config.walk_range < config.attack_range {
            anyhow::bail!(
                "Invalid ranges in {}: interact={}, walk={}, attack={}",
                path.display(),
                config.interact_range,
                config.walk_range,
                config.attack_range
            );
        }

        Ok(config)
    }
}
