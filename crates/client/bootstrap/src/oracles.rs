//! Helpers for constructing oracle bundles consumed by the runtime.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use runtime::{
    ConfigOracleImpl, DialogueOracleImpl, ItemOracleImpl, MapOracleImpl, UnitOracleImpl,
};

// Re-export OracleBundle from runtime
pub use runtime::OracleBundle;

pub trait OracleFactory: Send + Sync {
    fn build(&self) -> Result<OracleBundle>;
}

/// Oracle factory that loads game content from data files.
///
/// This factory uses the game-content crate's loaders to read RON/TOML files
/// and construct oracle implementations from real game data.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── units.ron
/// ├── items.ron
/// ├── dialogue.ron
/// └── maps/
///     └── {map_name}.ron
/// ```
#[derive(Clone, Debug)]
pub struct ContentOracleFactory {
    data_dir: PathBuf,
    map_name: String,
}

impl ContentOracleFactory {
    /// # Arguments
    ///
    /// * `data_dir` - Path to directory containing data files
    /// * `map_name` - Name of the map to load (without .ron extension)
    pub fn new(data_dir: impl Into<PathBuf>, map_name: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            map_name: map_name.into(),
        }
    }

    /// Bundled data directory (or `CONTENT_DATA_DIR`) with the overworld map.
    pub fn default_paths() -> Self {
        let data_dir = std::env::var("CONTENT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| game_content::bundled_data_dir());
        Self::new(data_dir, "overworld")
    }
}

impl OracleFactory for ContentOracleFactory {
    fn build(&self) -> Result<OracleBundle> {
        use game_content::ContentFactory;

        if !self.data_dir.exists() {
            bail!(
                "Content data directory not found: {} (set CONTENT_DATA_DIR to override)",
                self.data_dir.display()
            );
        }

        let factory = ContentFactory::new(&self.data_dir);
        let dir = self.data_dir.display();

        let config = factory
            .load_config()
            .with_context(|| format!("Failed to load config.toml from {dir}"))?;
        let items = factory
            .load_items()
            .with_context(|| format!("Failed to load items.ron from {dir}"))?;
        let units = factory
            .load_units()
            .with_context(|| format!("Failed to load units.ron from {dir}"))?;
        let dialogue = factory
            .load_dialogue()
            .with_context(|| format!("Failed to load dialogue.ron from {dir}"))?;
        let (dimensions, tiles) = factory
            .load_map(&self.map_name)
            .with_context(|| format!("Failed to load map '{}' from {dir}", self.map_name))?;

        tracing::info!(
            map = %self.map_name,
            width = dimensions.width,
            height = dimensions.height,
            units = units.len(),
            items = items.len(),
            scripts = dialogue.len(),
            "content loaded"
        );

        Ok(OracleBundle::new(
            Arc::new(MapOracleImpl::new(&self.map_name, dimensions, tiles)),
            Arc::new(items.into_iter().collect::<ItemOracleImpl>()),
            Arc::new(units.into_iter().collect::<UnitOracleImpl>()),
            Arc::new(dialogue.into_iter().collect::<DialogueOracleImpl>()),
            Arc::new(ConfigOracleImpl::new(config)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ItemHandle, ItemOracle, MapOracle, UnitOracle};

    #[test]
    fn bundled_content_builds_every_oracle() {
        let bundle = ContentOracleFactory::new(game_content::bundled_data_dir(), "overworld")
            .build()
            .unwrap();

        assert_eq!(bundle.map().name(), "overworld");
        assert_eq!(bundle.map().dimensions().width, 60);
        assert!(bundle.units().template("player").is_some());
        assert!(bundle.items().definition(ItemHandle(3)).is_some());
        assert_eq!(bundle.dialogue().len(), 3);
    }

    #[test]
    fn missing_directory_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let result = ContentOracleFactory::new(dir.path().join("absent"), "overworld").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_map_reports_its_name() {
        let result =
            ContentOracleFactory::new(game_content::bundled_data_dir(), "atlantis").build();
        let message = format!("{:#}", result.err().unwrap());
        assert!(message.contains("atlantis"));
    }
}
