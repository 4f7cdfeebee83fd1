//! Content loaders for reading game data from files.

pub mod config;
pub mod dialogue;
pub mod factory;
pub mod item;
pub mod map;
pub mod units;

pub use config::ConfigLoader;
pub use dialogue::DialogueLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};
pub use map::{MapLayout, MapLoader, TerrainFill};
pub use units::UnitLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
