//! Data-driven content definitions and loaders.
//!
//! This crate ships the default world under `data/` and provides loaders for
//! its RON/TOML files:
//! - Map layouts (RON, rectangle fills over a default terrain)
//! - Unit templates (RON)
//! - Item catalog (RON)
//! - Villager dialogue scripts (RON)
//! - Game configuration (TOML)
//!
//! Content is consumed by runtime oracles and never appears in game state.
//! All loaders deserialize game-core types directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, DialogueLoader, ItemCatalog, ItemLoader, LoadResult, MapLayout,
    MapLoader, TerrainFill, UnitLoader,
};

/// Path of the bundled data directory, resolved at compile time.
pub fn bundled_data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
