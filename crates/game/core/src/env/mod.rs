//! Traits describing read-only world data.
//!
//! Oracles expose the static tile map, item definitions, unit templates,
//! villager scripts, tunables and randomness. The [`Env`] aggregate bundles
//! them so the engine can access everything it needs without hard coupling to
//! concrete implementations.
mod config;
mod dialogue;
mod error;
mod items;
mod map;
mod rng;
mod units;

pub use config::ConfigOracle;
pub use dialogue::{DialogueOracle, VillagerScript};
pub use error::OracleError;
pub use items::{ItemDefinition, ItemEffect, ItemOracle};
pub use map::{MapDimensions, MapOracle, StaticTile, TerrainKind};
pub use rng::{PcgRng, RngOracle, compute_seed, context as rng_context};
pub use units::{UnitOracle, UnitTemplate};

use crate::config::GameConfig;

/// Aggregates read-only oracles required by the engine.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, M, I, U, D, C, R>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
    U: UnitOracle + ?Sized,
    D: DialogueOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    map: Option<&'a M>,
    items: Option<&'a I>,
    units: Option<&'a U>,
    dialogue: Option<&'a D>,
    config: Option<&'a C>,
    rng: Option<&'a R>,
}

pub type GameEnv<'a> = Env<
    'a,
    dyn MapOracle + 'a,
    dyn ItemOracle + 'a,
    dyn UnitOracle + 'a,
    dyn DialogueOracle + 'a,
    dyn ConfigOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, M, I, U, D, C, R> Env<'a, M, I, U, D, C, R>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
    U: UnitOracle + ?Sized,
    D: DialogueOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        map: Option<&'a M>,
        items: Option<&'a I>,
        units: Option<&'a U>,
        dialogue: Option<&'a D>,
        config: Option<&'a C>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            map,
            items,
            units,
            dialogue,
            config,
            rng,
        }
    }

    pub fn with_all(
        map: &'a M,
        items: &'a I,
        units: &'a U,
        dialogue: &'a D,
        config: &'a C,
        rng: &'a R,
    ) -> Self {
        Self::new(
            Some(map),
            Some(items),
            Some(units),
            Some(dialogue),
            Some(config),
            Some(rng),
        )
    }

    pub fn empty() -> Self {
        Self {
            map: None,
            items: None,
            units: None,
            dialogue: None,
            config: None,
            rng: None,
        }
    }

    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` if no map oracle was provided.
    pub fn map(&self) -> Result<&'a M, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    pub fn units(&self) -> Result<&'a U, OracleError> {
        self.units.ok_or(OracleError::UnitsNotAvailable)
    }

    pub fn dialogue(&self) -> Result<&'a D, OracleError> {
        self.dialogue.ok_or(OracleError::DialogueNotAvailable)
    }

    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Shorthand for `config()?.game_config()`.
    pub fn game_config(&self) -> Result<GameConfig, OracleError> {
        Ok(self.config()?.game_config())
    }
}

impl<'a, M, I, U, D, C, R> Env<'a, M, I, U, D, C, R>
where
    M: MapOracle + 'a,
    I: ItemOracle + 'a,
    U: UnitOracle + 'a,
    D: DialogueOracle + 'a,
    C: ConfigOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let map: Option<&'a dyn MapOracle> = self.map.map(|map| map as _);
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let units: Option<&'a dyn UnitOracle> = self.units.map(|units| units as _);
        let dialogue: Option<&'a dyn DialogueOracle> = self.dialogue.map(|d| d as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(map, items, units, dialogue, config, rng)
    }
}
