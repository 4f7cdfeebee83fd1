//! Scenario system for entity placement and game initialization.
//!
//! Scenarios define which map to use and where to place entities.
//! This separation allows:
//! - Same map with different entity placements
//! - Clean responsibility separation: MapOracle = terrain, Scenario = entities

use std::path::Path;

use game_core::{
    Camera, GameState, ItemHandle, ItemOracle, MapOracle, Position, UnitOracle, UnitTemplate,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};
use crate::oracle::OracleBundle;

/// Template key every scenario's player placement is built from.
pub const PLAYER_TEMPLATE: &str = "player";

/// Where and what to spawn when a scenario starts.
///
/// Placements carry no EntityId; IDs are allocated when the state is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityPlacement {
    /// World position in pixels.
    pub position: Position,
    pub kind: PlacementKind,
}

/// Type of entity to place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementKind {
    /// Player character, built from the `player` template.
    Player,

    /// Monster or villager built from a unit template.
    Unit { template: String },

    /// Item lying on the ground.
    Item { handle: ItemHandle },
}

/// Scenario configuration for game initialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Map identifier the placements are laid out for.
    pub map_id: String,

    /// Entity placements for this scenario.
    pub placements: Vec<EntityPlacement>,
}

impl Scenario {
    pub fn new(map_id: impl Into<String>, placements: Vec<EntityPlacement>) -> Self {
        Self {
            map_id: map_id.into(),
            placements,
        }
    }

    /// Initialize GameState from this scenario.
    ///
    /// Allocates EntityIds in placement order, creates units from templates
    /// (speed taken from the game config by kind) and places items.
    ///
    /// # Errors
    ///
    /// Fails unless exactly one player placement is present, when a template
    /// or item handle is unknown, or when the scenario targets another map.
    pub fn create_initial_state(&self, oracles: &OracleBundle, game_seed: u64) -> Result<GameState> {
        if self.map_id != oracles.map().name() {
            return Err(RuntimeError::MapMismatch {
                scenario: self.map_id.clone(),
                loaded: oracles.map().name().to_string(),
            });
        }

        let players: Vec<Position> = self
            .placements
            .iter()
            .filter(|placement| placement.kind == PlacementKind::Player)
            .map(|placement| placement.position)
            .collect();
        let [player_position] = players.as_slice() else {
            return Err(RuntimeError::PlayerPlacement {
                found: players.len(),
            });
        };

        tracing::info!(
            map = %self.map_id,
            placements = self.placements.len(),
            "creating initial state from scenario"
        );

        let player_position = *player_position;
        let config = oracles.game_config();
        let player = template(oracles, PLAYER_TEMPLATE)?.instantiate(player_position, &config);
        let mut state = GameState::new(game_seed, player, Camera::from_config(&config));
        self.warn_if_blocked(oracles, player_position);

        for placement in &self.placements {
            match &placement.kind {
                PlacementKind::Player => {}

                PlacementKind::Unit { template: key } => {
                    let unit = template(oracles, key)?.instantiate(placement.position, &config);
                    let id = state.spawn_unit(unit)?;
                    tracing::debug!(%id, template = %key, position = %placement.position, "spawned unit");
                    self.warn_if_blocked(oracles, placement.position);
                }

                PlacementKind::Item { handle } => {
                    if oracles.items().definition(*handle).is_none() {
                        return Err(RuntimeError::UnknownItem(handle.0));
                    }
                    let id = state.spawn_item(*handle, placement.position)?;
                    tracing::debug!(%id, handle = handle.0, position = %placement.position, "placed item");
                }
            }
        }

        Ok(state)
    }

    /// Load scenario from a RON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ScenarioRead {
            path: path.to_path_buf(),
            source,
        })?;

        ron::from_str(&content).map_err(|source| RuntimeError::ScenarioParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn warn_if_blocked(&self, oracles: &OracleBundle, position: Position) {
        if oracles.map().is_blocked(position) {
            tracing::warn!(map = %self.map_id, %position, "placement starts on a blocked tile");
        }
    }
}

fn template(oracles: &OracleBundle, key: &str) -> Result<UnitTemplate> {
    oracles
        .units()
        .template(key)
        .ok_or_else(|| RuntimeError::UnknownTemplate(key.to_string()))
}
