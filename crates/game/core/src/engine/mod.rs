//! Per-frame world update.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. One call to
//! [`GameEngine::update`] advances the world by `delta` milliseconds:
//!
//! 1. the player moves and picks up nearby items,
//! 2. the camera recenters on the player,
//! 3. the player attacks and talks if asked to,
//! 4. every other unit runs its behaviour and moves.
mod errors;
mod events;
mod input;

pub mod ai;
pub mod combat;
pub mod interact;
pub mod movement;

pub use errors::ExecuteError;
pub use events::GameEvent;
pub use input::PlayerInput;

use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{Direction, EntitiesState, GameState, UnitRole};

/// Everything produced by one frame besides the state change itself.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameOutcome {
    pub events: Vec<GameEvent>,
}

/// Frame-wide values shared by the rule functions.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext {
    pub game_seed: u64,
    pub nonce: u64,
    pub delta: u32,
    pub config: GameConfig,
}

pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Advances the world by `delta` milliseconds.
    ///
    /// On error the frame may be partially applied; the nonce and clock are
    /// only advanced for completed frames.
    pub fn update(
        &mut self,
        env: GameEnv<'_>,
        input: PlayerInput,
        delta: u32,
    ) -> Result<FrameOutcome, ExecuteError> {
        let map = env.map()?;
        let items = env.items()?;
        let dialogue = env.dialogue()?;
        let rng = env.rng()?;
        let ctx = FrameContext {
            game_seed: self.state.game_seed,
            nonce: self.state.nonce,
            delta,
            config: env.game_config()?,
        };
        let mut events = Vec::new();

        let entities = &mut self.state.entities;
        movement::step_unit(&mut entities.player.unit, input.direction, delta, map);
        interact::collect_items(entities, &ctx, items, &mut events)?;

        self.state.camera.update(entities.player.unit.position);

        if input.attack {
            combat::player_attack(entities, &ctx, rng, &mut events);
        }
        if input.talk {
            interact::talk_to_villagers(entities, &ctx, dialogue, &mut events);
        }

        let EntitiesState { player, units, .. } = entities;
        for unit in units.iter_mut() {
            let direction = match &mut unit.role {
                UnitRole::Aggressive => ai::aggressive(unit, player, &ctx, rng, &mut events),
                UnitRole::Passive(passive) => {
                    ai::passive(unit.id, unit.position, passive, player, &ctx, rng)
                }
                UnitRole::Villager(villager) => {
                    ai::villager(villager, &ctx);
                    Direction::ZERO
                }
                UnitRole::Player => Direction::ZERO,
            };
            movement::step_unit(unit, direction, delta, map);
        }

        self.state.nonce += 1;
        self.state.clock += u64::from(delta);
        Ok(FrameOutcome { events })
    }
}
