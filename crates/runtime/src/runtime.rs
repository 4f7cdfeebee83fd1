//! High-level runtime orchestrator.
//!
//! The runtime owns the authoritative [`GameState`], the content oracles and
//! the event bus. Frontends drive it one frame at a time with
//! [`Runtime::step`] and observe what happened through the returned events or
//! a bus subscription.

use tokio::sync::broadcast;

use game_core::{GameEngine, GameError, GameEvent, GameState, PlayerInput};

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, GameStateEvent, SessionEvent, Topic};
use crate::oracle::OracleBundle;
use crate::scenario::Scenario;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Per-topic capacity of the event bus.
    pub event_buffer_size: usize,
    /// Upper bound for a single frame's delta; longer pauses are simulated as this.
    pub max_frame_delta_ms: u32,
    /// Seed for deterministic rolls. Picked at random when absent.
    pub game_seed: Option<u64>,
    pub session_id: Option<String>,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;
    pub const DEFAULT_MAX_FRAME_DELTA_MS: u32 = 100;
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER_SIZE,
            max_frame_delta_ms: Self::DEFAULT_MAX_FRAME_DELTA_MS,
            game_seed: None,
            session_id: None,
        }
    }
}

/// Main runtime that owns the simulation.
pub struct Runtime {
    config: RuntimeConfig,
    state: GameState,
    oracles: OracleBundle,
    events: EventBus,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Advances the world by one frame.
    ///
    /// `delta_ms` is clamped to `max_frame_delta_ms`. Every event is published
    /// on [`Topic::GameState`] and also returned to the caller.
    pub fn step(&mut self, input: PlayerInput, delta_ms: u32) -> Result<Vec<GameEvent>> {
        let delta = delta_ms.min(self.config.max_frame_delta_ms);
        let nonce = self.state.nonce;
        let env = self.oracles.as_game_env();

        let outcome = match GameEngine::new(&mut self.state).update(env, input, delta) {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::error!(
                    nonce,
                    severity = error.severity().as_str(),
                    code = error.error_code(),
                    %error,
                    "frame failed"
                );
                self.events.publish(GameStateEvent::FrameFailed {
                    nonce,
                    error: error.to_string(),
                });
                return Err(RuntimeError::Execute(error));
            }
        };

        let clock = self.state.clock;
        for event in &outcome.events {
            tracing::debug!(nonce, ?event, "game event");
            self.events.publish(GameStateEvent::Frame {
                nonce,
                clock,
                event: event.clone(),
            });
        }

        Ok(outcome.events)
    }

    /// Announces the session on [`Topic::Session`]; call after subscribing.
    pub fn start_session(&self) {
        tracing::info!(
            session_id = ?self.config.session_id,
            game_seed = self.state.game_seed,
            "session started"
        );
        self.events.publish(SessionEvent::Started {
            session_id: self.config.session_id.clone(),
            game_seed: self.state.game_seed,
        });
    }

    /// Resizes the camera viewport and recenters it on the player.
    pub fn resize_viewport(&mut self, width: u32, height: u32) {
        let camera = &mut self.state.camera;
        if camera.viewport_width() == width && camera.viewport_height() == height {
            return;
        }
        camera.resize(width, height);
        camera.update(self.state.entities.player.unit.position);
        self.events
            .publish(SessionEvent::ViewportResized { width, height });
    }

    /// Ends the session and hands back the final state.
    pub fn shutdown(self) -> GameState {
        tracing::info!(nonce = self.state.nonce, clock = self.state.clock, "session ended");
        self.events.publish(SessionEvent::Ended {
            nonce: self.state.nonce,
            clock: self.state.clock,
        });
        self.state
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn oracles(&self) -> &OracleBundle {
        &self.oracles
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Cloneable handle to the event bus.
    pub fn event_bus(&self) -> EventBus {
        self.events.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    scenario: Option<Scenario>,
    oracles: Option<OracleBundle>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            scenario: None,
            oracles: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide a ready-made initial state; takes precedence over a scenario.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the initial state from a scenario.
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Set required oracle bundle
    pub fn oracles(mut self, oracles: OracleBundle) -> Self {
        self.oracles = Some(oracles);
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;

        let state = match (self.state, self.scenario) {
            (Some(state), _) => state,
            (None, Some(scenario)) => {
                let seed = self.config.game_seed.unwrap_or_else(rand::random);
                scenario.create_initial_state(&oracles, seed)?
            }
            (None, None) => return Err(RuntimeError::MissingInitialState),
        };

        tracing::info!(
            units = state.entities.units.len(),
            items = state.entities.items.len(),
            game_seed = state.game_seed,
            "runtime ready"
        );

        Ok(Runtime {
            events: EventBus::with_capacity(self.config.event_buffer_size),
            config: self.config,
            state,
            oracles,
        })
    }
}
