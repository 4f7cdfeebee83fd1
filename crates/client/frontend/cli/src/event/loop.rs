//! Frame loop driving input, simulation and rendering.
//!
//! Every tick the loop:
//! - Drains pending keyboard events into the held-key table
//! - Matches the camera viewport to the map panel
//! - Steps the runtime with the time measured since the previous tick
//! - Feeds bus events to the consumer and redraws

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self as term, Event as TermEvent};
use game_core::GameConfig;
use ratatui::layout::Rect;
use runtime::{Event as RuntimeEvent, Runtime};
use tokio::{
    sync::broadcast::{self, error::TryRecvError},
    time::{self, MissedTickBehavior},
};

use crate::{
    config::CliConfig,
    input::{HeldKeys, InputHandler, KeyAction},
    presentation::{
        terminal::Tui,
        ui::{self, UiLayout},
        widgets,
    },
};
use client_frontend_core::{EventConsumer, EventImpact, FrontendConfig, view_model::ViewModel};

/// Whether the loop should keep going after handling input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Frame loop owning the runtime for the duration of a session.
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    runtime: Runtime,
    subscriptions: Vec<broadcast::Receiver<RuntimeEvent>>,
    input: InputHandler,
    held: HeldKeys,
    consumer: C,
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        runtime: Runtime,
        subscriptions: Vec<broadcast::Receiver<RuntimeEvent>>,
        consumer: C,
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            runtime,
            subscriptions,
            input: InputHandler::new(),
            held: HeldKeys::new(cli_config.input.key_hold()),
            consumer,
            frontend_config,
            cli_config,
        }
    }

    /// Runs until the player quits or a frame fails.
    ///
    /// Returns the runtime and consumer so the caller can shut the session down.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<(Runtime, C)> {
        self.sync_viewport(terminal)?;
        self.drain_events();
        self.render(terminal)?;

        let mut ticker = time::interval(self.frontend_config.frame.interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_frame = Instant::now();

        loop {
            ticker.tick().await;
            let now = Instant::now();

            if self.poll_input(now)? == Flow::Quit {
                tracing::info!("Player quit");
                break;
            }
            self.sync_viewport(terminal)?;

            let delta_ms = frame_delta_ms(now.saturating_duration_since(last_frame));
            last_frame = now;

            self.consumer.observe(self.runtime.state());
            let stepped = self.runtime.step(self.held.input(now), delta_ms);
            let impact = self.drain_events();

            if let Err(error) = stepped {
                tracing::error!("Frame failed: {}", error);
                self.render(terminal)?;
                return Err(error).context("Frame simulation failed");
            }
            if impact.fatal {
                anyhow::bail!("Session ended by a fatal event");
            }

            // units move every frame, so redraw regardless of events
            self.render(terminal)?;
        }

        Ok((self.runtime, self.consumer))
    }

    /// Drains keyboard events without blocking.
    fn poll_input(&mut self, now: Instant) -> Result<Flow> {
        while term::poll(Duration::ZERO)? {
            match term::read()? {
                TermEvent::Key(key) => match self.input.handle_key(key) {
                    KeyAction::Quit => return Ok(Flow::Quit),
                    KeyAction::Press(control) => self.held.press(control, now),
                    KeyAction::Release(control) => self.held.release(control),
                    KeyAction::None => {}
                },
                TermEvent::FocusLost => self.held.clear(),
                // resizes are picked up by sync_viewport
                _ => {}
            }
        }
        Ok(Flow::Continue)
    }

    fn sync_viewport(&mut self, terminal: &Tui) -> Result<()> {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let hud_height = widgets::hud::height(GameConfig::MAX_INVENTORY_SLOTS);
        let layout = UiLayout::new(area, &self.cli_config.ui, hud_height);
        let (width, height) = layout.map_viewport();
        self.runtime.resize_viewport(width, height);
        Ok(())
    }

    fn drain_events(&mut self) -> EventImpact {
        let mut impact = EventImpact::none();
        for receiver in &mut self.subscriptions {
            loop {
                match receiver.try_recv() {
                    Ok(event) => impact = impact.combine(self.consumer.on_event(&event)),
                    Err(TryRecvError::Lagged(skipped)) => {
                        tracing::warn!("Dropped {} stale events", skipped);
                    }
                    Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                }
            }
        }
        impact
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let env = self.runtime.oracles().as_game_env();
        let view_model = ViewModel::from_state(self.runtime.state(), &env)?;

        let ctx = ui::RenderContext {
            view_model: &view_model,
            messages: self.consumer.message_log(),
            ui: &self.cli_config.ui,
        };

        ui::render_with_view_model(terminal, &ctx)
    }
}

/// Milliseconds elapsed, saturating instead of truncating.
fn frame_delta_ms(elapsed: Duration) -> u32 {
    u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
}
