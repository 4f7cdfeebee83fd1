//! Maintains the CLI message log in response to runtime events.
use game_core::GameState;
use runtime::{Event, GameStateEvent, SessionEvent};

use client_frontend_core::{
    MessageVisibility,
    event::{EventConsumer, EventImpact},
    format::{NameBook, describe},
    message::{MessageEntry, MessageLevel, MessageLog},
};

pub struct CliEventConsumer {
    log: MessageLog,
    visibility: MessageVisibility,
    names: NameBook,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog, visibility: MessageVisibility, names: NameBook) -> Self {
        Self {
            log,
            visibility,
            names,
        }
    }
}

impl EventConsumer for CliEventConsumer {
    /// Slain units leave the state in the frame that reports them, so names
    /// are recorded beforehand.
    fn observe(&mut self, state: &GameState) {
        self.names.remember(state);
    }

    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::GameState(GameStateEvent::Frame { clock, event, .. }) => {
                if self.visibility.should_show(event) {
                    let (text, level) = describe(event, &self.names);
                    self.log.push(MessageEntry::new(text, Some(*clock), level));
                }
                EventImpact::redraw()
            }
            Event::GameState(GameStateEvent::FrameFailed { nonce, error }) => {
                self.log.push(MessageEntry::new(
                    format!("Frame {nonce} failed: {error}"),
                    None,
                    MessageLevel::Error,
                ));
                EventImpact::fatal()
            }
            Event::Session(SessionEvent::Started { game_seed, .. }) => {
                tracing::debug!(game_seed, "session started");
                self.log
                    .push_text("Welcome, traveller. The villagers may have work for you.");
                EventImpact::redraw()
            }
            Event::Session(SessionEvent::ViewportResized { .. }) => EventImpact::redraw(),
            Event::Session(SessionEvent::Ended { .. }) => EventImpact::none(),
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}
