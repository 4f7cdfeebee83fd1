//! Utilities for reacting to runtime events inside UI layers.
use game_core::GameState;
use runtime::Event;

use crate::message::MessageLog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
    /// The session cannot continue (e.g. a frame failed).
    pub fatal: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
            fatal: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
            fatal: false,
        }
    }

    pub const fn fatal() -> Self {
        Self {
            requires_redraw: true,
            fatal: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
            fatal: self.fatal || other.fatal,
        }
    }
}

pub trait EventConsumer {
    /// Called with the state before each frame is simulated.
    fn observe(&mut self, _state: &GameState) {}

    fn on_event(&mut self, event: &Event) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_keeps_the_strongest_flags() {
        let impact = EventImpact::none()
            .combine(EventImpact::redraw())
            .combine(EventImpact::none());
        assert_eq!(impact, EventImpact::redraw());
        assert!(impact.combine(EventImpact::fatal()).fatal);
    }
}
