//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{GameStateEvent, SessionEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Frame events produced by the engine
    GameState,
    /// Session lifecycle
    Session,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::GameState, Topic::Session];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    GameState(GameStateEvent),
    Session(SessionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::GameState(_) => Topic::GameState,
            Event::Session(_) => Topic::Session,
        }
    }
}

impl From<GameStateEvent> for Event {
    fn from(event: GameStateEvent) -> Self {
        Event::GameState(event)
    }
}

impl From<SessionEvent> for Event {
    fn from(event: SessionEvent) -> Self {
        Event::Session(event)
    }
}

/// Topic-based event bus
///
/// Channels for every topic are created up front and never change, so the
/// map needs no lock.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Default per-topic capacity.
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();

        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        match self.channels.get(&topic) {
            Some(tx) => tx.subscribe(),
            // every topic is created in `with_capacity`
            None => broadcast::channel(1).1,
        }
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    /// Number of live receivers on a topic.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.channels
            .get(&topic)
            .map_or(0, broadcast::Sender::receiver_count)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
