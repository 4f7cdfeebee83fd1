//! Event types for different topics.

use game_core::GameEvent;
use serde::{Deserialize, Serialize};

/// Events related to game state changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// Something happened while a frame was simulated.
    Frame {
        /// Nonce of the frame that produced the event.
        nonce: u64,
        /// Game clock in milliseconds after the frame.
        clock: u64,
        event: GameEvent,
    },

    /// A frame could not be simulated.
    FrameFailed { nonce: u64, error: String },
}

/// Session lifecycle events (lightweight).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Started {
        session_id: Option<String>,
        game_seed: u64,
    },
    ViewportResized {
        width: u32,
        height: u32,
    },
    Ended {
        nonce: u64,
        clock: u64,
    },
}
