//! Cross-frontend primitives for presenting the game.
//!
//! Houses message logging, event handling, and view-model types that the
//! terminal client and any future graphical client can reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrameConfig, FrontendConfig, MessageConfig, MessageVisibility};
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::ViewModel;
