//! Event handling for CLI client.
//!
//! This module contains the frame loop and the event consumer that
//! coordinate runtime events, user input, and UI updates.

mod consumer;
mod r#loop;

pub use consumer::CliEventConsumer;
pub use r#loop::EventLoop;
