//! Terminal UI frontend for the RPG.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend owns the frame loop:
//! - Polls the keyboard and turns held keys into a `PlayerInput`
//! - Steps the `Runtime` with the measured frame delta
//! - Drains the event bus into the message log and redraws

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, InputConfig, UiConfig};

// Re-export for convenience (used by the client binary)
pub use client_frontend_core::FrontendConfig;
