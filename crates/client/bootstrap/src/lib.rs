//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, oracle assembly, and runtime setup that can
//! be reused by the terminal frontend or any future one.
pub mod builder;
pub mod config;
pub mod oracles;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::BootstrapConfig;
pub use oracles::{ContentOracleFactory, OracleBundle, OracleFactory};
