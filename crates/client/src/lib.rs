//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Game logic, state and event bus)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The runtime is built by `client-bootstrap` and the frontend by its own
//! crate; the client only assembles them and hands the runtime over.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() collects the layers
/// 2. Client::run() transfers the runtime to the frontend
/// 3. The frontend drives frames until the player quits
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend returns.
    ///
    /// # Errors
    ///
    /// Returns whatever error ended the frontend, such as a failed frame or a
    /// terminal I/O error.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        tracing::info!(
            game_seed = runtime.state().game_seed,
            "Handing runtime to frontend"
        );
        let result = frontend.run(runtime).await;

        if let Err(error) = &result {
            tracing::error!("Frontend error: {:#}", error);
        }
        result
    }
}
