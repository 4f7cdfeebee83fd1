//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};

/// Builder for constructing a Client with proper validation.
///
/// Runtime and Frontend are both required; `build()` fails fast when either
/// is missing.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<runtime::Runtime>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime (required).
    ///
    /// It should be constructed via `RuntimeBuilder` from the `client-bootstrap` crate.
    pub fn runtime(mut self, runtime: runtime::Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let runtime = self
            .runtime
            .context("Runtime is required. Use .runtime() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { runtime, frontend })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use client_bootstrap::{BootstrapConfig, RuntimeBuilder};
    use game_core::PlayerInput;

    /// Walks right for a few frames, then stops.
    struct Scripted {
        frames: u32,
    }

    #[async_trait]
    impl Frontend for Scripted {
        async fn run(&mut self, mut runtime: runtime::Runtime) -> Result<()> {
            let start = runtime.state().player().position;
            for _ in 0..self.frames {
                runtime.step(PlayerInput::moving(1.0, 0.0), 16)?;
            }
            anyhow::ensure!(runtime.state().player().position.x > start.x);
            Ok(())
        }
    }

    fn runtime() -> runtime::Runtime {
        let config = BootstrapConfig {
            game_seed: Some(5),
            ..BootstrapConfig::default()
        };
        RuntimeBuilder::new().config(config).build().unwrap().runtime
    }

    #[test]
    fn build_requires_both_layers() {
        let error = ClientBuilder::new().runtime(runtime()).build().err().unwrap();
        assert!(error.to_string().contains("Frontend is required"));

        let error = ClientBuilder::new()
            .frontend(Scripted { frames: 1 })
            .build()
            .err()
            .unwrap();
        assert!(error.to_string().contains("Runtime is required"));
    }

    #[tokio::test]
    async fn run_hands_the_runtime_to_the_frontend() {
        let client = Client::builder()
            .runtime(runtime())
            .frontend(Scripted { frames: 10 })
            .build()
            .unwrap();
        client.run().await.unwrap();
    }
}
