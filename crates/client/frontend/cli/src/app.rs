//! Glue code tying the runtime, event loop, and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use runtime::{Runtime, Topic};

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{
    Frontend, FrontendConfig, format::NameBook, message::MessageLog,
};

/// Terminal frontend.
///
/// Holds configuration only; the runtime is handed over in [`Frontend::run`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, runtime: Runtime) -> Result<()> {
        tracing::info!("CLI client starting...");

        // Subscribe before the session starts so the greeting is not missed
        let subscriptions = Topic::ALL
            .iter()
            .map(|topic| runtime.subscribe(*topic))
            .collect();

        let names = NameBook::new(runtime.state(), runtime.oracles().items());
        let consumer = CliEventConsumer::new(
            MessageLog::new(self.frontend_config.messages.capacity),
            self.frontend_config.messages.visibility.clone(),
            names,
        );

        runtime.start_session();

        let event_loop = EventLoop::new(
            runtime,
            subscriptions,
            consumer,
            self.frontend_config.clone(),
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let guard = terminal::TerminalGuard;
        let outcome = event_loop.run(&mut terminal).await;
        drop(guard);

        let (runtime, _consumer) = outcome?;
        let final_state = runtime.shutdown();
        tracing::info!(
            nonce = final_state.nonce,
            clock = final_state.clock,
            "CLI client exiting"
        );

        Ok(())
    }
}
