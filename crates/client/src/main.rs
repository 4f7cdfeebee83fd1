//! RPG client binary.
//!
//! Composition root that assembles:
//! 1. Runtime (game logic) via RuntimeBuilder
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! # Examples
//!
//! ```bash
//! # Bundled overworld with a fixed seed
//! GAME_SEED=42 cargo run -p rpg-client
//!
//! # Verbose engine logs
//! RUST_LOG=runtime=debug cargo run -p rpg-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{BootstrapConfig, RuntimeBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use rpg_client::Client;

    // 1. Load configuration from environment
    let bootstrap_config = BootstrapConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&bootstrap_config.session_id)?;

    tracing::info!("Starting RPG client");
    tracing::info!("Scenario: {}", bootstrap_config.scenario);
    tracing::info!("Content: {}", bootstrap_config.data_dir.display());

    // 3. Build Runtime (independent layer)
    tracing::debug!("Building runtime...");
    let setup = RuntimeBuilder::new().config(bootstrap_config).build()?;
    tracing::info!("Runtime built successfully");

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run Client (composition layer)
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
