//! Tracing setup for the terminal client.
//!
//! The terminal belongs to the UI, so logs go to a file only.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "rpg.log";

/// Installs a file-backed subscriber.
///
/// Logs land in `<log dir>/<session>/rpg.log`, where the log directory is
/// `RPG_LOG_DIR` if set, the platform cache directory otherwise, or `logs/`
/// as a last resort. `RUST_LOG` overrides the default `info` filter.
pub fn setup_logging(session_id: &Option<String>) -> Result<()> {
    let session_id = session_id.clone().unwrap_or_else(|| {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    // Keep the writer alive for the rest of the process
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", session_log_dir.join(LOG_FILE).display());

    Ok(())
}

fn log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os("RPG_LOG_DIR") {
        return PathBuf::from(dir);
    }

    ProjectDirs::from("", "", "rpg")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
