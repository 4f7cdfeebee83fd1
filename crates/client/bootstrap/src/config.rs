//! Bootstrap configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Configuration required to bootstrap a game session.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    /// Directory holding `config.toml`, `units.ron` and friends.
    pub data_dir: PathBuf,
    /// Scenario file name under `scenarios/`, without extension.
    pub scenario: String,
    pub game_seed: Option<u64>,
    pub event_capacity: usize,
    pub max_frame_delta_ms: u32,
    pub session_id: Option<String>,
}

impl BootstrapConfig {
    pub const DEFAULT_SCENARIO: &'static str = "overworld";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Content directory (default: bundled `game-content/data`)
    /// - `GAME_SCENARIO` - Scenario name (default: overworld)
    /// - `GAME_SEED` - Fixed seed for deterministic rolls (default: random)
    /// - `RUNTIME_EVENT_CAPACITY` - Per-topic event bus capacity (default: 100)
    /// - `MAX_FRAME_DELTA_MS` - Longest simulated frame (default: 100)
    /// - `GAME_SESSION_ID` - Session label used in logs (default: none)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("CONTENT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(scenario) = env::var("GAME_SCENARIO")
            && !scenario.trim().is_empty()
        {
            config.scenario = scenario.trim().to_string();
        }

        config.game_seed = read_env::<u64>("GAME_SEED");

        if let Some(capacity) = read_env::<usize>("RUNTIME_EVENT_CAPACITY") {
            config.event_capacity = capacity.max(1);
        }

        if let Some(delta) = read_env::<u32>("MAX_FRAME_DELTA_MS") {
            config.max_frame_delta_ms = delta.max(1);
        }

        config.session_id = env::var("GAME_SESSION_ID").ok();

        config
    }

    /// Runtime settings derived from this configuration.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            event_buffer_size: self.event_capacity,
            max_frame_delta_ms: self.max_frame_delta_ms,
            game_seed: self.game_seed,
            session_id: self.session_id.clone(),
        }
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            data_dir: game_content::bundled_data_dir(),
            scenario: Self::DEFAULT_SCENARIO.to_string(),
            game_seed: None,
            event_capacity: RuntimeConfig::DEFAULT_EVENT_BUFFER_SIZE,
            max_frame_delta_ms: RuntimeConfig::DEFAULT_MAX_FRAME_DELTA_MS,
            session_id: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_carries_frame_and_bus_settings() {
        let config = BootstrapConfig {
            game_seed: Some(42),
            event_capacity: 16,
            max_frame_delta_ms: 50,
            session_id: Some("test".into()),
            ..BootstrapConfig::default()
        };

        let runtime = config.runtime_config();
        assert_eq!(runtime.event_buffer_size, 16);
        assert_eq!(runtime.max_frame_delta_ms, 50);
        assert_eq!(runtime.game_seed, Some(42));
        assert_eq!(runtime.session_id.as_deref(), Some("test"));
    }

    #[test]
    fn defaults_point_at_bundled_overworld() {
        let config = BootstrapConfig::default();
        assert_eq!(config.scenario, "overworld");
        assert!(config.data_dir.ends_with("data"));
    }
}
