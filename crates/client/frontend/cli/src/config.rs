//! CLI-specific configuration for terminal UI.
use std::env;
use std::time::Duration;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub input: InputConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `CLI_SIDE_PANEL_WIDTH` - Width of the units/HUD column (default: 34)
    /// - `CLI_KEY_HOLD_MS` - How long a key press keeps acting (default: 150)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        if let Some(width) = read_env::<u16>("CLI_SIDE_PANEL_WIDTH") {
            config.ui.side_panel_width = width.max(20);
        }

        if let Some(hold) = read_env::<u64>("CLI_KEY_HOLD_MS") {
            config.input.key_hold_ms = hold.max(1);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Width of the column holding the units panel and HUD.
    pub side_panel_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            side_panel_width: 34,
        }
    }
}

/// Keyboard handling configuration.
///
/// Most terminals report key presses and auto-repeats but no releases, so a
/// press counts as held for `key_hold_ms` after it was last seen.
#[derive(Clone, Debug)]
pub struct InputConfig {
    pub key_hold_ms: u64,
}

impl InputConfig {
    pub fn key_hold(&self) -> Duration {
        Duration::from_millis(self.key_hold_ms)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { key_hold_ms: 150 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
