//! Terminal setup/teardown helpers for the CLI UI.
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Set when the terminal agreed to report key releases.
static KEY_RELEASES: AtomicBool = AtomicBool::new(false);

pub fn init() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    if supports_keyboard_enhancement().unwrap_or(false) {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
        KEY_RELEASES.store(true, Ordering::Relaxed);
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    Ok(terminal)
}

pub fn restore() -> Result<()> {
    let mut stdout = io::stdout();
    if KEY_RELEASES.swap(false, Ordering::Relaxed) {
        execute!(stdout, PopKeyboardEnhancementFlags)?;
    }
    execute!(stdout, LeaveAlternateScreen, crossterm::cursor::Show)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restores the terminal when dropped, including on early returns and panics.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(error) = restore() {
            tracing::warn!("Failed to restore terminal: {}", error);
        }
    }
}
