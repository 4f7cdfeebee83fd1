//! Messages widget displaying recent game events.

use client_frontend_core::message::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the message log panel.
///
/// `messages` is newest first; the list grows upward so the newest line sits
/// at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &[MessageEntry], theme: &RatatuiTheme) {
    let items: Vec<ListItem> = messages
        .iter()
        .map(|entry| ListItem::new(format_message(entry)).style(theme.message(entry.level)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Messages "))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format a message entry with optional timestamp in seconds.
fn format_message(entry: &MessageEntry) -> String {
    match entry.timestamp {
        Some(ms) => format!("[{:>6.1}s] {}", ms as f64 / 1000.0, entry.text),
        None => entry.text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::message::MessageLevel;

    #[test]
    fn timestamps_are_seconds() {
        let entry = MessageEntry::new("You hit the Zombie for 9.", Some(12_345), MessageLevel::Combat);
        assert_eq!(format_message(&entry), "[  12.3s] You hit the Zombie for 9.");

        let plain = MessageEntry::new("Welcome.", None, MessageLevel::Info);
        assert_eq!(format_message(&plain), "Welcome.");
    }
}
