//! HUD panel with the player's health, combat stats and inventory.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Height of the HUD including borders when the inventory is full.
pub fn height(capacity: usize) -> u16 {
    // border, gauge, damage, rate, "Items:", one line per slot, border
    5 + capacity as u16
}

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let player = &view_model.player;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", player.name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(theme.health(player.health).bg(Color::Black))
        .ratio(player.health)
        .label(format!("Health: {}/{}", player.hp.max(0), player.max_hp));
    frame.render_widget(gauge, rows[0]);

    let label = Style::default().fg(Color::White);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Damage: ", label),
            Span::raw(player.damage.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Rate: ", label),
            Span::raw(format!("{} ms", player.cooldown)),
            if player.ready {
                Span::styled("  ready", Style::default().fg(Color::Green))
            } else {
                Span::styled("  ...", Style::default().fg(Color::DarkGray))
            },
        ]),
        Line::from(Span::styled(
            format!("Items: {}/{}", player.inventory.len(), player.capacity),
            label,
        )),
    ];

    if player.inventory.is_empty() {
        lines.push(Line::styled("  (none)", Style::default().fg(Color::DarkGray)));
    }
    for slot in &player.inventory {
        lines.push(Line::from(vec![
            Span::styled("  * ", theme.item().1),
            Span::raw(slot.name.as_str()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), rows[1]);
}
