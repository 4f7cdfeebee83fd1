//! Header widget displaying the clock, player location and key bindings.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let player = &view_model.player;
    let tile = player.position.tile(view_model.camera.tile_size());

    let text = vec![Line::from(vec![
        Span::raw("Time: "),
        Span::styled(
            format_clock(view_model.clock),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Tile: "),
        Span::styled(
            format!("({}, {})", tile.x, tile.y),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | In view: "),
        Span::styled(
            view_model.units.len().to_string(),
            Style::default().fg(Color::LightGreen),
        ),
        Span::styled(
            "  move: arrows/wasd  attack: space  talk: t  quit: q",
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" RPG "));

    frame.render_widget(paragraph, area);
}

/// `mm:ss` from a millisecond clock.
fn format_clock(clock: u64) -> String {
    let seconds = clock / 1000;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_shows_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(61_999), "01:01");
        assert_eq!(format_clock(3_600_000), "60:00");
    }
}
