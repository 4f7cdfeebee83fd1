//! Units panel: health of everything currently on screen.

use client_frontend_core::view_model::{UnitView, ViewModel};
use game_core::UnitKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::health_bar;
use crate::presentation::theme::RatatuiTheme;

const BAR_WIDTH: usize = 10;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL).title(" Units ");
    let name_width = (block.inner(area).width as usize).saturating_sub(BAR_WIDTH + 3 + 9);

    let mut lines: Vec<Line> = view_model
        .units
        .iter()
        .map(|unit| unit_line(unit, name_width, theme))
        .collect();

    if lines.is_empty() {
        lines.push(Line::styled("Nobody around.", theme.label()));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn unit_line<'a>(unit: &'a UnitView, name_width: usize, theme: &RatatuiTheme) -> Line<'a> {
    let (glyph, glyph_style) = theme.unit(unit.kind);
    let mut spans = vec![
        Span::styled(glyph.to_string(), glyph_style),
        Span::raw(" "),
        Span::raw(truncate(&unit.name, name_width)),
    ];

    if unit.kind != UnitKind::Villager {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            health_bar(unit.health, BAR_WIDTH),
            theme.health(unit.health),
        ));
        spans.push(Span::styled(
            format!(" {}/{}", unit.hp.max(0), unit.max_hp),
            Style::default(),
        ));
    }

    Line::from(spans)
}

fn truncate(text: &str, width: usize) -> String {
    let padded: String = text.chars().take(width).collect();
    format!("{padded:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_padded_and_cut_to_width() {
        assert_eq!(truncate("Bat", 6), "Bat   ");
        assert_eq!(truncate("Prince Aldric", 6), "Prince");
    }
}
