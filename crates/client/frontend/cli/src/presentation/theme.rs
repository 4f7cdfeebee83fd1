//! Ratatui styling for the terminal UI.
//!
//! Glyphs and colors for terrain, units and messages live here so widgets
//! only decide where things go.

use client_frontend_core::message::MessageLevel;
use game_core::{Facing, TerrainKind, UnitKind};
use ratatui::style::{Color, Modifier, Style};

/// A single map cell: glyph plus style.
pub type Glyph = (char, Style);

/// Consistent color scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn terrain(&self, terrain: TerrainKind) -> Glyph {
        let (glyph, fg, bg) = match terrain {
            TerrainKind::Grass => ('"', Color::Green, Color::Rgb(18, 48, 18)),
            TerrainKind::Floor => ('.', Color::Gray, Color::Rgb(48, 44, 40)),
            TerrainKind::Road => (':', Color::Rgb(170, 140, 90), Color::Rgb(70, 56, 36)),
            TerrainKind::Bridge => ('=', Color::Rgb(190, 130, 70), Color::Rgb(80, 50, 24)),
            TerrainKind::Sand => ('.', Color::LightYellow, Color::Rgb(96, 86, 48)),
            TerrainKind::Wall => ('#', Color::Gray, Color::Rgb(70, 70, 70)),
            TerrainKind::Water => ('~', Color::LightBlue, Color::Rgb(16, 40, 96)),
            TerrainKind::Tree => ('T', Color::LightGreen, Color::Rgb(10, 36, 10)),
            TerrainKind::Rock => ('^', Color::DarkGray, Color::Rgb(40, 40, 44)),
            TerrainKind::Void => (' ', Color::Reset, Color::Black),
        };
        (glyph, Style::default().fg(fg).bg(bg))
    }

    pub fn unit(&self, kind: UnitKind) -> Glyph {
        let (glyph, color) = match kind {
            UnitKind::Player => ('@', Color::Yellow),
            UnitKind::Villager => ('V', Color::LightCyan),
            UnitKind::AggressiveMonster => ('M', Color::LightRed),
            UnitKind::PassiveMonster => ('b', Color::LightMagenta),
        };
        (
            glyph,
            Style::default()
                .fg(color)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    }

    /// Marker drawn beside a unit on the side it faces.
    pub fn facing(&self, facing: Facing) -> char {
        match facing {
            Facing::Left => '<',
            Facing::Right => '>',
        }
    }

    pub fn item(&self) -> Glyph {
        (
            '*',
            Style::default()
                .fg(Color::LightYellow)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn label(&self) -> Style {
        Style::default().fg(Color::White).bg(Color::Black)
    }

    pub fn dialogue(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn health(&self, ratio: f64) -> Style {
        let color = match (ratio * 100.0) as u32 {
            75.. => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };
        Style::default().fg(color)
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Combat => Style::default().fg(Color::LightRed),
            MessageLevel::Dialogue => Style::default().fg(Color::LightCyan),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn blocking_terrain_is_visually_distinct_from_walkable() {
        let theme = RatatuiTheme::new();
        let walkable: Vec<char> = TerrainKind::iter()
            .filter(|t| !t.blocks())
            .map(|t| theme.terrain(t).0)
            .collect();
        for terrain in TerrainKind::iter().filter(|t| t.blocks()) {
            assert!(!walkable.contains(&theme.terrain(terrain).0), "{terrain}");
        }
    }

    #[test]
    fn health_color_steps_down() {
        let theme = RatatuiTheme::new();
        assert_eq!(theme.health(1.0).fg, Some(Color::Green));
        assert_eq!(theme.health(0.5).fg, Some(Color::Yellow));
        assert_eq!(theme.health(0.1).fg, Some(Color::Red));
    }
}
