//! UI rendering using the widget set and the ViewModel.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use ratatui::{
    Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    config::UiConfig,
    presentation::{CELL_HEIGHT_PX, CELL_WIDTH_PX, theme::RatatuiTheme, widgets},
};
use client_frontend_core::{message::MessageLog, view_model::ViewModel};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub ui: &'a UiConfig,
}

/// Screen regions for each panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiLayout {
    pub header: Rect,
    pub map: Rect,
    pub units: Rect,
    pub hud: Rect,
    pub messages: Rect,
}

impl UiLayout {
    /// ```text
    /// +------------------------------+
    /// | header                       |
    /// +--------------------+---------+
    /// | map                | units   |
    /// |                    +---------+
    /// |                    | hud     |
    /// +--------------------+---------+
    /// | messages                     |
    /// +------------------------------+
    /// ```
    pub fn new(area: Rect, ui: &UiConfig, hud_height: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                       // Header
                Constraint::Min(0),                          // Map + side column
                Constraint::Length(ui.message_panel_height), // Messages
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(ui.side_panel_width)])
            .split(rows[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(hud_height)])
            .split(body[1]);

        Self {
            header: rows[0],
            map: body[0],
            units: side[0],
            hud: side[1],
            messages: rows[2],
        }
    }

    /// Camera viewport in world pixels matching the map panel's interior.
    pub fn map_viewport(&self) -> (u32, u32) {
        let columns = u32::from(self.map.width.saturating_sub(2)).max(1);
        let rows = u32::from(self.map.height.saturating_sub(2)).max(1);
        (columns * CELL_WIDTH_PX, rows * CELL_HEIGHT_PX)
    }
}

/// Render the terminal UI from the ViewModel.
pub fn render_with_view_model<B: Backend>(
    terminal: &mut Terminal<B>,
    ctx: &RenderContext,
) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let layout = UiLayout::new(
            frame.area(),
            ctx.ui,
            widgets::hud::height(ctx.view_model.player.capacity),
        );

        widgets::header::render(frame, layout.header, ctx.view_model);
        widgets::map::render(frame, layout.map, ctx.view_model, &theme);
        widgets::units::render(frame, layout.units, ctx.view_model, &theme);
        widgets::hud::render(frame, layout.hud, ctx.view_model, &theme);

        let recent_messages: Vec<_> = ctx
            .messages
            .recent(ctx.ui.message_panel_height as usize)
            .cloned()
            .collect();
        widgets::messages::render(frame, layout.messages, &recent_messages, &theme);
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_splits_an_80x30_terminal() {
        let ui = UiConfig::default();
        let layout = UiLayout::new(Rect::new(0, 0, 80, 30), &ui, 13);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.messages.height, ui.message_panel_height);
        assert_eq!(layout.map.width, 80 - ui.side_panel_width);
        assert_eq!(layout.map.height, 30 - 3 - ui.message_panel_height);
        assert_eq!(layout.hud.height, 13);
        assert_eq!(layout.units.height + layout.hud.height, layout.map.height);
    }

    #[test]
    fn viewport_matches_the_map_interior() {
        let ui = UiConfig::default();
        let layout = UiLayout::new(Rect::new(0, 0, 80, 30), &ui, 13);
        // 46 x 19 map panel, minus borders
        assert_eq!(layout.map_viewport(), (44 * 18, 17 * 36));
    }
}
