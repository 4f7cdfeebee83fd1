//! Map widget rendering terrain, items and units around the camera.
//!
//! Each terminal cell stands for a `CELL_WIDTH_PX` x `CELL_HEIGHT_PX` block of
//! world pixels and shows the terrain under its center. Items and units are
//! projected through the camera, then name labels and dialogue boxes are
//! drawn above them.

use client_frontend_core::view_model::ViewModel;
use game_core::{Camera, Facing, Position, TilePosition, UnitKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{
    CELL_HEIGHT_PX, CELL_WIDTH_PX,
    theme::{Glyph, RatatuiTheme},
};

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL).title(" Map ");
    let inner = block.inner(area);
    let canvas = draw(view_model, inner.width, inner.height, theme);
    frame.render_widget(Paragraph::new(canvas.into_lines()).block(block), area);
}

/// Composes the map into a canvas of `width` x `height` cells.
fn draw(view_model: &ViewModel, width: u16, height: u16, theme: &RatatuiTheme) -> Canvas {
    let camera = &view_model.camera;
    let tile_size = camera.tile_size() as i32;
    let mut canvas = Canvas::new(width, height);

    let (cell_w, cell_h) = (CELL_WIDTH_PX as i32, CELL_HEIGHT_PX as i32);

    for row in 0..height as i32 {
        for column in 0..width as i32 {
            // sample the terrain under the cell's center
            let world_x = camera.x() + column * cell_w + cell_w / 2;
            let world_y = camera.y() + row * cell_h + cell_h / 2;
            let tile = TilePosition::new(
                world_x.div_euclid(tile_size),
                world_y.div_euclid(tile_size),
            );
            let terrain = view_model.map.terrain_at(tile);
            canvas.put(column, row, theme.terrain(terrain));
        }
    }

    for item in &view_model.items {
        let (column, row) = cell_of(camera, item.position);
        canvas.put(column, row, theme.item());
    }

    // Labels go first so sprites drawn later stay on top of them.
    for unit in &view_model.units {
        let (column, row) = cell_of(camera, unit.position);
        if unit.kind != UnitKind::PassiveMonster {
            canvas.text_centered(column, row - 1, &unit.name, theme.label());
        }
    }

    let player = &view_model.player;
    let sprites = view_model
        .units
        .iter()
        .map(|unit| (unit.kind, unit.position, unit.facing))
        .chain(std::iter::once((
            UnitKind::Player,
            player.position,
            player.facing,
        )));
    for (kind, position, facing) in sprites {
        let (column, row) = cell_of(camera, position);
        let (glyph, style) = theme.unit(kind);
        canvas.put(column, row, (glyph, style));
        let marker = match facing {
            Facing::Left => column - 1,
            Facing::Right => column + 1,
        };
        canvas.put(marker, row, (theme.facing(facing), style));
    }

    for unit in view_model.speaking() {
        if let Some(line) = &unit.dialogue {
            let (column, row) = cell_of(camera, unit.position);
            canvas.text_centered(column, row - 2, &format!(" {line} "), theme.dialogue());
        }
    }

    canvas
}

/// Terminal cell for a world position, relative to the map's top-left cell.
fn cell_of(camera: &Camera, position: Position) -> (i32, i32) {
    (
        camera.relative_x(position.x).div_euclid(CELL_WIDTH_PX as i32),
        camera.relative_y(position.y).div_euclid(CELL_HEIGHT_PX as i32),
    )
}

/// Fixed-size grid of styled cells; writes outside the grid are dropped.
struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Glyph>,
}

impl Canvas {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![(' ', Style::default()); width as usize * height as usize],
        }
    }

    fn put(&mut self, column: i32, row: i32, glyph: Glyph) {
        if column < 0 || row < 0 || column >= self.width as i32 || row >= self.height as i32 {
            return;
        }
        self.cells[row as usize * self.width as usize + column as usize] = glyph;
    }

    fn text_centered(&mut self, center: i32, row: i32, text: &str, style: Style) {
        let start = center - text.chars().count() as i32 / 2;
        for (offset, ch) in text.chars().enumerate() {
            self.put(start + offset as i32, row, (ch, style));
        }
    }

    /// Merges runs of equally styled cells into spans.
    fn into_lines(self) -> Vec<Line<'static>> {
        if self.width == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.width as usize)
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut run = String::new();
                let mut run_style = row[0].1;
                for &(ch, style) in row {
                    if style != run_style && !run.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut run), run_style));
                    }
                    run_style = style;
                    run.push(ch);
                }
                spans.push(Span::styled(run, run_style));
                Line::from(spans)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn canvas_clips_and_centers_text() {
        let mut canvas = Canvas::new(8, 2);
        canvas.put(-1, 0, ('x', Style::default()));
        canvas.put(8, 1, ('x', Style::default()));
        canvas.text_centered(4, 1, "Garth", Style::default());

        let lines = canvas.into_lines();
        assert_eq!(row_text(&lines[0]), "        ");
        assert_eq!(row_text(&lines[1]), "  Garth ");
    }

    #[test]
    fn runs_of_one_style_share_a_span() {
        let theme = RatatuiTheme::new();
        let mut canvas = Canvas::new(4, 1);
        canvas.put(2, 0, theme.item());

        let lines = canvas.into_lines();
        assert_eq!(lines[0].spans.len(), 3);
        assert_eq!(row_text(&lines[0]), "  * ");
    }

    #[test]
    fn positions_map_to_cells_through_the_camera() {
        let mut camera = Camera::default();
        camera.update(Position::new(738.0, 549.0));
        // camera origin is (338, 284)
        assert_eq!(cell_of(&camera, Position::new(338.0, 284.0)), (0, 0));
        assert_eq!(cell_of(&camera, Position::new(738.0, 549.0)), (22, 7));
        assert_eq!(cell_of(&camera, Position::new(300.0, 284.0)), (-3, 0));
    }
}
