//! Terminal presentation components used by the CLI client.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

/// World pixels covered by one terminal cell horizontally.
///
/// Cells are roughly twice as tall as they are wide, so a 72 px tile is drawn
/// as 4 columns by 2 rows.
pub const CELL_WIDTH_PX: u32 = 18;

/// World pixels covered by one terminal cell vertically.
pub const CELL_HEIGHT_PX: u32 = 36;
