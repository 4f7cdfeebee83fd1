//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the ViewModel and renders to a
//! terminal frame.

pub mod header;
pub mod hud;
pub mod map;
pub mod messages;
pub mod units;

/// Text health bar such as `[######----]`.
pub(crate) fn health_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_bar_rounds_to_width() {
        assert_eq!(health_bar(1.0, 4), "[####]");
        assert_eq!(health_bar(0.5, 4), "[##--]");
        assert_eq!(health_bar(0.0, 4), "[----]");
        assert_eq!(health_bar(1.7, 2), "[##]");
    }
}
