//! Application configuration.

use dragdeck_core::GRID_SIZE;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Page dimensions and behaviour. Any field missing from a script keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Artboard width in pixels.
    pub artboard_width: f64,
    /// Artboard height in pixels.
    pub artboard_height: f64,
    /// Width of the ingredient side panel; the artboard starts right of it.
    pub sidebar_width: f64,
    /// Grid applied to drag deltas (None = no snapping).
    pub grid_size: Option<f64>,
    /// Initial sortable list.
    pub sort_items: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artboard_width: 1000.0,
            artboard_height: 600.0,
            sidebar_width: 300.0,
            grid_size: Some(GRID_SIZE),
            sort_items: (1..=5).map(|i| i.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Artboard bounds used when the script's layout does not measure it.
    pub fn artboard_rect(&self) -> Rect {
        Rect::from_origin_size(
            Point::new(self.sidebar_width, 0.0),
            Size::new(self.artboard_width, self.artboard_height),
        )
    }
}
