//! Grid snapping for drag deltas.

use crate::event::DragEvent;
use kurbo::Vec2;

/// Default grid size in pixels.
pub const GRID_SIZE: f64 = 10.0;

/// Round each axis of a delta to the nearest multiple of `grid_size`.
///
/// A grid size that is not finite and positive leaves the delta untouched.
pub fn snap_delta(delta: Vec2, grid_size: f64) -> Vec2 {
    if !is_valid_grid(grid_size) {
        return delta;
    }
    Vec2::new(
        (delta.x / grid_size).round() * grid_size,
        (delta.y / grid_size).round() * grid_size,
    )
}

/// Whether `grid_size` can be snapped to.
pub fn is_valid_grid(grid_size: f64) -> bool {
    grid_size.is_finite() && grid_size > 0.0
}

/// Delta modifier applied to drag notifications before they reach a reducer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapModifier {
    grid_size: Option<f64>,
}

impl SnapModifier {
    /// Snap to a grid of the given size.
    pub fn grid(grid_size: f64) -> Self {
        Self {
            grid_size: Some(grid_size),
        }
    }

    /// Pass deltas through unchanged.
    pub fn none() -> Self {
        Self { grid_size: None }
    }

    pub fn grid_size(&self) -> Option<f64> {
        self.grid_size
    }

    pub fn is_enabled(&self) -> bool {
        self.grid_size.is_some()
    }

    /// Snap a delta.
    pub fn apply_delta(&self, delta: Vec2) -> Vec2 {
        match self.grid_size {
            Some(size) => snap_delta(delta, size),
            None => delta,
        }
    }

    /// Snap the delta carried by an event, if any.
    pub fn apply(&self, event: DragEvent) -> DragEvent {
        match event {
            DragEvent::End { over, delta } => DragEvent::End {
                over,
                delta: self.apply_delta(delta),
            },
            other => other,
        }
    }
}
