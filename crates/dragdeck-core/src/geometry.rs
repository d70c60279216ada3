//! Artboard coordinate transforms and drop placement checks.
//!
//! Placed artifacts store their position as a fraction of the artboard's
//! size so they stay put when the artboard is measured at a different
//! viewport offset. Everything coming from the pointer is in pixel space.

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// A position expressed as a fraction of a container's width and height.
///
/// `(0, 0)` is the container's top-left corner and `(1, 1)` its bottom-right.
/// Values outside `[0, 1]` are representable; nothing here clamps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check whether both axes fall inside `[0, 1]`.
    pub fn is_within_unit(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// Convert a pixel-space point to coordinates relative to `rect`.
pub fn normalize(point: Point, rect: Rect) -> NormalizedPoint {
    let offset = point - rect.origin();
    NormalizedPoint {
        x: offset.x / rect.width(),
        y: offset.y / rect.height(),
    }
}

/// Convert normalized coordinates back to a pixel-space point.
///
/// Exact inverse of [`normalize`] for the same `rect`.
pub fn denormalize(normalized: NormalizedPoint, rect: Rect) -> Point {
    rect.origin() + denormalize_local(normalized, rect.size())
}

/// Pixel offset of normalized coordinates from the container's top-left corner.
pub fn denormalize_local(normalized: NormalizedPoint, size: Size) -> Vec2 {
    Vec2::new(normalized.x * size.width, normalized.y * size.height)
}

/// Outcome of a placement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The whole item box fits inside the container.
    Valid,
    /// The pointer was not over any drop container.
    NoTarget,
    /// Some edge of the item box falls outside the container.
    OutOfBounds,
}

impl Placement {
    pub fn is_valid(self) -> bool {
        self == Placement::Valid
    }
}

/// Check whether an item of `item` size with its top-left corner at
/// `candidate` fits entirely inside `container`.
///
/// Touching an edge is allowed; any overhang is not. Non-finite candidates
/// never fit.
pub fn check_placement(container: Option<Rect>, candidate: Point, item: Size) -> Placement {
    let Some(rect) = container else {
        return Placement::NoTarget;
    };

    let fits = rect.x0 <= candidate.x
        && rect.y0 <= candidate.y
        && candidate.x + item.width <= rect.x1
        && candidate.y + item.height <= rect.y1;
    if fits {
        Placement::Valid
    } else {
        Placement::OutOfBounds
    }
}

/// Shorthand for `check_placement(..).is_valid()`.
pub fn can_place(container: Option<Rect>, candidate: Point, item: Size) -> bool {
    check_placement(container, candidate, item).is_valid()
}
