//! Measurement of rendered elements.

use kurbo::Rect;
use std::collections::HashMap;

/// Element id of the artboard drop target.
pub const ARTBOARD_ID: &str = "droppable-artbord-id";

/// Source of on-screen element bounds.
///
/// Implemented by whatever owns the rendered tree. Rectangles are in pixel
/// space with the viewport offset included. Returns `None` for elements that
/// are not mounted yet.
pub trait Layout {
    fn bounding_rect(&self, id: &str) -> Option<Rect>;
}

impl<T: Layout + ?Sized> Layout for &T {
    fn bounding_rect(&self, id: &str) -> Option<Rect> {
        (**self).bounding_rect(id)
    }
}

/// A fixed table of element bounds, for hosts without a live layout and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    rects: HashMap<String, Rect>,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the bounds of an element, replacing any previous value.
    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, id: impl Into<String>, rect: Rect) -> Self {
        self.insert(id, rect);
        self
    }

    /// Forget an element (as if it were unmounted).
    pub fn remove(&mut self, id: &str) -> Option<Rect> {
        self.rects.remove(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl Layout for StaticLayout {
    fn bounding_rect(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }
}

impl FromIterator<(String, Rect)> for StaticLayout {
    fn from_iter<I: IntoIterator<Item = (String, Rect)>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}
