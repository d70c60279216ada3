//! Notifications emitted by the pointer-drag provider.

use kurbo::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// The droppable element currently under the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropTarget {
    /// Element id of the droppable.
    pub id: String,
    /// Its bounding rectangle in pixel space.
    pub rect: Rect,
}

impl DropTarget {
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self { id: id.into(), rect }
    }
}

/// One drag notification.
///
/// A gesture is always `Start`, any number of `Over`, then exactly one of
/// `End` or `Cancel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    Start {
        active: String,
    },
    Over {
        active: String,
        #[serde(default)]
        over: Option<DropTarget>,
    },
    End {
        #[serde(default)]
        over: Option<DropTarget>,
        /// Pointer movement since `Start`.
        delta: Vec2,
    },
    Cancel,
}

impl DragEvent {
    pub fn start(active: impl Into<String>) -> Self {
        DragEvent::Start {
            active: active.into(),
        }
    }

    pub fn over(active: impl Into<String>, over: Option<DropTarget>) -> Self {
        DragEvent::Over {
            active: active.into(),
            over,
        }
    }

    pub fn end(over: Option<DropTarget>, delta: Vec2) -> Self {
        DragEvent::End { over, delta }
    }

    /// Whether this event finishes a gesture.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DragEvent::End { .. } | DragEvent::Cancel)
    }
}
