//! Drag session state machine.
//!
//! ```text
//! Idle --start--> Dragging --end--> Settling --tick--> Idle
//!                    |                  ^
//!                    +--cancel/reject---+--> Idle
//! ```
//!
//! `Settling` is the single tick after a committed drop during which the
//! dragged preview stays mounted so its exit animation can play.

use kurbo::Point;

/// Phase of the current drag gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is in progress.
    Dragging {
        /// Id of the dragged element.
        active: String,
        /// Pixel-space top-left of the dragged element when the gesture began.
        /// `None` when the element could not be measured.
        origin: Option<Point>,
    },
    /// A drop was committed; the active id is cleared on the next tick.
    Settling { active: String },
}

/// Tracks a single drag gesture at a time.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    phase: DragPhase,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Start a gesture, discarding any settling state.
    pub fn begin(&mut self, active: impl Into<String>, origin: Option<Point>) {
        let active = active.into();
        if let DragPhase::Dragging { active: previous, .. } = &self.phase {
            log::warn!("Drag of {active} started while {previous} was still active");
        }
        log::debug!("Drag started: {active} at {origin:?}");
        self.phase = DragPhase::Dragging { active, origin };
    }

    /// Leave `Dragging`, returning the active id and origin.
    ///
    /// Returns `None` (and leaves the phase alone) when no gesture is in progress.
    pub fn finish(&mut self) -> Option<(String, Option<Point>)> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { active, origin } => Some((active, origin)),
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Enter `Settling` for a committed drop.
    pub fn settle(&mut self, active: impl Into<String>) {
        self.phase = DragPhase::Settling {
            active: active.into(),
        };
    }

    /// Abort the gesture in progress. Returns true if there was one.
    pub fn cancel(&mut self) -> bool {
        if self.is_dragging() {
            log::debug!("Drag cancelled");
            self.phase = DragPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Advance one tick, clearing a settled drop. Returns true if it did.
    pub fn tick(&mut self) -> bool {
        if matches!(self.phase, DragPhase::Settling { .. }) {
            self.phase = DragPhase::Idle;
            true
        } else {
            false
        }
    }

    /// The active id while dragging or settling.
    pub fn active_id(&self) -> Option<&str> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { active, .. } | DragPhase::Settling { active } => Some(active.as_str()),
        }
    }

    /// Origin of the gesture in progress.
    pub fn origin(&self) -> Option<Point> {
        match &self.phase {
            DragPhase::Dragging { origin, .. } => *origin,
            _ => None,
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, DragPhase::Settling { .. })
    }

    pub fn is_idle(&self) -> bool {
        self.phase == DragPhase::Idle
    }
}
