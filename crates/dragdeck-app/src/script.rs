//! Gesture scripts: a page, its measured layout and a sequence of drag steps.
//!
//! ```json
//! {
//!   "page": "editor",
//!   "layout": { "newmor-hole-ingredinent-id": { "x0": 8, "y0": 8, "x1": 108, "y1": 108 } },
//!   "steps": [
//!     { "type": "start", "active": "newmor-hole-ingredinent-id" },
//!     { "type": "end", "over": { "id": "droppable-artbord-id", "rect": { .. } }, "delta": { "x": 400, "y": 100 } },
//!     { "type": "tick" }
//!   ]
//! }
//! ```

use crate::config::AppConfig;
use crate::pages::Page;
use anyhow::{Context, Result};
use dragdeck_core::{Artifact, DragEvent};
use kurbo::Rect;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tick {
    Tick,
}

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Event(DragEvent),
    /// Advance the UI by one tick.
    Tick(Tick),
}

/// A scripted session against one page.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub page: Page,
    #[serde(default)]
    pub config: AppConfig,
    /// Measured element bounds, keyed by element id.
    #[serde(default)]
    pub layout: HashMap<String, Rect>,
    /// Artifacts already on the artboard (editor only).
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse gesture script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid script {}", path.display()))
    }
}
