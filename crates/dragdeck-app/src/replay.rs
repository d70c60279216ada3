//! Replays a gesture script against the page it targets.

use crate::config::AppConfig;
use crate::pages::Page;
use crate::script::{Script, Step};
use dragdeck_core::{
    ARTBOARD_ID, DragEvent, DropOutcome, Editor, EditorSnapshot, Layout, SnapModifier, SortableList,
    StaticLayout,
};
use serde::Serialize;

/// Final state of a replayed page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum ReplayReport {
    Editor {
        /// One entry per drag event, in order.
        outcomes: Vec<DropOutcome>,
        state: EditorSnapshot,
    },
    Sort {
        /// Number of hovers that changed the order.
        reorders: usize,
        items: Vec<String>,
    },
}

impl ReplayReport {
    pub fn page(&self) -> Page {
        match self {
            ReplayReport::Editor { .. } => Page::Editor,
            ReplayReport::Sort { .. } => Page::Sort,
        }
    }
}

fn snap_modifier(config: &AppConfig) -> SnapModifier {
    match config.grid_size {
        Some(size) => SnapModifier::grid(size),
        None => SnapModifier::none(),
    }
}

/// Run every step of `script` and report the resulting state.
pub fn replay(script: Script) -> ReplayReport {
    log::info!("Replaying {} steps on {}", script.steps.len(), script.page.route());
    match script.page {
        Page::Editor => replay_editor(script),
        Page::Sort => replay_sort(script),
    }
}

fn replay_editor(script: Script) -> ReplayReport {
    let modifier = snap_modifier(&script.config);
    let mut layout: StaticLayout = script.layout.into_iter().collect();
    if layout.bounding_rect(ARTBOARD_ID).is_none() {
        layout.insert(ARTBOARD_ID, script.config.artboard_rect());
    }

    let mut editor = Editor::with_artifacts(script.artifacts);
    let mut outcomes = Vec::new();
    for step in script.steps {
        match step {
            Step::Event(event) => {
                let outcome = editor.handle(modifier.apply(event), &layout);
                log::debug!("Editor outcome: {outcome:?}");
                outcomes.push(outcome);
            }
            Step::Tick(_) => {
                editor.tick();
            }
        }
    }

    ReplayReport::Editor {
        outcomes,
        state: editor.snapshot(),
    }
}

fn replay_sort(script: Script) -> ReplayReport {
    let mut list = SortableList::new(script.config.sort_items);
    let mut reorders = 0;
    for step in script.steps {
        if let Step::Event(event) = step {
            let is_hover = matches!(event, DragEvent::Over { .. });
            // A cancel that restores the pre-drag order is not a reorder.
            if list.handle(event) && is_hover {
                reorders += 1;
            }
        }
    }

    ReplayReport::Sort {
        reorders,
        items: list.items().to_vec(),
    }
}
