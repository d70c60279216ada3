//! Artboard editor: places ingredients and moves placed artifacts.
//!
//! The editor consumes [`DragEvent`]s and owns the list of placed artifacts.
//! Everything the side panel and the drag overlay show (which ingredient is
//! highlighted, which artifact is hidden, whether the overlay animates back)
//! is derived from the [`DragSession`] phase rather than stored separately.

use crate::artifact::{Artifact, ArtifactId, ArtifactStyle};
use crate::event::{DragEvent, DropTarget};
use crate::geometry::{self, Placement, denormalize, denormalize_local, normalize};
use crate::ingredient::{self, INGREDIENTS, Ingredient};
use crate::layout::{ARTBOARD_ID, Layout};
use crate::resolve::{ActiveArtifact, resolve};
use crate::session::{DragPhase, DragSession};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Opacity of a side-panel ingredient while it is being dragged.
pub const ACTIVE_INGREDIENT_OPACITY: f64 = 0.5;

/// Duration of the overlay's return animation after a rejected drop.
pub const DROP_ANIMATION_MS: u32 = 500;

/// Easing of the overlay's return animation.
pub const DROP_ANIMATION_EASING: &str = "cubic-bezier(0.18, 0.67, 0.6, 1.22)";

/// How the drag overlay leaves the screen when the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DropAnimation {
    /// Disappear immediately (the dropped artifact takes its place).
    Instant,
    /// Fly back to where the drag started.
    Eased {
        duration_ms: u32,
        easing: &'static str,
    },
}

/// Why a drop did not change anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The pointer was not over a drop target.
    NoTarget,
    /// The item would stick out of the drop target.
    OutOfBounds,
    /// The dragged element had no measured origin.
    Unmeasured,
    /// The active id matched neither an ingredient nor a placed artifact.
    Unresolved,
}

/// Result of feeding one event to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DropOutcome {
    /// A gesture is in progress.
    Pending,
    /// A new artifact was placed.
    Created(ArtifactId),
    /// An existing artifact was moved.
    Moved(ArtifactId),
    /// The drop was discarded.
    Rejected(RejectReason),
    /// The gesture was cancelled.
    Cancelled,
    /// The event did not apply to the current phase.
    Ignored,
}

impl DropOutcome {
    /// Whether the artifact list changed.
    pub fn is_commit(&self) -> bool {
        matches!(self, DropOutcome::Created(_) | DropOutcome::Moved(_))
    }
}

/// Serializable view of the editor state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub artifacts: Vec<Artifact>,
    pub active_id: Option<String>,
}

/// The artboard editor.
#[derive(Debug, Clone)]
pub struct Editor {
    /// Placed artifacts, most recently created first.
    artifacts: Vec<Artifact>,
    ingredients: &'static [Ingredient],
    session: DragSession,
    /// Last successful measurement of the artboard.
    artboard: Option<Rect>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an empty editor using the built-in ingredient catalog.
    pub fn new() -> Self {
        Self::with_artifacts(Vec::new())
    }

    /// Create an editor with pre-placed artifacts.
    pub fn with_artifacts(artifacts: Vec<Artifact>) -> Self {
        Self {
            artifacts,
            ingredients: &INGREDIENTS,
            session: DragSession::new(),
            artboard: None,
        }
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn ingredients(&self) -> &'static [Ingredient] {
        self.ingredients
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn artifact(&self, id: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.id == id)
    }

    /// Bounds of the artboard, if it has been measured.
    pub fn artboard(&self) -> Option<Rect> {
        self.artboard
    }

    pub fn set_artboard(&mut self, rect: Rect) {
        self.artboard = Some(rect);
    }

    /// Re-measure the artboard. A failed measurement keeps the previous value.
    pub fn measure_artboard(&mut self, layout: &impl Layout) -> Option<Rect> {
        match layout.bounding_rect(ARTBOARD_ID) {
            Some(rect) => self.artboard = Some(rect),
            None => log::debug!("Artboard not measured; keeping {:?}", self.artboard),
        }
        self.artboard
    }

    /// Feed one drag notification.
    pub fn handle(&mut self, event: DragEvent, layout: &impl Layout) -> DropOutcome {
        match event {
            DragEvent::Start { active } => {
                self.on_drag_start(active, layout);
                DropOutcome::Pending
            }
            DragEvent::Over { .. } => {
                if self.session.is_dragging() {
                    DropOutcome::Pending
                } else {
                    DropOutcome::Ignored
                }
            }
            DragEvent::End { over, delta } => self.on_drag_end(over.as_ref(), delta),
            DragEvent::Cancel => {
                if self.session.cancel() {
                    DropOutcome::Cancelled
                } else {
                    log::warn!("Drag cancel without a drag in progress");
                    DropOutcome::Ignored
                }
            }
        }
    }

    /// Advance one tick, clearing the active id after a committed drop.
    pub fn tick(&mut self) -> bool {
        self.session.tick()
    }

    fn on_drag_start(&mut self, active: String, layout: &impl Layout) {
        self.measure_artboard(layout);
        let origin = self
            .placed_origin(&active)
            .or_else(|| layout.bounding_rect(&active).map(|rect| rect.origin()));
        if origin.is_none() {
            log::debug!("No origin for {active}; its drop will be skipped");
        }
        self.session.begin(active, origin);
    }

    /// Pixel-space origin of a placed artifact, derived from its stored coordinates.
    fn placed_origin(&self, id: &str) -> Option<Point> {
        let artboard = self.artboard?;
        let artifact = self.artifact(id)?;
        Some(denormalize(artifact.coordinates, artboard))
    }

    fn on_drag_end(&mut self, over: Option<&DropTarget>, delta: Vec2) -> DropOutcome {
        let Some((active, origin)) = self.session.finish() else {
            log::warn!("Drag end without a drag in progress");
            return DropOutcome::Ignored;
        };

        let Some((kind, style, text)) = resolve(&active, self.ingredients, &self.artifacts)
            .map(|a| (a.kind(), a.style(), a.text().map(str::to_owned)))
        else {
            log::warn!("Dropped unknown element {active}");
            return DropOutcome::Rejected(RejectReason::Unresolved);
        };

        let Some(origin) = origin else {
            log::debug!("Skipping drop of unmeasured {active}");
            return DropOutcome::Rejected(RejectReason::Unmeasured);
        };

        let candidate = origin + delta;
        let container = over.map(|target| target.rect);
        match geometry::check_placement(container, candidate, style.size()) {
            Placement::Valid => {}
            Placement::NoTarget => {
                log::debug!("Dropped {active} outside any target");
                return DropOutcome::Rejected(RejectReason::NoTarget);
            }
            Placement::OutOfBounds => {
                log::debug!("Dropped {active} out of bounds at {candidate:?}");
                return DropOutcome::Rejected(RejectReason::OutOfBounds);
            }
        }

        let Some(rect) = container else {
            return DropOutcome::Rejected(RejectReason::NoTarget);
        };
        let coordinates = normalize(candidate, rect);

        // Placed artifacts are moved even when their id collides with an ingredient.
        let is_placed = self.artifacts.iter().any(|a| a.id == active.as_str());
        let outcome = if is_placed {
            match self.artifacts.iter_mut().find(|a| a.id == active.as_str()) {
                Some(artifact) => {
                    artifact.coordinates = coordinates;
                    log::info!("Moved {} to {coordinates:?}", artifact.id);
                    DropOutcome::Moved(artifact.id.clone())
                }
                None => return DropOutcome::Rejected(RejectReason::Unresolved),
            }
        } else {
            let artifact = Artifact::new(kind, style, text, coordinates);
            let id = artifact.id.clone();
            log::info!("Placed {kind} as {id} at {coordinates:?}");
            self.artifacts.insert(0, artifact);
            DropOutcome::Created(id)
        };

        self.session.settle(active);
        outcome
    }

    /// Id of the element being dragged (also during the settle tick).
    pub fn active_id(&self) -> Option<&str> {
        self.session.active_id()
    }

    /// The element being dragged, for drawing its preview.
    pub fn active_artifact(&self) -> Option<ActiveArtifact<'_>> {
        let id = self.session.active_id()?;
        resolve(id, self.ingredients, &self.artifacts)
    }

    /// Where the preview of a dragged placed artifact sits inside the artboard.
    pub fn preview_offset(&self) -> Option<Vec2> {
        let active = self.active_artifact()?;
        let origin = self.session.origin()?;
        active.preview_offset(origin, self.artboard?)
    }

    /// Placed artifacts to draw on the artboard; the one being dragged is hidden.
    pub fn visible_artifacts(&self) -> impl Iterator<Item = &Artifact> {
        let active = self.session.active_id();
        self.artifacts
            .iter()
            .filter(move |a| active != Some(a.id.as_str()))
    }

    /// Pixel offset of a placed artifact from the artboard's top-left corner.
    pub fn artifact_offset(&self, artifact: &Artifact) -> Option<Vec2> {
        let artboard = self.artboard?;
        Some(denormalize_local(artifact.coordinates, artboard.size()))
    }

    /// Opacity of a side-panel ingredient. Placed artifacts are hidden while
    /// dragged, never dimmed.
    pub fn ingredient_opacity(&self, id: &str) -> f64 {
        if ingredient::is_ingredient(id) && self.session.is_active(id) {
            ACTIVE_INGREDIENT_OPACITY
        } else {
            1.0
        }
    }

    /// Style to draw a side-panel ingredient with.
    pub fn ingredient_style(&self, ingredient: &Ingredient) -> ArtifactStyle {
        ingredient.style.with_opacity(self.ingredient_opacity(ingredient.id))
    }

    /// Whether an ingredient (rather than a placed artifact) is being dragged.
    pub fn is_ingredient_dragging(&self) -> bool {
        self.active_artifact().is_some_and(|a| a.is_template())
    }

    /// How the overlay should leave when the current gesture ends.
    pub fn drop_animation(&self) -> DropAnimation {
        match self.session.phase() {
            DragPhase::Idle => DropAnimation::Eased {
                duration_ms: DROP_ANIMATION_MS,
                easing: DROP_ANIMATION_EASING,
            },
            DragPhase::Dragging { .. } | DragPhase::Settling { .. } => DropAnimation::Instant,
        }
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            artifacts: self.artifacts.clone(),
            active_id: self.active_id().map(str::to_owned),
        }
    }

    /// Serialize the editor state to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ArtifactKind;
    use crate::geometry::NormalizedPoint;
    use crate::ingredient::{HOLE, RECTANGLE};
    use crate::layout::StaticLayout;
    use kurbo::Size;

    fn artboard_rect() -> Rect {
        Rect::from_origin_size(Point::new(300.0, 100.0), Size::new(1000.0, 600.0))
    }

    fn layout() -> StaticLayout {
        StaticLayout::new()
            .with(ARTBOARD_ID, artboard_rect())
            .with(RECTANGLE.id, Rect::new(8.0, 8.0, 208.0, 108.0))
            .with(HOLE.id, Rect::new(8.0, 124.0, 108.0, 224.0))
    }

    fn artboard_target() -> Option<DropTarget> {
        Some(DropTarget::new(ARTBOARD_ID, artboard_rect()))
    }

    fn a1() -> Artifact {
        Artifact::with_id(
            "a1".into(),
            ArtifactKind::Rectangle,
            ArtifactStyle::new(200.0, 100.0),
            Some("a1".to_string()),
            NormalizedPoint::new(0.2, 0.2),
        )
    }

    fn assert_close(actual: NormalizedPoint, x: f64, y: f64) {
        assert!((actual.x - x).abs() < 1e-9, "x: {} != {}", actual.x, x);
        assert!((actual.y - y).abs() < 1e-9, "y: {} != {}", actual.y, y);
    }

    #[test]
    fn test_place_ingredient() {
        let layout = layout();
        let mut editor = Editor::new();

        assert_eq!(editor.handle(DragEvent::start(RECTANGLE.id), &layout), DropOutcome::Pending);
        // Ingredient origin (8, 8) to artboard pixel (600, 340) = normalized (0.3, 0.4).
        let outcome = editor.handle(DragEvent::end(artboard_target(), Vec2::new(592.0, 332.0)), &layout);

        let DropOutcome::Created(id) = outcome else {
            panic!("expected a new artifact, got {outcome:?}");
        };
        assert_eq!(editor.artifacts().len(), 1);
        let artifact = &editor.artifacts()[0];
        assert_eq!(artifact.id, id);
        assert_ne!(artifact.id.as_str(), RECTANGLE.id);
        assert_eq!(artifact.kind, ArtifactKind::Rectangle);
        assert_eq!(artifact.style, RECTANGLE.style);
        assert_close(artifact.coordinates, 0.3, 0.4);
    }

    #[test]
    fn test_new_artifacts_are_prepended() {
        let layout = layout();
        let mut editor = Editor::with_artifacts(vec![a1()]);

        editor.handle(DragEvent::start(HOLE.id), &layout);
        let outcome = editor.handle(DragEvent::end(artboard_target(), Vec2::new(400.0, 100.0)), &layout);
        assert!(outcome.is_commit());
        assert_eq!(editor.artifacts().len(), 2);
        assert_eq!(editor.artifacts()[0].kind, ArtifactKind::Hole);
        assert_eq!(editor.artifacts()[1].id, "a1");
    }

    #[test]
    fn test_move_existing_artifact() {
        let layout = layout();
        let mut editor = Editor::with_artifacts(vec![a1()]);

        editor.handle(DragEvent::start("a1"), &layout);
        // a1 starts at pixel (500, 220); (800, 400) is normalized (0.5, 0.5).
        assert_eq!(editor.session().origin(), Some(Point::new(500.0, 220.0)));
        let outcome = editor.handle(DragEvent::end(artboard_target(), Vec2::new(300.0, 180.0)), &layout);

        assert_eq!(outcome, DropOutcome::Moved("a1".into()));
        assert_eq!(editor.artifacts().len(), 1);
        assert_close(editor.artifact("a1").unwrap().coordinates, 0.5, 0.5);
        assert_eq!(editor.artifact("a1").unwrap().text.as_deref(), Some("a1"));
    }

    #[test]
    fn test_move_placed_artifact_sharing_ingredient_id() {
        let layout = layout();
        let placed = Artifact::with_id(
            HOLE.id.into(),
            ArtifactKind::Hole,
            HOLE.style,
            None,
            NormalizedPoint::new(0.2, 0.2),
        );
        let mut editor = Editor::with_artifacts(vec![placed]);

        editor.handle(DragEvent::start(HOLE.id), &layout);
        let outcome = editor.handle(DragEvent::end(artboard_target(), Vec2::new(300.0, 180.0)), &layout);

        assert_eq!(outcome, DropOutcome::Moved(HOLE.id.into()));
        assert_eq!(editor.artifacts().len(), 1);
        assert_close(editor.artifacts()[0].coordinates, 0.5, 0.5);
    }

    #[test]
    fn test_non_finite_delta_is_rejected() {
        let layout = layout();
        let mut editor = Editor::new();

        for delta in [
            Vec2::new(f64::NAN, f64::NAN),
            Vec2::new(f64::INFINITY, 0.0),
            Vec2::new(0.0, f64::NEG_INFINITY),
        ] {
            editor.handle(DragEvent::start(RECTANGLE.id), &layout);
            let outcome = editor.handle(DragEvent::end(artboard_target(), delta), &layout);
            assert_eq!(outcome, DropOutcome::Rejected(RejectReason::OutOfBounds));
        }
        assert!(editor.artifacts().is_empty());
    }

    #[test]
    fn test_nan_grid_keeps_snapshot_readable() {
        let layout = layout();
        let mut editor = Editor::new();
        let snap = crate::snap::SnapModifier::grid(f64::NAN);

        editor.handle(DragEvent::start(RECTANGLE.id), &layout);
        let end = snap.apply(DragEvent::end(artboard_target(), Vec2::new(592.0, 332.0)));
        assert!(editor.handle(end, &layout).is_commit());
        assert_close(editor.artifacts()[0].coordinates, 0.3, 0.4);

        let json = editor.to_json().unwrap();
        assert!(serde_json::from_str::<EditorSnapshot>(&json).is_ok());
    }

    #[test]
    fn test_drop_outside_artboard_discards() {
        let layout = layout();
        let mut editor = Editor::with_artifacts(vec![a1()]);
        let before = editor.artifacts().to_vec();

        editor.handle(DragEvent::start("a1"), &layout);
        let outcome = editor.handle(DragEvent::end(artboard_target(), Vec2::new(5000.0, 0.0)), &layout);
        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::OutOfBounds));

        editor.handle(DragEvent::start(RECTANGLE.id), &layout);
        let outcome = editor.handle(DragEvent::end(None, Vec2::new(592.0, 332.0)), &layout);
        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::NoTarget));

        assert_eq!(editor.artifacts(), before.as_slice());
        assert!(editor.session().is_idle());
    }

    #[test]
    fn test_cancel_leaves_artifacts_unchanged() {
        let layout = layout();
        let mut editor = Editor::with_artifacts(vec![a1()]);
        let before = editor.artifacts().to_vec();

        editor.handle(DragEvent::start("a1"), &layout);
        editor.handle(DragEvent::over("a1", artboard_target()), &layout);
        assert_eq!(editor.handle(DragEvent::Cancel, &layout), DropOutcome::Cancelled);

        assert_eq!(editor.artifacts(), before.as_slice());
        assert_eq!(editor.active_id(), None);
    }

    #[test]
    fn test_settle_tick() {
        let layout = layout();
        let mut editor = Editor::new();

        editor.handle(DragEvent::start(RECTANGLE.id), &layout);
        editor.handle(DragEvent::end(artboard_target(), Vec2::new(592.0, 332.0)), &layout);

        // The preview stays mounted for one tick.
        assert_eq!(editor.active_id(), Some(RECTANGLE.id));
        assert_eq!(editor.drop_animation(), DropAnimation::Instant);
        assert!(editor.tick());
        assert_eq!(editor.active_id(), None);
        assert!(!editor.tick());
    }

    #[test]
    fn test_rejected_drop_animates_back() {
        let layout = layout();
        let mut editor = Editor::new();

        editor.handle(DragEvent::start(RECTANGLE.id), &layout);
        editor.handle(DragEvent::end(None, Vec2::ZERO), &layout);
        assert_eq!(editor.active_id(), None);
        assert!(matches!(editor.drop_animation(), DropAnimation::Eased { duration_ms: 500, .. }));
    }

    #[test]
    fn test_unmeasured_origin_is_skipped() {
        let layout = StaticLayout::new().with(ARTBOARD_ID, artboard_rect());
        let mut editor = Editor::new();

        editor.handle(DragEvent::start(HOLE.id), &layout);
        let outcome = editor.handle(DragEvent::end(artboard_target(), Vec2::new(400.0, 200.0)), &layout);
        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::Unmeasured));
        assert!(editor.artifacts().is_empty());
    }

    #[test]
    fn test_unknown_active_is_rejected() {
        let layout = layout();
        let mut editor = Editor::new();

        editor.handle(DragEvent::start("ghost"), &layout);
        let outcome = editor.handle(DragEvent::end(artboard_target(), Vec2::ZERO), &layout);
        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::Unresolved));
    }

    #[test]
    fn test_out_of_phase_events_are_ignored() {
        let layout = layout();
        let mut editor = Editor::new();
        assert_eq!(editor.handle(DragEvent::end(artboard_target(), Vec2::ZERO), &layout), DropOutcome::Ignored);
        assert_eq!(editor.handle(DragEvent::Cancel, &layout), DropOutcome::Ignored);
        assert_eq!(editor.handle(DragEvent::over("x", None), &layout), DropOutcome::Ignored);
    }

    #[test]
    fn test_derived_panel_state() {
        let layout = layout();
        let mut editor = Editor::with_artifacts(vec![a1()]);

        editor.handle(DragEvent::start(HOLE.id), &layout);
        assert!(editor.is_ingredient_dragging());
        assert!((editor.ingredient_opacity(HOLE.id) - ACTIVE_INGREDIENT_OPACITY).abs() < f64::EPSILON);
        assert!((editor.ingredient_opacity(RECTANGLE.id) - 1.0).abs() < f64::EPSILON);
        assert_eq!(editor.ingredient_style(&HOLE).opacity, Some(ACTIVE_INGREDIENT_OPACITY));
        assert_eq!(editor.visible_artifacts().count(), 1);
        editor.handle(DragEvent::Cancel, &layout);

        editor.handle(DragEvent::start("a1"), &layout);
        assert!((editor.ingredient_opacity("a1") - 1.0).abs() < f64::EPSILON);
        assert_eq!(editor.visible_artifacts().count(), 0);
        editor.handle(DragEvent::Cancel, &layout);

        editor.handle(DragEvent::start("a1"), &layout);
        assert!(!editor.is_ingredient_dragging());
        assert_eq!(editor.visible_artifacts().count(), 0);
        assert_eq!(editor.preview_offset(), Some(Vec2::new(200.0, 120.0)));
    }

    #[test]
    fn test_artifact_offset_roundtrip() {
        let mut editor = Editor::with_artifacts(vec![a1()]);
        assert_eq!(editor.artifact_offset(&a1()), None);

        editor.set_artboard(artboard_rect());
        let offset = editor.artifact_offset(&a1()).unwrap();
        assert!((offset.x - 200.0).abs() < 1e-9);
        assert!((offset.y - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_json() {
        let editor = Editor::with_artifacts(vec![a1()]);
        let json = editor.to_json().unwrap();
        let snapshot: EditorSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, editor.snapshot());
        assert_eq!(snapshot.active_id, None);
    }
}
