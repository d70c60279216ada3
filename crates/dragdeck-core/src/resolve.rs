//! Resolving the element being dragged.

use crate::artifact::{Artifact, ArtifactKind, ArtifactStyle};
use crate::geometry::NormalizedPoint;
use crate::ingredient::Ingredient;
use kurbo::{Point, Rect, Size, Vec2};

/// The element being dragged, tagged by where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveArtifact<'a> {
    /// A side-panel template.
    Template(&'a Ingredient),
    /// An artifact already on the artboard.
    Placed(&'a Artifact),
}

impl<'a> ActiveArtifact<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            ActiveArtifact::Template(ingredient) => ingredient.id,
            ActiveArtifact::Placed(artifact) => artifact.id.as_str(),
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            ActiveArtifact::Template(ingredient) => ingredient.kind,
            ActiveArtifact::Placed(artifact) => artifact.kind,
        }
    }

    pub fn style(&self) -> ArtifactStyle {
        match self {
            ActiveArtifact::Template(ingredient) => ingredient.style,
            ActiveArtifact::Placed(artifact) => artifact.style,
        }
    }

    pub fn text(&self) -> Option<&'a str> {
        match self {
            ActiveArtifact::Template(ingredient) => ingredient.text,
            ActiveArtifact::Placed(artifact) => artifact.text.as_deref(),
        }
    }

    /// Stored artboard position. Templates have none.
    pub fn coordinates(&self) -> Option<NormalizedPoint> {
        match self {
            ActiveArtifact::Template(_) => None,
            ActiveArtifact::Placed(artifact) => Some(artifact.coordinates),
        }
    }

    pub fn size(&self) -> Size {
        self.style().size()
    }

    pub fn is_template(&self) -> bool {
        matches!(self, ActiveArtifact::Template(_))
    }

    /// Where to draw the preview of a placed artifact inside the artboard,
    /// given the drag origin in pixel space.
    ///
    /// Templates are previewed where the provider draws them and get `None`.
    pub fn preview_offset(&self, origin: Point, artboard: Rect) -> Option<Vec2> {
        match self {
            ActiveArtifact::Template(_) => None,
            ActiveArtifact::Placed(_) => Some(origin - artboard.origin()),
        }
    }
}

/// Resolve an id against the ingredient catalog first, then placed artifacts.
pub fn resolve<'a>(
    id: &str,
    ingredients: &'a [Ingredient],
    artifacts: &'a [Artifact],
) -> Option<ActiveArtifact<'a>> {
    if let Some(ingredient) = ingredients.iter().find(|i| i.id == id) {
        return Some(ActiveArtifact::Template(ingredient));
    }
    artifacts
        .iter()
        .find(|a| a.id == id)
        .map(ActiveArtifact::Placed)
}
