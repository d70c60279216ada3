//! The fixed catalog of shape templates shown in the side panel.

use crate::artifact::{ArtifactKind, ArtifactStyle};
use crate::error::{Error, Result};
use kurbo::Size;

/// An immutable template that can be dragged onto the artboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: &'static str,
    pub kind: ArtifactKind,
    pub style: ArtifactStyle,
    pub text: Option<&'static str>,
}

impl Ingredient {
    pub fn size(&self) -> Size {
        self.style.size()
    }
}

/// Rectangle template.
pub const RECTANGLE: Ingredient = Ingredient {
    id: "newmor-ractangle-ingredinent-id",
    kind: ArtifactKind::Rectangle,
    style: ArtifactStyle::new(200.0, 100.0),
    text: None,
};

/// Hole template.
pub const HOLE: Ingredient = Ingredient {
    id: "newmor-hole-ingredinent-id",
    kind: ArtifactKind::Hole,
    style: ArtifactStyle::new(100.0, 100.0),
    text: None,
};

/// All ingredients, in side-panel order.
pub static INGREDIENTS: [Ingredient; 2] = [RECTANGLE, HOLE];

/// Look up an ingredient by id.
pub fn find(id: &str) -> Option<&'static Ingredient> {
    INGREDIENTS.iter().find(|ingredient| ingredient.id == id)
}

/// Look up an ingredient by id, failing for ids outside the catalog.
pub fn get(id: &str) -> Result<&'static Ingredient> {
    find(id).ok_or_else(|| Error::UnknownIngredient(id.to_string()))
}

/// Check whether an id belongs to the catalog.
pub fn is_ingredient(id: &str) -> bool {
    find(id).is_some()
}
