//! Placed artifacts and their closed set of kinds.

use crate::error::{Error, Result};
use crate::geometry::NormalizedPoint;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix for generated artifact identifiers.
const ARTIFACT_ID_PREFIX: &str = "artifact-";

/// Identifier of a placed artifact or ingredient.
///
/// Ingredients and artifacts share the id space because the drag provider
/// only hands back a string for the active element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh, unique artifact identifier.
    pub fn generate() -> Self {
        Self(format!("{ARTIFACT_ID_PREFIX}{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtifactId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ArtifactId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for ArtifactId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ArtifactId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The shape kinds an artifact can take.
///
/// Adding a kind here forces every exhaustive match (appearance, wire names)
/// to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    #[serde(rename = "newmor-ractangle")]
    Rectangle,
    #[serde(rename = "newmor-hole")]
    Hole,
}

impl ArtifactKind {
    /// All kinds, in side-panel order.
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Rectangle, ArtifactKind::Hole];

    /// The type string used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Rectangle => "newmor-ractangle",
            ArtifactKind::Hole => "newmor-hole",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ArtifactKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownArtifactType(s.to_string()))
    }
}

/// Style overrides carried by templates and placed artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArtifactStyle {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Opacity override (None = fully opaque).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl ArtifactStyle {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            opacity: None,
        }
    }

    /// The item's bounding box size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Copy of this style with the given opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// A shape placed on the artboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: ArtifactId,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    pub style: ArtifactStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Position of the top-left corner relative to the artboard.
    pub coordinates: NormalizedPoint,
}

impl Artifact {
    /// Create an artifact with a freshly generated id.
    pub fn new(
        kind: ArtifactKind,
        style: ArtifactStyle,
        text: Option<String>,
        coordinates: NormalizedPoint,
    ) -> Self {
        Self::with_id(ArtifactId::generate(), kind, style, text, coordinates)
    }

    /// Create an artifact with a specific id.
    pub fn with_id(
        id: ArtifactId,
        kind: ArtifactKind,
        style: ArtifactStyle,
        text: Option<String>,
        coordinates: NormalizedPoint,
    ) -> Self {
        Self {
            id,
            kind,
            style,
            text,
            coordinates,
        }
    }

    pub fn size(&self) -> Size {
        self.style.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("newmor-ractangle".parse::<ArtifactKind>(), Ok(ArtifactKind::Rectangle));
        assert_eq!("newmor-hole".parse::<ArtifactKind>(), Ok(ArtifactKind::Hole));
    }

    #[test]
    fn test_kind_parse_unknown() {
        let err = "newmor-triangle".parse::<ArtifactKind>().unwrap_err();
        assert_eq!(err, Error::UnknownArtifactType("newmor-triangle".to_string()));
    }

    #[test]
    fn test_kind_serde_matches_as_str() {
        for kind in ArtifactKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ArtifactId::generate();
        let b = ArtifactId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with(ARTIFACT_ID_PREFIX));
    }

    #[test]
    fn test_artifact_json_shape() {
        let artifact = Artifact::with_id(
            "a1".into(),
            ArtifactKind::Hole,
            ArtifactStyle::new(100.0, 100.0),
            None,
            NormalizedPoint::new(0.2, 0.2),
        );
        let value = serde_json::to_value(&artifact).unwrap();
        assert_eq!(value["id"], "a1");
        assert_eq!(value["type"], "newmor-hole");
        assert!(value.get("text").is_none());

        let unknown = r#"{"id":"a2","type":"circle","style":{"width":1,"height":1},"coordinates":{"x":0,"y":0}}"#;
        assert!(serde_json::from_str::<Artifact>(unknown).is_err());
    }
}
