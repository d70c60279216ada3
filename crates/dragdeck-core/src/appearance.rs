//! Visual description of each artifact kind.
//!
//! Renderers draw artifacts from an [`Appearance`] instead of switching on
//! type strings themselves.

use crate::artifact::ArtifactKind;
use crate::error::Result;
use kurbo::Vec2;
use peniko::Color;

/// Corner radius shared by every kind, in pixels.
pub const CORNER_RADIUS: f64 = 50.0;

/// Fill of an artifact's body.
#[derive(Debug, Clone, Copy)]
pub enum Fill {
    Solid(Color),
    /// Linear gradient along `angle_degrees` (CSS convention: 0 = to top, clockwise).
    LinearGradient {
        angle_degrees: f64,
        start: Color,
        end: Color,
    },
}

/// A drop shadow.
#[derive(Debug, Clone, Copy)]
pub struct Shadow {
    pub offset: Vec2,
    pub blur: f64,
    pub color: Color,
}

/// How an artifact kind is drawn.
#[derive(Debug, Clone, Copy)]
pub struct Appearance {
    pub corner_radius: f64,
    pub fill: Fill,
    /// Light and dark shadows giving the raised look.
    pub shadows: [Shadow; 2],
}

fn raised_shadows() -> [Shadow; 2] {
    [
        Shadow {
            offset: Vec2::new(20.0, 20.0),
            blur: 60.0,
            color: Color::from_rgba8(0xbe, 0xbe, 0xbe, 0xff),
        },
        Shadow {
            offset: Vec2::new(-20.0, -20.0),
            blur: 60.0,
            color: Color::from_rgba8(0xff, 0xff, 0xff, 0xff),
        },
    ]
}

impl Appearance {
    /// Appearance for a kind.
    pub fn of(kind: ArtifactKind) -> Self {
        let fill = match kind {
            ArtifactKind::Rectangle => Fill::Solid(Color::from_rgba8(0xe0, 0xe0, 0xe0, 0xff)),
            ArtifactKind::Hole => Fill::LinearGradient {
                angle_degrees: 145.0,
                start: Color::from_rgba8(0xca, 0xca, 0xca, 0xff),
                end: Color::from_rgba8(0xf0, 0xf0, 0xf0, 0xff),
            },
        };
        Self {
            corner_radius: CORNER_RADIUS,
            fill,
            shadows: raised_shadows(),
        }
    }
}

/// Appearance for a type string.
///
/// Unknown types are a data mismatch and are returned as
/// [`Error::UnknownArtifactType`](crate::Error::UnknownArtifactType) rather
/// than rendering nothing.
pub fn appearance_for_type(type_name: &str) -> Result<Appearance> {
    let kind: ArtifactKind = type_name.parse()?;
    Ok(Appearance::of(kind))
}
