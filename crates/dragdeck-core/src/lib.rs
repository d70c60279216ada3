//! DragDeck Core Library
//!
//! Platform-agnostic drag-and-drop logic for the DragDeck pages: coordinate
//! normalization, drop placement checks, the editor's drag session reducer
//! and the sortable list reducer.

pub mod appearance;
pub mod artifact;
pub mod editor;
pub mod error;
pub mod event;
pub mod geometry;
pub mod ingredient;
pub mod layout;
pub mod resolve;
pub mod session;
pub mod snap;
pub mod sortable;

pub use appearance::{Appearance, Fill, Shadow, appearance_for_type};
pub use artifact::{Artifact, ArtifactId, ArtifactKind, ArtifactStyle};
pub use editor::{DropAnimation, DropOutcome, Editor, EditorSnapshot, RejectReason};
pub use error::{Error, Result};
pub use event::{DragEvent, DropTarget};
pub use geometry::{NormalizedPoint, Placement, can_place, check_placement, denormalize, normalize};
pub use ingredient::{INGREDIENTS, Ingredient};
pub use layout::{ARTBOARD_ID, Layout, StaticLayout};
pub use resolve::{ActiveArtifact, resolve};
pub use session::{DragPhase, DragSession};
pub use snap::{GRID_SIZE, SnapModifier, is_valid_grid, snap_delta};
pub use sortable::SortableList;
