//! Error types for the core library.

use thiserror::Error;

/// Core errors.
///
/// Invalid drops and unmeasured elements are not errors; they are reported
/// through [`DropOutcome`](crate::editor::DropOutcome).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A type string outside the closed set of artifact kinds.
    #[error("No matching artifact found for type: {0}")]
    UnknownArtifactType(String),
    /// An id that is not part of the ingredient catalog.
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
