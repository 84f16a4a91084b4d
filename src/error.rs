//! Error types for the pleading engine.

use thiserror::Error;

/// Result type alias for pleading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Malformed content model input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// A table was built without any rows.
    #[error("Table must have at least one row")]
    EmptyTable,

    /// A table row has no cells.
    #[error("Table row {row} has no cells")]
    EmptyRow {
        /// Zero-based row index
        row: usize,
    },

    /// A table row does not match the width of the first row.
    #[error("Table row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index
        row: usize,
        /// Cell count of the first row
        expected: usize,
        /// Cell count of the offending row
        found: usize,
    },
}

/// Missing or invalid input for the selected composer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// A required case metadata field is empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A defense ordinal label is not in the ordinal table.
    #[error("Unknown defense ordinal: {0:?}")]
    InvalidOrdinal(String),

    /// No content was supplied for a document that needs some.
    #[error("No content supplied for {0}")]
    EmptyContent(&'static str),
}

/// Error types that can occur while composing or writing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// Content model construction failed.
    #[error("Construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// Composition failed.
    #[error("Composition error: {0}")]
    Composition(#[from] CompositionError),

    /// Error while handing the document to a writer.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Check if this error came from missing or invalid case data.
    pub fn is_composition(&self) -> bool {
        matches!(self, Error::Composition(_))
    }
}
