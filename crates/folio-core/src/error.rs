//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Two catalog entries share the same id
    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(u32),

    /// A catalog entry has an empty category (the filter set depends on it)
    #[error("Project {0} has an empty category")]
    EmptyCategory(u32),

    /// Error reading or writing the preference store / catalog file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
