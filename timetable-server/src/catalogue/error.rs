//! Catalogue error types.

use std::path::PathBuf;

use super::Term;

/// Errors that can occur when loading or querying the course catalogue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// Failed to read a data file
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The course dataset is not valid JSON of the expected shape
    #[error("invalid course dataset: {message}")]
    Json { message: String },

    /// A building table row could not be parsed
    #[error("invalid building table line {line}: {message}")]
    Building { line: usize, message: String },

    /// The course has no lecture sections in the requested term
    #[error("{course} is not a valid course code or is not offered in the {term} term")]
    CourseNotOffered { course: String, term: Term },

    /// Unrecognised term letter
    #[error("invalid term {0:?}: expected F or S")]
    InvalidTerm(String),
}
