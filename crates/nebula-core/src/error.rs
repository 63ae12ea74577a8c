//! Error types for the core reducers.

use thiserror::Error;

/// Errors raised while indexing tree data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The same key appears more than once in the forest.
    #[error("duplicate tree key: {0}")]
    DuplicateKey(String),
}
