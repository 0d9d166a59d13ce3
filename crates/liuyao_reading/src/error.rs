//! Error types for reading inputs.

use thiserror::Error;

/// Errors from parsing reading options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ReadingError {
    /// Topic keyword not recognized.
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
}
