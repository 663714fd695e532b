use thiserror::Error;

/// Raised when an input cannot be classified as a sequence source.
///
/// Only construction can fail; a sequence that was built successfully never
/// reports this error during traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSourceError {
    /// The input is not repeatable, indexed, or a cursor factory.
    #[error("{0} is not a sequence source")]
    Unrecognized(&'static str),

    /// An indexed input declared a length that is not a non-negative integer.
    #[error("indexed source length must be a non-negative integer, got {0}")]
    InvalidLength(String),
}
