//! Error type for the transform engine.

/// Error returned by transform and pointwise operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// The input sequence cannot be transformed (empty, not a power of two,
    /// or longer than the engine accepts).
    #[error("invalid transform input: {0}")]
    InvalidInput(String),

    /// Two sequences combined pointwise have different lengths.
    #[error("length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
}
