//! Error type for polynomial operations.

use polyfft_transform::TransformError;

/// Error returned by polynomial operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolyError {
    /// Padding was asked to shrink the coefficient storage.
    #[error("cannot pad to size {requested}: polynomial already has {current} coefficients")]
    InvalidArgument { requested: usize, current: usize },

    /// The transform engine rejected its input.
    #[error(transparent)]
    Transform(#[from] TransformError),
}
