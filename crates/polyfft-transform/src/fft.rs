//! Public transform API.
//!
//! [`Transform`] carries only immutable options; every call derives its own
//! root of unity from the input length and keeps no state between calls.

use num_complex::Complex64;

use crate::errors::TransformError;
use crate::fft_core::{fft_forward, fft_inverse};
use crate::options::TransformOptions;
use crate::pointwise::{pointwise_multiply, pointwise_square};

/// FFT/IFFT engine configured with a denoising tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    options: TransformOptions,
}

impl Transform {
    /// Create an engine with the given options (normalized).
    #[must_use]
    pub fn new(options: TransformOptions) -> Self {
        Self {
            options: options.normalize(),
        }
    }

    /// Options this engine was built with.
    #[must_use]
    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Forward transform of a power-of-two length sequence.
    pub fn forward(&self, seq: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
        tracing::trace!(len = seq.len(), "forward transform");
        fft_forward(seq)
    }

    /// Inverse transform, with components within the tolerance snapped to zero.
    pub fn inverse(&self, seq: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
        tracing::trace!(
            len = seq.len(),
            tolerance = self.options.tolerance,
            "inverse transform"
        );
        fft_inverse(seq, self.options.tolerance)
    }

    /// Cyclic convolution of two equal-length sequences via the convolution
    /// theorem. Callers pad to avoid wraparound.
    pub fn convolve(
        &self,
        a: &[Complex64],
        b: &[Complex64],
    ) -> Result<Vec<Complex64>, TransformError> {
        let fa = self.forward(a)?;
        let fb = self.forward(b)?;
        let product = pointwise_multiply(&fa, &fb)?;
        self.inverse(&product)
    }

    /// Cyclic self-convolution with a single forward transform.
    pub fn square(&self, a: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
        let mut fa = self.forward(a)?;
        pointwise_square(&mut fa);
        self.inverse(&fa)
    }
}

/// Forward transform with default options.
pub fn forward(seq: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    Transform::default().forward(seq)
}

/// Inverse transform with the default tolerance.
pub fn inverse(seq: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    Transform::default().inverse(seq)
}
