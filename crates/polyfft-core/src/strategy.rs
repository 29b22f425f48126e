//! Multiplication strategy trait and implementations.
//!
//! `FftMultiplier` is the O(N log N) path; `SchoolbookMultiplier` is the
//! O(n·m) direct convolution used as a reference for cross-validation.

use polyfft_transform::{Scalar, Transform, TransformOptions};

use crate::errors::PolyError;
use crate::polynomial::Polynomial;

/// Narrow interface for polynomial multiplication.
pub trait Multiplier<T: Scalar>: Send + Sync {
    /// Multiply two polynomials.
    fn multiply(&self, a: &Polynomial<T>, b: &Polynomial<T>) -> Result<Polynomial<T>, PolyError>;

    /// Square a polynomial (may be optimized over multiply).
    fn square(&self, a: &Polynomial<T>) -> Result<Polynomial<T>, PolyError> {
        self.multiply(a, a)
    }

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// FFT convolution strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FftMultiplier {
    engine: Transform,
}

impl FftMultiplier {
    #[must_use]
    pub fn new(options: TransformOptions) -> Self {
        Self {
            engine: Transform::new(options),
        }
    }

    /// The transform engine used by this strategy.
    #[must_use]
    pub fn engine(&self) -> &Transform {
        &self.engine
    }
}

impl<T: Scalar> Multiplier<T> for FftMultiplier {
    fn multiply(&self, a: &Polynomial<T>, b: &Polynomial<T>) -> Result<Polynomial<T>, PolyError> {
        a.multiply_with(b, &self.engine)
    }

    fn square(&self, a: &Polynomial<T>) -> Result<Polynomial<T>, PolyError> {
        a.square_with(&self.engine)
    }

    fn name(&self) -> &'static str {
        "FFT"
    }
}

/// Direct convolution. The result has exactly `a.size() + b.size() - 1`
/// coefficients.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchoolbookMultiplier;

impl SchoolbookMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Scalar> Multiplier<T> for SchoolbookMultiplier {
    fn multiply(&self, a: &Polynomial<T>, b: &Polynomial<T>) -> Result<Polynomial<T>, PolyError> {
        let (ac, bc) = (a.coefficients(), b.coefficients());
        let mut out = vec![T::zero(); ac.len() + bc.len() - 1];
        for (i, &x) in ac.iter().enumerate() {
            for (j, &y) in bc.iter().enumerate() {
                out[i + j] = out[i + j] + x * y;
            }
        }
        Ok(Polynomial::new(out))
    }

    fn name(&self) -> &'static str {
        "Schoolbook"
    }
}
