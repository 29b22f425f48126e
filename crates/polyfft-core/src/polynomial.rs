//! The `Polynomial` type: construction, degree tracking, padding, evaluation
//! and rendering.
//!
//! Coefficients are stored lowest degree first: index `i` holds the
//! coefficient of `x^i`. Storage may carry high-index zeros (padding), so the
//! stored length and the degree are tracked separately.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use polyfft_transform::Scalar;

use crate::errors::PolyError;

/// Polynomial with coefficients of type `T`, lowest degree first.
///
/// The coefficient storage is never empty; the zero polynomial is `[0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "Vec<T>",
    into = "Vec<T>",
    bound(
        serialize = "T: Scalar + Serialize",
        deserialize = "T: Scalar + Deserialize<'de>"
    )
)]
pub struct Polynomial<T: Scalar> {
    coefficients: Vec<T>,
}

impl<T: Scalar> Polynomial<T> {
    /// Take ownership of `coefficients`. An empty vector becomes the zero
    /// polynomial.
    #[must_use]
    pub fn new(mut coefficients: Vec<T>) -> Self {
        if coefficients.is_empty() {
            coefficients.push(T::zero());
        }
        Self { coefficients }
    }

    /// Copy `coefficients` into a new polynomial.
    #[must_use]
    pub fn from_slice(coefficients: &[T]) -> Self {
        Self::new(coefficients.to_vec())
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Vec::new())
    }

    /// `coefficient * x^power`.
    #[must_use]
    pub fn monomial(coefficient: T, power: usize) -> Self {
        let mut coefficients = vec![T::zero(); power + 1];
        coefficients[power] = coefficient;
        Self { coefficients }
    }

    /// Stored coefficients, including any padding.
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Consume the polynomial and return its coefficient storage.
    #[must_use]
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }

    /// Coefficient of `x^index`; zero past the stored length.
    #[must_use]
    pub fn coefficient(&self, index: usize) -> T {
        self.coefficients.get(index).copied().unwrap_or_else(T::zero)
    }

    /// Number of stored coefficients (always at least 1).
    #[must_use]
    pub fn size(&self) -> usize {
        self.coefficients.len()
    }

    /// Degree: the highest index holding a non-zero coefficient, or `None`
    /// for the zero polynomial.
    #[must_use]
    pub fn power(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|c| !c.is_zero())
    }

    /// Whether every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.power().is_none()
    }

    /// Append zeros at the high-index end until the storage holds
    /// `target_len` coefficients. Never truncates.
    pub fn pad_to_size(&mut self, target_len: usize) -> Result<(), PolyError> {
        let current = self.coefficients.len();
        if target_len < current {
            tracing::debug!(
                requested = target_len,
                current,
                "rejecting padding below current size"
            );
            return Err(PolyError::InvalidArgument {
                requested: target_len,
                current,
            });
        }
        self.coefficients.resize(target_len, T::zero());
        Ok(())
    }

    /// Canonical form: storage cut down to `power + 1` coefficients.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let keep = self.power().map_or(1, |p| p + 1);
        Self::new(self.coefficients[..keep].to_vec())
    }

    /// Value at `point`, by Horner accumulation over the coefficients up to
    /// `power`. Padding past the degree is never visited.
    #[must_use]
    pub fn evaluate(&self, point: T) -> T {
        let Some(power) = self.power() else {
            return T::zero();
        };
        self.coefficients[..=power]
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * point + c)
    }
}

impl Polynomial<Complex64> {
    /// Complex polynomial from real coefficients.
    #[must_use]
    pub fn from_real(coefficients: &[f64]) -> Self {
        coefficients
            .iter()
            .map(|&re| Complex64::new(re, 0.0))
            .collect()
    }

    /// Complex polynomial from `(real, imaginary)` pairs.
    #[must_use]
    pub fn from_pairs(coefficients: &[(f64, f64)]) -> Self {
        coefficients
            .iter()
            .map(|&(re, im)| Complex64::new(re, im))
            .collect()
    }
}

impl<T: Scalar> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> From<Vec<T>> for Polynomial<T> {
    fn from(coefficients: Vec<T>) -> Self {
        Self::new(coefficients)
    }
}

impl<T: Scalar> From<&[T]> for Polynomial<T> {
    fn from(coefficients: &[T]) -> Self {
        Self::from_slice(coefficients)
    }
}

impl<T: Scalar> From<Polynomial<T>> for Vec<T> {
    fn from(poly: Polynomial<T>) -> Self {
        poly.coefficients
    }
}

impl<T: Scalar> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Renders `c_n*x^n + ... + c_1*x^1 + c_0`, highest degree first, from the
/// degree down; padding above the degree is omitted.
impl<T: Scalar> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(power) = self.power() else {
            return write!(f, "{}", self.coefficients[0]);
        };
        for i in (0..=power).rev() {
            if i != power {
                f.write_str(" + ")?;
            }
            if i == 0 {
                write!(f, "{}", self.coefficients[i])?;
            } else {
                write!(f, "{}*x^{i}", self.coefficients[i])?;
            }
        }
        Ok(())
    }
}
