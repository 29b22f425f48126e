//! # polyfft-core
//!
//! Generic polynomials over real and complex scalars, with ragged addition,
//! Horner evaluation and O(N log N) multiplication through the recursive FFT
//! in `polyfft-transform`.

pub mod arithmetic;
pub mod errors;
pub mod multiply;
pub mod padding;
pub mod polynomial;
pub mod strategy;

// Re-exports
pub use errors::PolyError;
pub use padding::{pad_to_closest_power_of_two, padded_len};
pub use polynomial::Polynomial;
pub use strategy::{FftMultiplier, Multiplier, SchoolbookMultiplier};

pub use polyfft_transform::{Complex64, Scalar, Transform, TransformError, TransformOptions};

/// Multiply two real coefficient sequences (lowest degree first) and return
/// the `a.len() + b.len() - 1` product coefficients.
///
/// Empty inputs are treated as the zero polynomial.
///
/// # Example
/// ```
/// let c = polyfft_core::convolve(&[1.0, 1.0], &[1.0, -1.0]).unwrap();
/// assert_eq!(c.len(), 3);
/// assert!((c[0] - 1.0).abs() < 1e-9 && c[1].abs() < 1e-9 && (c[2] + 1.0).abs() < 1e-9);
/// ```
pub fn convolve(a: &[f64], b: &[f64]) -> Result<Vec<f64>, PolyError> {
    let lhs = Polynomial::from_slice(a);
    let rhs = Polynomial::from_slice(b);
    let product_len = lhs.size() + rhs.size() - 1;

    let mut coefficients = lhs.multiply(&rhs)?.into_coefficients();
    coefficients.truncate(product_len);
    Ok(coefficients)
}
