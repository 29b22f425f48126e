//! Padding operands to a common power-of-two length for FFT convolution.

use polyfft_transform::Scalar;

use crate::errors::PolyError;
use crate::polynomial::Polynomial;

/// Smallest power of two that holds the full linear convolution of operands
/// with `lhs_len` and `rhs_len` coefficients: `2^ceil(log2(lhs_len + rhs_len))`.
#[must_use]
pub fn padded_len(lhs_len: usize, rhs_len: usize) -> usize {
    (lhs_len + rhs_len).next_power_of_two()
}

/// Padded copies of both operands at [`padded_len`]. The originals are left
/// untouched.
pub fn pad_to_closest_power_of_two<T: Scalar>(
    lhs: &Polynomial<T>,
    rhs: &Polynomial<T>,
) -> Result<(Polynomial<T>, Polynomial<T>), PolyError> {
    let target = padded_len(lhs.size(), rhs.size());

    let mut lhs_copy = lhs.clone();
    let mut rhs_copy = rhs.clone();
    lhs_copy.pad_to_size(target)?;
    rhs_copy.pad_to_size(target)?;

    Ok((lhs_copy, rhs_copy))
}
