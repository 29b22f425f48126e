//! Core FFT transform: recursive radix-2 decimation in time over `Complex<f64>`.

use std::f64::consts::PI;

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::constants::MAX_TRANSFORM_LEN;
use crate::denoise::denoise_in_place;
use crate::errors::TransformError;

/// Check that `n` is a length the recursive transform can split down to 1.
pub fn validate_len(n: usize) -> Result<(), TransformError> {
    if n == 0 {
        return Err(TransformError::InvalidInput(
            "cannot transform an empty sequence".into(),
        ));
    }
    if !n.is_power_of_two() {
        return Err(TransformError::InvalidInput(format!(
            "sequence length {n} is not a power of two"
        )));
    }
    if n > MAX_TRANSFORM_LEN {
        return Err(TransformError::InvalidInput(format!(
            "sequence length {n} exceeds the maximum of {MAX_TRANSFORM_LEN}"
        )));
    }
    Ok(())
}

/// Primitive N-th root of unity `exp(-2πi / n)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn principal_root(n: usize) -> Complex64 {
    Complex64::from_polar(1.0, -2.0 * PI / n as f64)
}

/// Forward transform of a power-of-two length sequence.
pub fn fft_forward(seq: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    validate_len(seq.len())?;
    Ok(transform(seq, principal_root(seq.len())))
}

/// Inverse transform followed by denoising with `tolerance`.
///
/// Conjugates the input, runs the forward transform, conjugates the output
/// and divides by N.
#[allow(clippy::cast_precision_loss)]
pub fn fft_inverse(seq: &[Complex64], tolerance: f64) -> Result<Vec<Complex64>, TransformError> {
    validate_len(seq.len())?;
    let n = seq.len();

    let conjugated: Vec<Complex64> = seq.iter().map(Complex64::conj).collect();
    let mut out = transform(&conjugated, principal_root(n));

    let scale = 1.0 / n as f64;
    for value in &mut out {
        *value = value.conj() * scale;
    }

    denoise_in_place(&mut out, tolerance);
    Ok(out)
}

/// Recursive Cooley-Tukey step. `root` is a primitive root of unity of order
/// `seq.len()`; the halves are transformed with `root²`.
fn transform(seq: &[Complex64], root: Complex64) -> Vec<Complex64> {
    let n = seq.len();
    if n == 1 {
        return seq.to_vec();
    }

    let half = n / 2;
    let evens: Vec<Complex64> = seq.iter().step_by(2).copied().collect();
    let odds: Vec<Complex64> = seq.iter().skip(1).step_by(2).copied().collect();

    let root_sq = root * root;
    let evens = transform(&evens, root_sq);
    let odds = transform(&odds, root_sq);

    let mut out = vec![Complex64::zero(); n];
    let mut twiddle = Complex64::one();
    for k in 0..half {
        // t = root^k * odds[k]
        let t = twiddle * odds[k];
        out[k] = evens[k] + t;
        out[k + half] = evens[k] - t;
        twiddle *= root;
    }
    out
}
