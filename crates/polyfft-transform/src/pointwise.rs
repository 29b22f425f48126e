//! Pointwise products in the transform domain.

use num_complex::Complex64;

use crate::errors::TransformError;

/// Pointwise multiplication of two transformed sequences.
pub fn pointwise_multiply(
    a: &[Complex64],
    b: &[Complex64],
) -> Result<Vec<Complex64>, TransformError> {
    if a.len() != b.len() {
        return Err(TransformError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).collect())
}

/// Square every element in-place (transform reuse for squaring).
pub fn pointwise_square(data: &mut [Complex64]) {
    for value in data.iter_mut() {
        *value = *value * *value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointwise_multiply_simple() {
        let a = vec![Complex64::new(3.0, 0.0), Complex64::new(0.0, 1.0)];
        let b = vec![Complex64::new(7.0, 0.0), Complex64::new(0.0, 1.0)];
        let c = pointwise_multiply(&a, &b).unwrap();
        assert_eq!(c, vec![Complex64::new(21.0, 0.0), Complex64::new(-1.0, 0.0)]);
    }

    #[test]
    fn pointwise_multiply_length_mismatch() {
        let a = vec![Complex64::new(1.0, 0.0); 4];
        let b = vec![Complex64::new(1.0, 0.0); 2];
        assert_eq!(
            pointwise_multiply(&a, &b),
            Err(TransformError::LengthMismatch { left: 4, right: 2 })
        );
    }

    #[test]
    fn pointwise_square_in_place() {
        let mut data = vec![Complex64::new(2.0, 0.0), Complex64::new(1.0, 1.0)];
        pointwise_square(&mut data);
        assert_eq!(data, vec![Complex64::new(4.0, 0.0), Complex64::new(0.0, 2.0)]);
    }
}
