//! FFT multiplication and squaring of polynomials.
//!
//! Both operands are padded (as private copies) to the smallest power of two
//! that holds the full product, so the cyclic convolution computed by the
//! transform never wraps around.

use std::ops::Mul;

use num_complex::Complex64;

use polyfft_transform::{pointwise_multiply, Scalar, Transform};

use crate::errors::PolyError;
use crate::padding::{pad_to_closest_power_of_two, padded_len};
use crate::polynomial::Polynomial;

fn to_transform_domain<T: Scalar>(poly: &Polynomial<T>) -> Vec<Complex64> {
    poly.coefficients().iter().map(|&c| c.to_complex()).collect()
}

fn from_transform_domain<T: Scalar>(values: Vec<Complex64>) -> Polynomial<T> {
    values.into_iter().map(T::from_complex).collect()
}

impl<T: Scalar> Polynomial<T> {
    /// Product with `rhs` using the default transform options.
    ///
    /// The result keeps the padded power-of-two length; its first
    /// `self.size() + rhs.size() - 1` coefficients hold the product and the
    /// rest are exactly zero. Use [`Polynomial::trimmed`] for the canonical
    /// form.
    ///
    /// The denoising tolerance is absolute. Round-off grows with the
    /// magnitude of the coefficient products, so once those reach roughly
    /// `1e6` or more the padding tail and true zeros can come back as small
    /// non-zero values. Pass a larger tolerance through
    /// [`Polynomial::multiply_with`] when multiplying such inputs.
    pub fn multiply(&self, rhs: &Self) -> Result<Self, PolyError> {
        self.multiply_with(rhs, &Transform::default())
    }

    /// Product with `rhs` on the given transform engine.
    pub fn multiply_with(&self, rhs: &Self, engine: &Transform) -> Result<Self, PolyError> {
        let (lhs_padded, rhs_padded) = pad_to_closest_power_of_two(self, rhs)?;
        tracing::debug!(
            lhs_len = self.size(),
            rhs_len = rhs.size(),
            padded_len = lhs_padded.size(),
            "fft polynomial multiply"
        );

        let lhs_fft = engine.forward(&to_transform_domain(&lhs_padded))?;
        let rhs_fft = engine.forward(&to_transform_domain(&rhs_padded))?;
        let product_fft = pointwise_multiply(&lhs_fft, &rhs_fft)?;
        let product = engine.inverse(&product_fft)?;

        Ok(from_transform_domain(product))
    }

    /// Square using the default transform options.
    pub fn square(&self) -> Result<Self, PolyError> {
        self.square_with(&Transform::default())
    }

    /// Square with a single forward transform reused for both factors.
    pub fn square_with(&self, engine: &Transform) -> Result<Self, PolyError> {
        let mut padded = self.clone();
        padded.pad_to_size(padded_len(self.size(), self.size()))?;
        tracing::debug!(
            len = self.size(),
            padded_len = padded.size(),
            "fft polynomial square"
        );

        let product = engine.square(&to_transform_domain(&padded))?;
        Ok(from_transform_domain(product))
    }
}

impl<T: Scalar> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    /// # Panics
    ///
    /// Never in practice: padded operands always have a non-empty
    /// power-of-two length. Use [`Polynomial::multiply`] to handle errors.
    fn mul(self, rhs: Self) -> Polynomial<T> {
        self.multiply(rhs)
            .expect("padded operands always have a valid transform length")
    }
}

impl<T: Scalar> Mul for Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: Self) -> Polynomial<T> {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use polyfft_transform::TransformOptions;

    use super::*;

    const EPS: f64 = 1e-9;

    fn poly(vals: &[f64]) -> Polynomial<f64> {
        Polynomial::from_slice(vals)
    }

    fn assert_coeffs(p: &Polynomial<f64>, expected: &[f64]) {
        for (i, &want) in expected.iter().enumerate() {
            let got = p.coefficient(i);
            assert!(
                (got - want).abs() < EPS,
                "coefficient {i}: got {got}, expected {want}"
            );
        }
    }

    #[test]
    fn multiply_reference_product() {
        let a = poly(&[1.0, 2.0, 3.0, 4.0]);
        let b = poly(&[1.0, 2.0, 3.0]);
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.size(), 8);
        assert_coeffs(&c, &[1.0, 4.0, 10.0, 16.0, 17.0, 12.0]);
        assert_eq!(c.power(), Some(5));
    }

    #[test]
    fn padding_tail_is_exactly_zero() {
        let a = poly(&[1.0, 2.0, 3.0, 4.0]);
        let b = poly(&[1.0, 2.0, 3.0]);
        let c = a.multiply(&b).unwrap();
        for (i, &v) in c.coefficients().iter().enumerate().skip(6) {
            assert!(v == 0.0, "coefficient {i} is {v}");
        }
    }

    #[test]
    fn multiply_leaves_operands_untouched() {
        let a = poly(&[1.0, 2.0, 3.0, 4.0]);
        let b = poly(&[1.0, 2.0, 3.0]);
        let _ = &a * &b;
        assert_eq!(a.size(), 4);
        assert_eq!(b.size(), 3);
    }

    #[test]
    fn multiply_by_zero_polynomial() {
        let a = poly(&[1.0, 2.0, 3.0]);
        let z = Polynomial::zero();
        let c = a.multiply(&z).unwrap();
        assert!(c.is_zero());
        assert_eq!(c.power(), None);
    }

    #[test]
    fn multiply_constants() {
        let c = poly(&[3.0]).multiply(&poly(&[-4.0])).unwrap();
        assert_eq!(c.size(), 2);
        assert_coeffs(&c, &[-12.0, 0.0]);
    }

    #[test]
    fn mul_operator_matches_multiply() {
        let a = poly(&[2.0, 0.0, 1.0]);
        let b = poly(&[-1.0, 1.0]);
        let via_op = a.clone() * b.clone();
        let via_fn = a.multiply(&b).unwrap();
        assert_eq!(via_op, via_fn);
        assert_coeffs(&via_op, &[-2.0, 2.0, -1.0, 1.0]);
    }

    #[test]
    fn multiply_complex_coefficients() {
        // (1 + i x)(1 - i x) = 1 + x²
        let a = Polynomial::from_pairs(&[(1.0, 0.0), (0.0, 1.0)]);
        let b = Polynomial::from_pairs(&[(1.0, 0.0), (0.0, -1.0)]);
        let c = a.multiply(&b).unwrap().trimmed();
        assert_eq!(c.size(), 3);
        let expected = [
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        ];
        for (got, want) in c.coefficients().iter().zip(expected) {
            assert!((got - want).norm() < EPS, "got {got}, expected {want}");
        }
    }

    #[test]
    fn multiply_f32_coefficients() {
        let a: Polynomial<f32> = Polynomial::from_slice(&[1.0, 1.0]);
        let c = a.multiply(&a).unwrap().trimmed();
        assert_eq!(c.coefficients().len(), 3);
        for (got, want) in c.coefficients().iter().zip([1.0f32, 2.0, 1.0]) {
            assert!((got - want).abs() < 1e-5);
        }
    }

    #[test]
    fn square_matches_multiply() {
        let a = poly(&[1.0, -3.0, 0.5, 2.0, 7.0]);
        let sq = a.square().unwrap();
        let prod = a.multiply(&a).unwrap();
        assert_eq!(sq.size(), prod.size());
        for (s, p) in sq.coefficients().iter().zip(prod.coefficients()) {
            assert!((s - p).abs() < EPS);
        }
    }

    #[test]
    fn square_binomial() {
        let c = poly(&[1.0, 1.0]).square().unwrap();
        assert_coeffs(&c, &[1.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn huge_tolerance_wipes_result() {
        let engine = Transform::new(TransformOptions::with_tolerance(1e6));
        let c = poly(&[1.0, 2.0]).multiply_with(&poly(&[3.0]), &engine).unwrap();
        assert!(c.is_zero());
    }

    #[test]
    fn nan_coefficient_is_not_reported_as_zero() {
        let c = poly(&[f64::NAN, 1.0]).multiply(&poly(&[1.0])).unwrap();
        assert!(!c.is_zero());
        assert!(c.coefficient(0).is_nan());
        assert!(c.power().is_some());
    }

    #[test]
    fn evaluate_product_equals_product_of_values() {
        let a = poly(&[1.0, 2.0, 3.0, 4.0]);
        let b = poly(&[1.0, 2.0, 3.0]);
        let c = &a * &b;
        let x = 1.5;
        assert!((c.evaluate(x) - a.evaluate(x) * b.evaluate(x)).abs() < 1e-8);
    }
}
