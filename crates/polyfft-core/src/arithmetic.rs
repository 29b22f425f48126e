//! Ragged addition, subtraction and negation.
//!
//! Operands need not have the same length: the overlapping prefix is combined
//! elementwise and the longer operand's tail passes through (negated for the
//! right-hand side of a subtraction). Neither operand is mutated.

use std::ops::{Add, Neg, Sub};

use polyfft_transform::Scalar;

use crate::polynomial::Polynomial;

/// Combine `lhs` and `rhs` elementwise with `op`. A left-only tail is copied;
/// a right-only tail goes through `missing_lhs`.
fn ragged<T: Scalar>(
    lhs: &[T],
    rhs: &[T],
    op: impl Fn(T, T) -> T,
    missing_lhs: impl Fn(T) -> T,
) -> Vec<T> {
    let common = lhs.len().min(rhs.len());
    let mut out = Vec::with_capacity(lhs.len().max(rhs.len()));
    out.extend(lhs[..common].iter().zip(&rhs[..common]).map(|(&a, &b)| op(a, b)));
    out.extend_from_slice(&lhs[common..]);
    out.extend(rhs[common..].iter().map(|&b| missing_lhs(b)));
    out
}

impl<T: Scalar> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Self) -> Polynomial<T> {
        Polynomial::new(ragged(
            self.coefficients(),
            rhs.coefficients(),
            |a, b| a + b,
            |b| b,
        ))
    }
}

impl<T: Scalar> Add for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Self) -> Polynomial<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Self) -> Polynomial<T> {
        Polynomial::new(ragged(
            self.coefficients(),
            rhs.coefficients(),
            |a, b| a - b,
            |b| -b,
        ))
    }
}

impl<T: Scalar> Sub for Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Self) -> Polynomial<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        self.coefficients().iter().map(|&c| -c).collect()
    }
}

impl<T: Scalar> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -&self
    }
}
