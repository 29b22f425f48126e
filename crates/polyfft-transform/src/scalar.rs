//! Numeric scalar abstraction shared by the transform and polynomial layers.
//!
//! The transform domain is always `Complex<f64>`; a scalar only has to say
//! how it enters and leaves that domain.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_complex::{Complex, Complex32, Complex64};
use num_traits::{One, Zero};

/// Coefficient type usable in polynomials and FFT convolution.
///
/// Equality with zero comes from [`Zero::is_zero`].
pub trait Scalar:
    Copy
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Complex conjugate (identity for real scalars).
    #[must_use]
    fn conj(self) -> Self;

    /// Lift into the transform domain.
    fn to_complex(self) -> Complex64;

    /// Project back from the transform domain. Real scalars keep only the
    /// real part.
    fn from_complex(value: Complex64) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn conj(self) -> Self {
        self
    }

    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex::new(self, 0.0)
    }

    #[inline]
    fn from_complex(value: Complex64) -> Self {
        value.re
    }
}

impl Scalar for f32 {
    #[inline]
    fn conj(self) -> Self {
        self
    }

    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex::new(f64::from(self), 0.0)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from_complex(value: Complex64) -> Self {
        value.re as f32
    }
}

impl Scalar for Complex64 {
    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline]
    fn to_complex(self) -> Complex64 {
        self
    }

    #[inline]
    fn from_complex(value: Complex64) -> Self {
        value
    }
}

impl Scalar for Complex32 {
    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex::new(f64::from(self.re), f64::from(self.im))
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from_complex(value: Complex64) -> Self {
        Complex::new(value.re as f32, value.im as f32)
    }
}
