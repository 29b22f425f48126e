//! Round-off suppression for inverse-transform output.
//!
//! Each component is kept only if its magnitude exceeds the tolerance, so a
//! value ends up with both parts, only its real part, only its imaginary
//! part, or exactly zero. NaN and infinite components are never snapped.

use num_complex::Complex64;

/// Zero every component of `value` whose magnitude is within `tolerance`.
#[inline]
#[must_use]
pub fn denoise(value: Complex64, tolerance: f64) -> Complex64 {
    Complex64::new(
        snap_component(value.re, tolerance),
        snap_component(value.im, tolerance),
    )
}

/// Apply [`denoise`] to every element in-place.
pub fn denoise_in_place(data: &mut [Complex64], tolerance: f64) {
    for value in data.iter_mut() {
        *value = denoise(*value, tolerance);
    }
}

#[inline]
fn snap_component(x: f64, tolerance: f64) -> f64 {
    // NaN fails every comparison and must pass through untouched.
    if x.abs() <= tolerance {
        0.0
    } else {
        x
    }
}
