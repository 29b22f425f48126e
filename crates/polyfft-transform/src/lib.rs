//! # polyfft-transform
//!
//! Recursive radix-2 Cooley-Tukey FFT over `Complex<f64>` and its inverse,
//! with the denoising step that lets a floating-point transform act as an
//! exact-looking convolution kernel for polynomial multiplication.

pub mod constants;
pub mod denoise;
pub mod errors;
pub mod fft;
pub mod fft_core;
pub mod options;
pub mod pointwise;
pub mod scalar;

// Re-exports
pub use constants::DEFAULT_TOLERANCE;
pub use errors::TransformError;
pub use fft::{forward, inverse, Transform};
pub use options::TransformOptions;
pub use pointwise::{pointwise_multiply, pointwise_square};
pub use scalar::Scalar;

pub use num_complex::{Complex, Complex32, Complex64};
