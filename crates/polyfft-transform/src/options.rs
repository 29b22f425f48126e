//! Transform engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TOLERANCE;

/// Options for the inverse transform's denoising step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Components whose magnitude does not exceed this value are zeroed
    /// after the inverse transform.
    ///
    /// The bound is absolute, not relative to the data. Round-off in the
    /// inverse transform scales with the magnitude of the convolved values,
    /// so large inputs need a proportionally larger tolerance for padding
    /// noise to be suppressed.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl TransformOptions {
    /// Create options with an explicit tolerance.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Normalize options, replacing a negative or non-finite tolerance with
    /// the default.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            self.tolerance = DEFAULT_TOLERANCE;
        }
        self
    }
}
