//! Constants for the transform engine.

/// Default magnitude below which an inverse-transform component is treated as
/// round-off noise and replaced by an exact zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Upper bound on transform lengths accepted by the engine (2^30 points).
///
/// Each recursion level allocates fresh halves, so lengths above this are
/// rejected instead of exhausting memory.
pub const MAX_TRANSFORM_LEN: usize = 1 << 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_len_is_power_of_two() {
        assert!(MAX_TRANSFORM_LEN.is_power_of_two());
    }

    #[test]
    fn default_tolerance_is_positive() {
        assert!(DEFAULT_TOLERANCE > 0.0);
        assert!(DEFAULT_TOLERANCE < 1e-6);
    }
}
