//! Tolerance-aware zero detection.
//!
//! Repeated subtraction in the reduction loop leaves floating-point dust in
//! entries that are mathematically zero. Every "is this entry zero?" decision
//! in the crate (support graph edges, matching feasibility, loop termination)
//! goes through [`is_zero`] with one caller-supplied epsilon.

/// Default zero tolerance used by [`crate::BirkhoffDecomposer::default`].
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Returns `true` iff `|x| ≤ eps`.
#[inline]
pub fn is_zero(x: f64, eps: f64) -> bool {
    x.abs() <= eps
}

/// Returns `true` if `eps` is usable as a zero tolerance (finite and non-negative).
pub(crate) fn is_valid_tolerance(eps: f64) -> bool {
    eps.is_finite() && eps >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_inclusive() {
        assert!(is_zero(1e-7, 1e-7));
        assert!(is_zero(-1e-7, 1e-7));
        assert!(!is_zero(1.1e-7, 1e-7));
    }

    #[test]
    fn test_exact_zero_with_zero_tolerance() {
        assert!(is_zero(0.0, 0.0));
        assert!(!is_zero(f64::MIN_POSITIVE, 0.0));
    }

    #[test]
    fn test_subtraction_drift_absorbed() {
        // 0.1 + 0.2 - 0.3 is ~5.5e-17, not 0.0
        let drift = 0.1 + 0.2 - 0.3;
        assert!(drift != 0.0);
        assert!(is_zero(drift, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_tolerance_validation() {
        assert!(is_valid_tolerance(0.0));
        assert!(is_valid_tolerance(DEFAULT_TOLERANCE));
        assert!(!is_valid_tolerance(-1e-9));
        assert!(!is_valid_tolerance(f64::NAN));
        assert!(!is_valid_tolerance(f64::INFINITY));
    }
}
