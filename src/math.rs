//! Math function wrappers for std/no_std compatibility
//!
//! Uses standard library math when available, falls back to libm for no_std.

#[cfg(feature = "std")]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Keep only results a caller can use: finite and, for variances, not
/// pushed below zero by cancellation.
#[inline]
pub(crate) fn sanitize_variance(x: f64) -> Option<f64> {
    if x.is_finite() && x >= 0.0 {
        Some(x)
    } else {
        None
    }
}

#[inline]
pub(crate) fn sanitize(x: f64) -> Option<f64> {
    if x.is_finite() {
        Some(x)
    } else {
        None
    }
}
