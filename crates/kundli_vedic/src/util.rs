//! Shared utility functions for vedic calculations.

use crate::error::VedicError;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    kundli_core::normalize_deg(deg)
}

/// Reject non-finite longitudes, then normalize to [0, 360).
pub fn finite_longitude(deg: f64) -> Result<f64, VedicError> {
    if deg.is_finite() {
        Ok(normalize_360(deg))
    } else {
        Err(VedicError::InvalidLongitude(deg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn finite_rejects_nan_and_inf() {
        assert!(finite_longitude(f64::NAN).is_err());
        assert_eq!(
            finite_longitude(f64::NEG_INFINITY),
            Err(VedicError::InvalidLongitude(f64::NEG_INFINITY))
        );
        assert_eq!(finite_longitude(-370.0), Ok(350.0));
    }
}
