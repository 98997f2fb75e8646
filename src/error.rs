//! Error types for popup placement

use thiserror::Error;

/// Errors raised while resolving an anchor or computing a layout
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// A coordinate was not finite, or a dimension was negative or not finite
    #[error("invalid geometry: {what} = {value}")]
    InvalidGeometry { what: &'static str, value: f64 },

    /// An offset formula was used outside the growth direction it belongs to
    #[error("contract violation: {0}")]
    ContractViolation(&'static str),
}

pub type Result<T> = std::result::Result<T, PlacementError>;

/// Reject NaN and infinities
pub(crate) fn ensure_finite(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlacementError::InvalidGeometry { what, value })
    }
}

/// Reject anything that is not a finite, non-negative length
pub(crate) fn ensure_dimension(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PlacementError::InvalidGeometry { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_rejects_negative() {
        let err = ensure_dimension("box_width_px", -1.0).unwrap_err();
        assert_eq!(
            err,
            PlacementError::InvalidGeometry {
                what: "box_width_px",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_dimension_accepts_zero() {
        assert_eq!(ensure_dimension("box_height_px", 0.0), Ok(0.0));
    }

    #[test]
    fn test_finite_rejects_nan_and_infinity() {
        assert!(ensure_finite("left_px", f64::NAN).is_err());
        assert!(ensure_finite("top_px", f64::INFINITY).is_err());
        assert_eq!(ensure_finite("top_px", -12.5), Ok(-12.5));
    }

    #[test]
    fn test_error_messages() {
        let err = PlacementError::ContractViolation("left offset requires rightward growth");
        assert_eq!(
            err.to_string(),
            "contract violation: left offset requires rightward growth"
        );
    }
}
