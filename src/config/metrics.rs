//! Fixed layout dimensions

use serde::{Deserialize, Serialize};

use crate::error::{ensure_dimension, Result};

/// Pixel constants of the popup chrome
///
/// `latch_dimension_px` must match the size of the latch glyph in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Thickness of the latch glyph
    pub latch_dimension_px: f64,
    /// How far the popup reaches past the anchor along the off-axis
    pub popup_exceeding_px: f64,
    /// Gap kept between the popup and the viewport edge
    pub viewport_margin_px: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            latch_dimension_px: 10.0,
            popup_exceeding_px: 30.0,
            viewport_margin_px: 2.0,
        }
    }
}

impl LayoutMetrics {
    pub(crate) fn validate(&self) -> Result<()> {
        ensure_dimension("latch_dimension_px", self.latch_dimension_px)?;
        ensure_dimension("popup_exceeding_px", self.popup_exceeding_px)?;
        ensure_dimension("viewport_margin_px", self.viewport_margin_px)?;
        Ok(())
    }

    /// Reset any invalid metric to its default
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        if ensure_dimension("latch_dimension_px", self.latch_dimension_px).is_err() {
            log::warn!("Resetting invalid latch_dimension_px {}", self.latch_dimension_px);
            self.latch_dimension_px = defaults.latch_dimension_px;
        }
        if ensure_dimension("popup_exceeding_px", self.popup_exceeding_px).is_err() {
            log::warn!("Resetting invalid popup_exceeding_px {}", self.popup_exceeding_px);
            self.popup_exceeding_px = defaults.popup_exceeding_px;
        }
        if ensure_dimension("viewport_margin_px", self.viewport_margin_px).is_err() {
            log::warn!("Resetting invalid viewport_margin_px {}", self.viewport_margin_px);
            self.viewport_margin_px = defaults.viewport_margin_px;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_valid_values() {
        let mut metrics = LayoutMetrics {
            latch_dimension_px: 12.0,
            popup_exceeding_px: f64::INFINITY,
            viewport_margin_px: -3.0,
        };
        metrics.sanitize();

        assert_eq!(metrics.latch_dimension_px, 12.0);
        assert_eq!(metrics.popup_exceeding_px, 30.0);
        assert_eq!(metrics.viewport_margin_px, 2.0);
        assert!(metrics.validate().is_ok());
    }
}
