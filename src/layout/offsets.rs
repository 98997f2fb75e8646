//! Pinned-edge offsets of the popup body
//!
//! Naming:
//!  - main-axis: the axis named by the latch orientation
//!  - off-axis: the other axis
//!
//! On the main axis the popup sits flush against the latch. On the off-axis it
//! reaches past the anchor by an "exceeding" distance, so the latch ends up
//! inboard of the popup's corner.

use crate::anchor::ResolvedAnchor;
use crate::config::LayoutMetrics;
use crate::error::{PlacementError, Result};
use crate::geometry::{BoxSize, LatchOrientation};

/// Everything needed to compute the four pinned-edge offsets
#[derive(Debug, Clone, Copy)]
pub struct PopupOffsets<'a> {
    pub resolved: &'a ResolvedAnchor,
    pub orientation: LatchOrientation,
    pub popup_size: BoxSize,
    pub viewport: BoxSize,
    pub metrics: &'a LayoutMetrics,
}

impl PopupOffsets<'_> {
    /// CSS `left`; only valid while growing rightward
    pub fn left_px(&self) -> Result<f64> {
        if !self.resolved.grow_rightward {
            return Err(PlacementError::ContractViolation(
                "position-left is only used when the popup grows rightward",
            ));
        }

        let anchor_left = self.resolved.anchor.left_px;
        if self.orientation.is_horizontal() {
            return Ok(anchor_left + self.metrics.latch_dimension_px);
        }

        Ok(anchor_left - self.exceeding_px(anchor_left))
    }

    /// CSS `right`; only valid while growing leftward
    pub fn right_px(&self) -> Result<f64> {
        if self.resolved.grow_rightward {
            return Err(PlacementError::ContractViolation(
                "position-right is only used when the popup grows leftward",
            ));
        }

        let anchor_right = self.viewport.width_px - self.resolved.anchor.left_px;
        if self.orientation.is_horizontal() {
            return Ok(anchor_right + self.metrics.latch_dimension_px);
        }

        Ok(anchor_right - self.exceeding_px(anchor_right))
    }

    /// CSS `top`; only valid while growing downward
    pub fn top_px(&self) -> Result<f64> {
        if !self.resolved.grow_downward {
            return Err(PlacementError::ContractViolation(
                "position-top is only used when the popup grows downward",
            ));
        }

        let anchor_top = self.resolved.anchor.top_px;
        if self.orientation.is_horizontal() {
            return Ok(anchor_top - self.exceeding_px(anchor_top));
        }

        Ok(anchor_top + self.metrics.latch_dimension_px)
    }

    /// CSS `bottom`; only valid while growing upward
    pub fn bottom_px(&self) -> Result<f64> {
        if self.resolved.grow_downward {
            return Err(PlacementError::ContractViolation(
                "position-bottom is only used when the popup grows upward",
            ));
        }

        let anchor_bottom = self.viewport.height_px - self.resolved.anchor.top_px;
        if self.orientation.is_horizontal() {
            return Ok(anchor_bottom - self.exceeding_px(anchor_bottom));
        }

        Ok(anchor_bottom + self.metrics.latch_dimension_px)
    }

    fn exceeding_px(&self, available_space: f64) -> f64 {
        let popup_extent = self.popup_size.along(self.orientation.off_axis());
        exceeding_px(available_space, popup_extent, self.metrics)
    }
}

/// Distance the popup reaches past the anchor along the off-axis
///
/// A popup too small for the fixed distance gets its latch centered instead.
/// The result never pushes the pinned edge out of the viewport, except that
/// half a latch of room is always kept.
pub fn exceeding_px(available_space: f64, popup_extent: f64, metrics: &LayoutMetrics) -> f64 {
    let latch = metrics.latch_dimension_px;
    let mut exceeding = metrics.popup_exceeding_px;

    if popup_extent <= 2.0 * exceeding + latch {
        exceeding = (popup_extent - latch) / 2.0;
    }

    exceeding = exceeding.min(available_space);
    exceeding.max(latch / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PixelCoordinates;

    const VIEWPORT: BoxSize = BoxSize::new(800.0, 600.0);
    const POPUP: BoxSize = BoxSize::new(200.0, 100.0);

    fn resolved(left_px: f64, top_px: f64, down: bool, right: bool) -> ResolvedAnchor {
        ResolvedAnchor {
            anchor: PixelCoordinates::new(left_px, top_px),
            grow_downward: down,
            grow_rightward: right,
        }
    }

    #[test]
    fn test_exceeding_uses_base_distance() {
        assert_eq!(exceeding_px(300.0, 100.0, &LayoutMetrics::default()), 30.0);
    }

    #[test]
    fn test_exceeding_keeps_room_for_latch() {
        assert_eq!(exceeding_px(4.0, 100.0, &LayoutMetrics::default()), 5.0);
    }

    #[test]
    fn test_exceeding_stays_inside_viewport() {
        assert_eq!(exceeding_px(12.0, 100.0, &LayoutMetrics::default()), 12.0);
    }

    #[test]
    fn test_exceeding_centers_latch_on_small_popup() {
        let metrics = LayoutMetrics::default();
        assert_eq!(exceeding_px(300.0, 16.0, &metrics), 5.0);
        assert_eq!(exceeding_px(300.0, 50.0, &metrics), 20.0);
        assert_eq!(exceeding_px(300.0, 70.0, &metrics), 30.0);
    }

    #[test]
    fn test_horizontal_grow_down_right() {
        let metrics = LayoutMetrics::default();
        let anchor = resolved(110.0, 30.0, true, true);
        let offsets = PopupOffsets {
            resolved: &anchor,
            orientation: LatchOrientation::Horizontal,
            popup_size: POPUP,
            viewport: VIEWPORT,
            metrics: &metrics,
        };

        assert_eq!(offsets.left_px(), Ok(120.0));
        assert_eq!(offsets.top_px(), Ok(0.0));
    }

    #[test]
    fn test_horizontal_grow_up_left() {
        let metrics = LayoutMetrics::default();
        let anchor = resolved(600.0, 500.0, false, false);
        let offsets = PopupOffsets {
            resolved: &anchor,
            orientation: LatchOrientation::Horizontal,
            popup_size: POPUP,
            viewport: VIEWPORT,
            metrics: &metrics,
        };

        // 800 - 600 + 10
        assert_eq!(offsets.right_px(), Ok(210.0));
        // 600 - 500 - 30
        assert_eq!(offsets.bottom_px(), Ok(70.0));
    }

    #[test]
    fn test_vertical_uses_popup_width_for_exceeding() {
        let metrics = LayoutMetrics::default();
        let anchor = resolved(100.0, 50.0, true, true);
        let narrow = BoxSize::new(40.0, 500.0);
        let offsets = PopupOffsets {
            resolved: &anchor,
            orientation: LatchOrientation::Vertical,
            popup_size: narrow,
            viewport: VIEWPORT,
            metrics: &metrics,
        };

        // (40 - 10) / 2 = 15
        assert_eq!(offsets.left_px(), Ok(85.0));
        assert_eq!(offsets.top_px(), Ok(60.0));
    }

    #[test]
    fn test_vertical_near_right_edge_clamps_to_viewport() {
        let metrics = LayoutMetrics::default();
        let anchor = resolved(788.0, 550.0, false, false);
        let offsets = PopupOffsets {
            resolved: &anchor,
            orientation: LatchOrientation::Vertical,
            popup_size: POPUP,
            viewport: VIEWPORT,
            metrics: &metrics,
        };

        // available 12 on the right: pinned flush with the viewport edge
        assert_eq!(offsets.right_px(), Ok(0.0));
        assert_eq!(offsets.bottom_px(), Ok(60.0));
    }

    #[test]
    fn test_wrong_branch_is_a_contract_violation() {
        let metrics = LayoutMetrics::default();
        let anchor = resolved(110.0, 30.0, true, true);
        let offsets = PopupOffsets {
            resolved: &anchor,
            orientation: LatchOrientation::Horizontal,
            popup_size: POPUP,
            viewport: VIEWPORT,
            metrics: &metrics,
        };

        assert!(matches!(
            offsets.right_px(),
            Err(PlacementError::ContractViolation(_))
        ));
        assert!(matches!(
            offsets.bottom_px(),
            Err(PlacementError::ContractViolation(_))
        ));

        let upward = resolved(110.0, 500.0, false, false);
        let offsets = PopupOffsets {
            resolved: &upward,
            ..offsets
        };
        assert!(offsets.left_px().is_err());
        assert!(offsets.top_px().is_err());
    }
}
