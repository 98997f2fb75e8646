//! Layout engine
//!
//! Turns a resolved anchor into the popup's pinned-corner offsets, its size caps
//! and the latch position.

mod latch;
mod offsets;
mod style;

pub use latch::latch_style;
pub use offsets::{exceeding_px, PopupOffsets};
pub use style::{CssLength, LatchStyle, PopupStyle, SizeCap};

use serde::Serialize;

use crate::anchor::ResolvedAnchor;
use crate::config::LayoutMetrics;
use crate::error::{ensure_dimension, Result};
use crate::geometry::{BoxSize, LatchOrientation};

/// Styles for one popup placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutResult {
    pub popup_style: PopupStyle,
    pub latch_style: LatchStyle,
}

impl LayoutResult {
    pub fn popup_style_map(&self) -> Vec<(&'static str, String)> {
        self.popup_style.to_style_map()
    }

    pub fn latch_style_map(&self) -> Vec<(&'static str, String)> {
        self.latch_style.to_style_map()
    }
}

/// Compute popup and latch styles for a resolved anchor
///
/// `popup_size` and `viewport` are the freshly measured sizes of the popup
/// and of the element containing it. `browser_correction_px` is subtracted from
/// the maximum height when the popup grows downward.
pub fn compute_layout(
    resolved: &ResolvedAnchor,
    orientation: LatchOrientation,
    popup_size: BoxSize,
    viewport: BoxSize,
    browser_correction_px: f64,
    metrics: &LayoutMetrics,
) -> Result<LayoutResult> {
    resolved.anchor.validate()?;
    popup_size.validate("popup_width_px", "popup_height_px")?;
    viewport.validate("viewport_width_px", "viewport_height_px")?;
    ensure_dimension("browser_correction_px", browser_correction_px)?;
    metrics.validate()?;

    let offsets = PopupOffsets {
        resolved,
        orientation,
        popup_size,
        viewport,
        metrics,
    };

    let (left, right, horizontal_px) = if resolved.grow_rightward {
        let left = offsets.left_px()?;
        (CssLength::Px(left), CssLength::Unset, left)
    } else {
        let right = offsets.right_px()?;
        (CssLength::Unset, CssLength::Px(right), right)
    };

    let (top, bottom, vertical_px) = if resolved.grow_downward {
        let top = offsets.top_px()?;
        (CssLength::Px(top), CssLength::Unset, top)
    } else {
        let bottom = offsets.bottom_px()?;
        (CssLength::Unset, CssLength::Px(bottom), bottom)
    };

    let max_width = SizeCap {
        pinned_offset_px: horizontal_px,
        margin_px: metrics.viewport_margin_px,
        correction_px: 0.0,
    };
    let max_height = SizeCap {
        pinned_offset_px: vertical_px,
        margin_px: metrics.viewport_margin_px,
        correction_px: if resolved.grow_downward {
            browser_correction_px
        } else {
            0.0
        },
    };

    let result = LayoutResult {
        popup_style: PopupStyle {
            left,
            right,
            top,
            bottom,
            max_width,
            max_height,
        },
        latch_style: latch_style(resolved, orientation, metrics),
    };

    log::debug!(
        "Computed layout left={} right={} top={} bottom={} latch=({}, {})",
        left,
        right,
        top,
        bottom,
        result.latch_style.top_px,
        result.latch_style.left_px
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::resolve_anchor;
    use crate::click::ClickDescription;
    use crate::config::CoordinatesCorrection;
    use crate::error::PlacementError;
    use crate::geometry::{ClickedBox, PixelCoordinates};

    const VIEWPORT: BoxSize = BoxSize::new(800.0, 600.0);
    const POPUP: BoxSize = BoxSize::new(200.0, 100.0);

    fn layout(resolved: &ResolvedAnchor, orientation: LatchOrientation) -> LayoutResult {
        compute_layout(
            resolved,
            orientation,
            POPUP,
            VIEWPORT,
            0.0,
            &LayoutMetrics::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_end_to_end_box_click() {
        let click = ClickDescription::Element {
            clicked_position: PixelCoordinates::new(20.0, 20.0),
            clicked_box: Some(ClickedBox::new(PixelCoordinates::new(10.0, 10.0), 100.0, 40.0)),
        };
        let resolved = resolve_anchor(
            &click,
            LatchOrientation::Horizontal,
            &CoordinatesCorrection::none(),
            VIEWPORT,
        )
        .unwrap();

        assert!(resolved.grow_downward);
        assert!(resolved.grow_rightward);
        assert_eq!(resolved.anchor, PixelCoordinates::new(110.0, 30.0));

        let result = layout(&resolved, LatchOrientation::Horizontal);
        let style = result.popup_style;

        assert_eq!(style.left, CssLength::Px(120.0));
        assert_eq!(style.right, CssLength::Unset);
        assert_eq!(style.top, CssLength::Px(0.0));
        assert_eq!(style.bottom, CssLength::Unset);
        assert_eq!(style.max_width.to_string(), "calc(100% - 120px - 2px)");
        assert_eq!(style.max_height.to_string(), "calc(100% - 0px - 2px)");
        assert_eq!(
            result.latch_style,
            LatchStyle {
                top_px: 25.0,
                left_px: 110.0
            }
        );
    }

    #[test]
    fn test_offsets_are_mutually_exclusive() {
        let metrics = LayoutMetrics::default();
        for orientation in [LatchOrientation::Horizontal, LatchOrientation::Vertical] {
            for (down, right) in [(true, true), (true, false), (false, true), (false, false)] {
                let resolved = ResolvedAnchor {
                    anchor: PixelCoordinates::new(400.0, 300.0),
                    grow_downward: down,
                    grow_rightward: right,
                };
                let style = compute_layout(&resolved, orientation, POPUP, VIEWPORT, 40.0, &metrics)
                    .unwrap()
                    .popup_style;

                let is_set = |length: CssLength| length != CssLength::Unset;
                assert_ne!(is_set(style.left), is_set(style.right));
                assert_ne!(is_set(style.top), is_set(style.bottom));
                assert_eq!(is_set(style.left), right);
                assert_eq!(is_set(style.top), down);
            }
        }
    }

    #[test]
    fn test_browser_correction_only_when_growing_downward() {
        let metrics = LayoutMetrics::default();
        let downward = ResolvedAnchor {
            anchor: PixelCoordinates::new(100.0, 100.0),
            grow_downward: true,
            grow_rightward: true,
        };
        let result = compute_layout(
            &downward,
            LatchOrientation::Vertical,
            POPUP,
            VIEWPORT,
            75.0,
            &metrics,
        )
        .unwrap();
        assert_eq!(
            result.popup_style.max_height.to_string(),
            "calc(100% - 110px - 2px - 75px)"
        );
        assert_eq!(result.popup_style.max_height.resolve(600.0), 413.0);

        let upward = ResolvedAnchor {
            grow_downward: false,
            ..downward
        };
        let result = compute_layout(
            &upward,
            LatchOrientation::Vertical,
            POPUP,
            VIEWPORT,
            75.0,
            &metrics,
        )
        .unwrap();
        // 600 - 100 + 10
        assert_eq!(
            result.popup_style.max_height.to_string(),
            "calc(100% - 510px - 2px)"
        );
    }

    #[test]
    fn test_style_maps() {
        let resolved = ResolvedAnchor {
            anchor: PixelCoordinates::new(700.0, 500.0),
            grow_downward: false,
            grow_rightward: false,
        };
        let result = layout(&resolved, LatchOrientation::Horizontal);

        assert_eq!(
            result.popup_style_map(),
            vec![
                ("left", "unset".to_string()),
                ("right", "110px".to_string()),
                ("top", "unset".to_string()),
                ("bottom", "70px".to_string()),
                ("max-width", "calc(100% - 110px - 2px)".to_string()),
                ("max-height", "calc(100% - 70px - 2px)".to_string()),
            ]
        );
        assert_eq!(
            result.latch_style_map(),
            vec![("top", "495px".to_string()), ("left", "690px".to_string())]
        );
    }

    #[test]
    fn test_invalid_measurements_fail_fast() {
        let resolved = ResolvedAnchor {
            anchor: PixelCoordinates::new(100.0, 100.0),
            grow_downward: true,
            grow_rightward: true,
        };
        let err = compute_layout(
            &resolved,
            LatchOrientation::Horizontal,
            BoxSize::new(200.0, f64::NAN),
            VIEWPORT,
            0.0,
            &LayoutMetrics::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PlacementError::InvalidGeometry {
                what: "popup_height_px",
                ..
            }
        ));

        let err = compute_layout(
            &resolved,
            LatchOrientation::Horizontal,
            POPUP,
            VIEWPORT,
            -40.0,
            &LayoutMetrics::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PlacementError::InvalidGeometry {
                what: "browser_correction_px",
                ..
            }
        ));
    }
}
