//! Latch glyph placement

use super::style::LatchStyle;
use crate::anchor::ResolvedAnchor;
use crate::config::LayoutMetrics;
use crate::geometry::LatchOrientation;

/// Place the latch so it points from the popup at the anchor
///
/// Across the main axis the latch is centered on the anchor; along it the latch
/// sits between the anchor and the popup.
pub fn latch_style(
    resolved: &ResolvedAnchor,
    orientation: LatchOrientation,
    metrics: &LayoutMetrics,
) -> LatchStyle {
    let anchor = resolved.anchor;
    let latch = metrics.latch_dimension_px;

    let (top_px, left_px) = match orientation {
        LatchOrientation::Horizontal => {
            let left = if resolved.grow_rightward {
                anchor.left_px
            } else {
                anchor.left_px - latch
            };
            (anchor.top_px - latch / 2.0, left)
        }
        LatchOrientation::Vertical => {
            let top = if resolved.grow_downward {
                anchor.top_px
            } else {
                anchor.top_px - latch
            };
            (top, anchor.left_px - latch / 2.0)
        }
    };

    LatchStyle { top_px, left_px }
}
