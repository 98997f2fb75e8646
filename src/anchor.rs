//! Anchor resolution
//!
//! Determines the exact point the latch has to touch and the quadrant the
//! popup grows into. Growth always points away from the nearer viewport edge,
//! measured from the clicked box's center; only the touched side depends on the
//! latch orientation.

use serde::Serialize;

use crate::click::ClickDescription;
use crate::config::CoordinatesCorrection;
use crate::error::Result;
use crate::geometry::{BoxSize, BoxTouchPoints, LatchOrientation, PixelCoordinates};

/// Result of resolving a click against the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedAnchor {
    /// The point the latch must touch
    pub anchor: PixelCoordinates,
    /// The popup grows from the anchor towards the bottom
    pub grow_downward: bool,
    /// The popup grows from the anchor towards the right
    pub grow_rightward: bool,
}

/// Resolve the anchor point and growth direction for a click
pub fn resolve_anchor(
    click: &ClickDescription,
    orientation: LatchOrientation,
    correction: &CoordinatesCorrection,
    viewport: BoxSize,
) -> Result<ResolvedAnchor> {
    click.validate()?;
    viewport.validate("viewport_width_px", "viewport_height_px")?;

    let points = touch_points(click, orientation, correction);

    let grow_downward = points.center_left.top_px < viewport.height_px / 2.0;
    let grow_rightward = points.top_center.left_px < viewport.width_px / 2.0;

    let anchor = match orientation {
        LatchOrientation::Horizontal if grow_rightward => points.center_right,
        LatchOrientation::Horizontal => points.center_left,
        LatchOrientation::Vertical if grow_downward => points.bottom_center,
        LatchOrientation::Vertical => points.top_center,
    };

    log::debug!(
        "Resolved anchor ({}, {}) grow_downward={} grow_rightward={} orientation={:?}",
        anchor.left_px,
        anchor.top_px,
        grow_downward,
        grow_rightward,
        orientation
    );

    Ok(ResolvedAnchor {
        anchor,
        grow_downward,
        grow_rightward,
    })
}

/// Side centers of whatever was clicked, corrected for the orientation
fn touch_points(
    click: &ClickDescription,
    orientation: LatchOrientation,
    correction: &CoordinatesCorrection,
) -> BoxTouchPoints {
    let delta = correction.for_orientation(orientation);

    match click {
        ClickDescription::Element {
            clicked_box: Some(clicked_box),
            ..
        } => clicked_box.touch_points(delta),
        ClickDescription::Point(point)
        | ClickDescription::Element {
            clicked_position: point,
            clicked_box: None,
        } => {
            let point = if correction.apply_to_point_clicks {
                point.offset(delta)
            } else {
                *point
            };
            BoxTouchPoints::collapsed(point)
        }
    }
}
