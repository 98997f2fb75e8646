//! Geometry primitives shared by the anchor resolver and the layout engine

use serde::{Deserialize, Serialize};

use crate::error::{ensure_dimension, ensure_finite, Result};

/// An absolute, viewport-relative point in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelCoordinates {
    pub left_px: f64,
    pub top_px: f64,
}

impl PixelCoordinates {
    pub const fn new(left_px: f64, top_px: f64) -> Self {
        Self { left_px, top_px }
    }

    /// Shift the point by a delta
    pub fn offset(self, delta: PixelCoordinates) -> Self {
        Self {
            left_px: self.left_px + delta.left_px,
            top_px: self.top_px + delta.top_px,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure_finite("left_px", self.left_px)?;
        ensure_finite("top_px", self.top_px)?;
        Ok(())
    }
}

/// Bounding rectangle of a clicked element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickedBox {
    pub top_left_corner: PixelCoordinates,
    pub box_width_px: f64,
    pub box_height_px: f64,
}

impl ClickedBox {
    pub fn new(top_left_corner: PixelCoordinates, box_width_px: f64, box_height_px: f64) -> Self {
        Self {
            top_left_corner,
            box_width_px,
            box_height_px,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.top_left_corner.validate()?;
        ensure_dimension("box_width_px", self.box_width_px)?;
        ensure_dimension("box_height_px", self.box_height_px)?;
        Ok(())
    }

    /// The centers of the four sides, after moving the box by `correction`
    pub fn touch_points(&self, correction: PixelCoordinates) -> BoxTouchPoints {
        let corner = self.top_left_corner.offset(correction);
        let half_width = self.box_width_px / 2.0;
        let half_height = self.box_height_px / 2.0;

        BoxTouchPoints {
            top_center: PixelCoordinates::new(corner.left_px + half_width, corner.top_px),
            bottom_center: PixelCoordinates::new(
                corner.left_px + half_width,
                corner.top_px + self.box_height_px,
            ),
            center_left: PixelCoordinates::new(corner.left_px, corner.top_px + half_height),
            center_right: PixelCoordinates::new(
                corner.left_px + self.box_width_px,
                corner.top_px + half_height,
            ),
        }
    }
}

/// Measured width and height of the viewport or of the popup itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxSize {
    pub width_px: f64,
    pub height_px: f64,
}

impl BoxSize {
    pub const fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Extent along the given axis
    pub fn along(&self, axis: LatchOrientation) -> f64 {
        match axis {
            LatchOrientation::Horizontal => self.width_px,
            LatchOrientation::Vertical => self.height_px,
        }
    }

    pub(crate) fn validate(&self, what_width: &'static str, what_height: &'static str) -> Result<()> {
        ensure_dimension(what_width, self.width_px)?;
        ensure_dimension(what_height, self.height_px)?;
        Ok(())
    }
}

/// The centers of the four sides of a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxTouchPoints {
    pub top_center: PixelCoordinates,
    pub bottom_center: PixelCoordinates,
    pub center_left: PixelCoordinates,
    pub center_right: PixelCoordinates,
}

impl BoxTouchPoints {
    /// A point click: every side center is the point itself
    pub fn collapsed(point: PixelCoordinates) -> Self {
        Self {
            top_center: point,
            bottom_center: point,
            center_left: point,
            center_right: point,
        }
    }
}

/// Where the latch sits relative to the popup
///
/// `Horizontal` puts it to the left or right of the popup, `Vertical` above or below.
/// The orientation also names the main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatchOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl LatchOrientation {
    pub fn is_horizontal(self) -> bool {
        self == LatchOrientation::Horizontal
    }

    /// The perpendicular axis
    pub fn off_axis(self) -> Self {
        match self {
            LatchOrientation::Horizontal => LatchOrientation::Vertical,
            LatchOrientation::Vertical => LatchOrientation::Horizontal,
        }
    }

    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "horizontal" | "h" => Some(LatchOrientation::Horizontal),
            "vertical" | "v" => Some(LatchOrientation::Vertical),
            _ => None,
        }
    }
}
