//! Static latch-position corrections
//!
//! Depending on the page setup there is a constant offset between the point the
//! latch should visually touch and the bounds reported by the host. The
//! correction table compensates for it, per latch orientation.

use serde::{Deserialize, Serialize};

use crate::geometry::{LatchOrientation, PixelCoordinates};

/// Per-orientation correction added to a clicked box's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatesCorrection {
    pub horizontal: PixelCoordinates,
    pub vertical: PixelCoordinates,
    /// Also shift bare point clicks, not only clicked boxes
    pub apply_to_point_clicks: bool,
}

impl Default for CoordinatesCorrection {
    fn default() -> Self {
        Self {
            horizontal: PixelCoordinates::new(0.0, -3.5),
            vertical: PixelCoordinates::new(-5.3, 0.0),
            apply_to_point_clicks: true,
        }
    }
}

impl CoordinatesCorrection {
    /// A table that leaves every coordinate untouched
    pub fn none() -> Self {
        Self {
            horizontal: PixelCoordinates::default(),
            vertical: PixelCoordinates::default(),
            apply_to_point_clicks: true,
        }
    }

    /// The delta to apply for the given latch orientation
    pub fn for_orientation(&self, orientation: LatchOrientation) -> PixelCoordinates {
        match orientation {
            LatchOrientation::Horizontal => self.horizontal,
            LatchOrientation::Vertical => self.vertical,
        }
    }

    /// Replace non-finite deltas with the defaults
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        if !is_finite(&self.horizontal) {
            log::warn!(
                "Resetting non-finite horizontal correction {:?}",
                self.horizontal
            );
            self.horizontal = defaults.horizontal;
        }
        if !is_finite(&self.vertical) {
            log::warn!("Resetting non-finite vertical correction {:?}", self.vertical);
            self.vertical = defaults.vertical;
        }
    }
}

fn is_finite(delta: &PixelCoordinates) -> bool {
    delta.left_px.is_finite() && delta.top_px.is_finite()
}
