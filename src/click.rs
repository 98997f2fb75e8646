//! Click descriptions handed to the anchor resolver
//!
//! A popup is either anchored on the exact point that was clicked, or on the
//! bounds of the element that was clicked (e.g. a button). In the latter case
//! the popup touches the element independent of where on it the click landed.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{ClickedBox, PixelCoordinates};

/// What the user clicked
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClickDescription {
    /// A bare point, e.g. a click on a canvas
    Point(PixelCoordinates),
    /// A click on an element; the box wins over the position when present
    Element {
        clicked_position: PixelCoordinates,
        #[serde(default)]
        clicked_box: Option<ClickedBox>,
    },
}

/// Bounding rectangle as reported by the host UI layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<BoundingRect> for ClickedBox {
    fn from(rect: BoundingRect) -> Self {
        ClickedBox::new(
            PixelCoordinates::new(rect.left, rect.top),
            rect.width,
            rect.height,
        )
    }
}

impl ClickDescription {
    /// Point click from pointer client coordinates
    pub fn from_pointer(client_x: f64, client_y: f64) -> Self {
        ClickDescription::Point(PixelCoordinates::new(client_x, client_y))
    }

    /// Element click; the popup is positioned relative to `element`, not to `clicked`
    pub fn from_element(clicked: PixelCoordinates, element: BoundingRect) -> Self {
        ClickDescription::Element {
            clicked_position: clicked,
            clicked_box: Some(element.into()),
        }
    }

    /// Element activated without a pointer (keyboard); uses the element's corner as position
    pub fn from_element_bounds(element: BoundingRect) -> Self {
        Self::from_element(PixelCoordinates::new(element.left, element.top), element)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            ClickDescription::Point(point) => point.validate(),
            ClickDescription::Element {
                clicked_position,
                clicked_box,
            } => {
                clicked_position.validate()?;
                if let Some(clicked_box) = clicked_box {
                    clicked_box.validate()?;
                }
                Ok(())
            }
        }
    }
}

impl From<PixelCoordinates> for ClickDescription {
    fn from(point: PixelCoordinates) -> Self {
        ClickDescription::Point(point)
    }
}
