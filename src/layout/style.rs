//! Style values handed to the rendering layer

use std::fmt;

use serde::{Serialize, Serializer};

/// A CSS offset: either a pixel length or `unset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssLength {
    Px(f64),
    Unset,
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssLength::Px(px) => write!(f, "{}px", px),
            CssLength::Unset => f.write_str("unset"),
        }
    }
}

impl Serialize for CssLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Maximum extent of the popup: the container minus the pinned offset and margins
///
/// Renders as `calc(100% - <offset>px - <margin>px)`, with a trailing
/// `- <correction>px` term when a browser correction applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeCap {
    pub pinned_offset_px: f64,
    pub margin_px: f64,
    pub correction_px: f64,
}

impl SizeCap {
    /// Evaluate the cap against a concrete container extent
    pub fn resolve(&self, container_px: f64) -> f64 {
        container_px - self.pinned_offset_px - self.margin_px - self.correction_px
    }
}

impl fmt::Display for SizeCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calc(100% - {}px - {}px",
            self.pinned_offset_px, self.margin_px
        )?;
        if self.correction_px > 0.0 {
            write!(f, " - {}px", self.correction_px)?;
        }
        f.write_str(")")
    }
}

impl Serialize for SizeCap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Position and size caps of the popup body
///
/// Exactly one of `left`/`right` and one of `top`/`bottom` is set: the popup
/// grows from a single pinned corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopupStyle {
    pub left: CssLength,
    pub right: CssLength,
    pub top: CssLength,
    pub bottom: CssLength,
    pub max_width: SizeCap,
    pub max_height: SizeCap,
}

impl PopupStyle {
    /// CSS property/value pairs in a stable order
    pub fn to_style_map(&self) -> Vec<(&'static str, String)> {
        vec![
            ("left", self.left.to_string()),
            ("right", self.right.to_string()),
            ("top", self.top.to_string()),
            ("bottom", self.bottom.to_string()),
            ("max-width", self.max_width.to_string()),
            ("max-height", self.max_height.to_string()),
        ]
    }
}

/// Position of the latch glyph
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatchStyle {
    pub top_px: f64,
    pub left_px: f64,
}

impl LatchStyle {
    pub fn to_style_map(&self) -> Vec<(&'static str, String)> {
        vec![
            ("top", CssLength::Px(self.top_px).to_string()),
            ("left", CssLength::Px(self.left_px).to_string()),
        ]
    }
}
