//! Placement of latch-anchored popups
//!
//! Given a click (a point or a clicked element's box), a latch orientation and
//! the measured sizes of the popup and its viewport, computes the CSS offsets
//! that keep the popup on screen while its latch touches the click.

pub mod anchor;
pub mod click;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod popup;

pub use anchor::{resolve_anchor, ResolvedAnchor};
pub use click::{BoundingRect, ClickDescription};
pub use config::{BadBrowser, CoordinatesCorrection, LayoutMetrics, Settings};
pub use error::{PlacementError, Result};
pub use geometry::{BoxSize, ClickedBox, LatchOrientation, PixelCoordinates};
pub use layout::{compute_layout, LayoutResult};
pub use popup::{place, Placement, PopupInput, PositionedPopup};

use std::io::Write;

/// Initialize env_logger with a timestamped format; `RUST_LOG` overrides the `info` default
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
            writeln!(buf, "[{}] {} - {}", timestamp, record.level(), record.args())
        })
        .init();
}
