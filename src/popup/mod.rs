//! Positioned popup state
//!
//! Keeps the latest inputs of a single popup and re-runs anchor resolution and
//! layout whenever one of them changes. Measuring the popup and the viewport is
//! the host's job; the fresh sizes arrive as inputs after each render pass.

mod events;

pub use events::{on_click, on_key, ClickTarget, Key, PopupEvent};

use serde::Serialize;

use crate::anchor::{resolve_anchor, ResolvedAnchor};
use crate::click::ClickDescription;
use crate::config::{BadBrowser, Settings};
use crate::error::Result;
use crate::geometry::{BoxSize, LatchOrientation};
use crate::layout::{compute_layout, LayoutResult};

/// A resolved anchor together with the layout derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    #[serde(flatten)]
    pub resolved: ResolvedAnchor,
    #[serde(flatten)]
    pub layout: LayoutResult,
}

/// Run anchor resolution and layout in sequence
pub fn place(
    settings: &Settings,
    click: &ClickDescription,
    orientation: LatchOrientation,
    bad_browser: BadBrowser,
    popup_size: BoxSize,
    viewport: BoxSize,
) -> Result<Placement> {
    let resolved = resolve_anchor(click, orientation, &settings.coordinates_correction, viewport)?;
    let layout = compute_layout(
        &resolved,
        orientation,
        popup_size,
        viewport,
        bad_browser.correction_px(&settings.browser_corrections),
        &settings.metrics,
    )?;

    Ok(Placement { resolved, layout })
}

/// One changed input of a popup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PopupInput {
    Click(ClickDescription),
    /// `None` falls back to the configured orientation
    Orientation(Option<LatchOrientation>),
    Visible(bool),
    BadBrowser(BadBrowser),
    PopupSize(BoxSize),
    ViewportSize(BoxSize),
}

/// The latest value of every input
#[derive(Debug, Clone, Copy, PartialEq)]
struct PopupInputs {
    click: Option<ClickDescription>,
    orientation: Option<LatchOrientation>,
    visible: bool,
    bad_browser: BadBrowser,
    popup_size: BoxSize,
    viewport: BoxSize,
}

impl PopupInputs {
    /// Store one input; returns whether it differed from the current value
    fn replace(&mut self, input: PopupInput) -> bool {
        match input {
            PopupInput::Click(click) => replace(&mut self.click, Some(click)),
            PopupInput::Orientation(orientation) => replace(&mut self.orientation, orientation),
            PopupInput::Visible(visible) => replace(&mut self.visible, visible),
            PopupInput::BadBrowser(bad_browser) => replace(&mut self.bad_browser, bad_browser),
            PopupInput::PopupSize(size) => replace(&mut self.popup_size, size),
            PopupInput::ViewportSize(size) => replace(&mut self.viewport, size),
        }
    }
}

/// A popup whose latch points at the last click
#[derive(Debug, Clone)]
pub struct PositionedPopup {
    settings: Settings,
    inputs: PopupInputs,
    placement: Option<Placement>,
}

impl PositionedPopup {
    pub fn new(settings: Settings) -> Self {
        let inputs = PopupInputs {
            click: None,
            orientation: None,
            visible: false,
            bad_browser: settings.bad_browser,
            popup_size: BoxSize::default(),
            viewport: BoxSize::default(),
        };
        Self {
            settings,
            inputs,
            placement: None,
        }
    }

    /// Replace one input, recomputing if it changed
    ///
    /// Returns whether a recomputation happened. The input and the new
    /// placement are committed together; on error neither is, so the same
    /// input fails again when it is re-sent.
    pub fn apply(&mut self, input: PopupInput) -> Result<bool> {
        let mut candidate = self.inputs;
        if !candidate.replace(input) {
            return Ok(false);
        }

        let placement = self.compute(&candidate)?;
        self.inputs = candidate;
        if placement.is_some() {
            self.placement = placement;
        }
        Ok(true)
    }

    fn compute(&self, inputs: &PopupInputs) -> Result<Option<Placement>> {
        let Some(click) = inputs.click else {
            log::debug!("No click yet, nothing to position");
            return Ok(None);
        };

        let orientation = inputs
            .orientation
            .unwrap_or(self.settings.latch_orientation);
        let placement = place(
            &self.settings,
            &click,
            orientation,
            inputs.bad_browser,
            inputs.popup_size,
            inputs.viewport,
        )?;
        Ok(Some(placement))
    }

    /// Effective latch orientation
    pub fn orientation(&self) -> LatchOrientation {
        self.inputs
            .orientation
            .unwrap_or(self.settings.latch_orientation)
    }

    pub fn is_visible(&self) -> bool {
        self.inputs.visible
    }

    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// The latest computed styles
    pub fn layout(&self) -> Option<&LayoutResult> {
        self.placement.as_ref().map(|p| &p.layout)
    }

    pub fn grow_downward(&self) -> Option<bool> {
        self.placement.map(|p| p.resolved.grow_downward)
    }

    pub fn grow_rightward(&self) -> Option<bool> {
        self.placement.map(|p| p.resolved.grow_rightward)
    }

    pub fn handle_key(&self, key: Key) -> Option<PopupEvent> {
        let event = on_key(key);
        if event.is_some() {
            log::debug!("Closing popup on {:?}", key);
        }
        event
    }

    pub fn handle_click(&self, target: ClickTarget) -> PopupEvent {
        on_click(target)
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
