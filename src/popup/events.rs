//! User interactions that close or keep the popup

/// Keys the popup reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Where a click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the popup body or on the latch
    Popup,
    /// On the full-screen backdrop behind the popup
    Backdrop,
}

/// Intent emitted towards the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
    /// The popup asks to be closed
    Closed,
    /// The click was consumed by the popup and must not reach the backdrop
    PropagationStopped,
}

/// Map a key release to an intent
pub fn on_key(key: Key) -> Option<PopupEvent> {
    match key {
        Key::Escape => Some(PopupEvent::Closed),
        Key::Other => None,
    }
}

/// Map a click to an intent
pub fn on_click(target: ClickTarget) -> PopupEvent {
    match target {
        ClickTarget::Popup => PopupEvent::PropagationStopped,
        ClickTarget::Backdrop => PopupEvent::Closed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes() {
        assert_eq!(on_key(Key::Escape), Some(PopupEvent::Closed));
        assert_eq!(on_key(Key::Other), None);
    }

    #[test]
    fn test_clicks() {
        assert_eq!(on_click(ClickTarget::Backdrop), PopupEvent::Closed);
        assert_eq!(on_click(ClickTarget::Popup), PopupEvent::PropagationStopped);
    }
}
