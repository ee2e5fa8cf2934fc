//! Events dispatched to text field controllers.

use crate::constants::{bottom_line, input, strings};
use std::fmt;
use std::rc::Rc;

/// Kind of DOM event a controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Input gained focus.
    Focus,
    /// Input lost focus.
    Blur,
    /// Mouse button pressed.
    MouseDown,
    /// Touch started.
    TouchStart,
    /// Click (press and release).
    Click,
    /// Key pressed.
    KeyDown,
    /// CSS transition finished.
    TransitionEnd,
    /// Bottom line finished fading out.
    BottomLineAnimationEnd,
    /// Text field icon was activated.
    IconAction,
    /// Any other event name.
    Other(String),
}

impl EventType {
    /// DOM event name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Focus => input::FOCUS_EVENT,
            Self::Blur => input::BLUR_EVENT,
            Self::MouseDown => input::PRESSED_EVENT,
            Self::TouchStart => "touchstart",
            Self::Click => "click",
            Self::KeyDown => "keydown",
            Self::TransitionEnd => "transitionend",
            Self::BottomLineAnimationEnd => bottom_line::ANIMATION_END_EVENT,
            Self::IconAction => strings::ICON_EVENT,
            Self::Other(name) => name,
        }
    }

    /// Whether the event propagates from its target to ancestors.
    pub const fn bubbles(&self) -> bool {
        matches!(
            self,
            Self::MouseDown | Self::TouchStart | Self::Click | Self::KeyDown | Self::IconAction
        )
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s {
            input::FOCUS_EVENT => Self::Focus,
            input::BLUR_EVENT => Self::Blur,
            input::PRESSED_EVENT => Self::MouseDown,
            "touchstart" => Self::TouchStart,
            "click" => Self::Click,
            "keydown" => Self::KeyDown,
            "transitionend" => Self::TransitionEnd,
            bottom_line::ANIMATION_END_EVENT => Self::BottomLineAnimationEnd,
            strings::ICON_EVENT => Self::IconAction,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A UI event as seen by the controllers.
///
/// `T` is the host's handle for the element the event was dispatched on.
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent<T> {
    /// Event kind.
    pub event_type: EventType,
    /// Element the event originated from.
    pub target: T,
    /// `KeyboardEvent.key`, if any.
    pub key: Option<String>,
    /// Legacy numeric `KeyboardEvent.keyCode`, if any.
    pub key_code: Option<u32>,
    /// Pointer x position relative to the target's left edge.
    pub offset_x: f64,
    /// Transitioned CSS property, for transition events.
    pub property_name: Option<String>,
}

impl<T> DomEvent<T> {
    /// Create an event with no key or pointer data.
    pub const fn new(event_type: EventType, target: T) -> Self {
        Self {
            event_type,
            target,
            key: None,
            key_code: None,
            offset_x: 0.0,
            property_name: None,
        }
    }

    /// Keydown event with the given key and legacy key code.
    pub fn key_down(target: T, key: impl Into<String>, key_code: Option<u32>) -> Self {
        Self {
            key: Some(key.into()),
            key_code,
            ..Self::new(EventType::KeyDown, target)
        }
    }

    /// Click event.
    pub const fn click(target: T) -> Self {
        Self::new(EventType::Click, target)
    }

    /// Pointer press at `offset_x`.
    pub const fn pointer_down(target: T, offset_x: f64) -> Self {
        let mut event = Self::new(EventType::MouseDown, target);
        event.offset_x = offset_x;
        event
    }

    /// `transitionend` for `property`.
    pub fn transition_end(target: T, property: impl Into<String>) -> Self {
        Self {
            property_name: Some(property.into()),
            ..Self::new(EventType::TransitionEnd, target)
        }
    }

    /// Set the key code.
    #[must_use]
    pub const fn with_key_code(mut self, key_code: u32) -> Self {
        self.key_code = Some(key_code);
        self
    }
}

/// A bound event callback.
///
/// Adapters identify handlers by `Rc` pointer identity: the value passed to a
/// deregistration must be the very one passed to the matching registration.
pub type EventHandler<T> = Rc<dyn Fn(&DomEvent<T>)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_round_trips_known_names() {
        for ty in [
            EventType::Focus,
            EventType::Blur,
            EventType::MouseDown,
            EventType::Click,
            EventType::KeyDown,
            EventType::TransitionEnd,
            EventType::BottomLineAnimationEnd,
            EventType::IconAction,
        ] {
            assert_eq!(EventType::from(ty.as_str()), ty);
        }
    }

    #[test]
    fn test_event_type_unknown_name() {
        let ty = EventType::from("dblclick");
        assert_eq!(ty, EventType::Other("dblclick".to_string()));
        assert_eq!(ty.to_string(), "dblclick");
    }

    #[test]
    fn test_focus_does_not_bubble() {
        assert!(!EventType::Focus.bubbles());
        assert!(!EventType::Blur.bubbles());
        assert!(EventType::Click.bubbles());
        assert!(EventType::KeyDown.bubbles());
    }

    #[test]
    fn test_key_down_builder() {
        let evt = DomEvent::key_down(7_u32, "Enter", Some(13));
        assert_eq!(evt.event_type, EventType::KeyDown);
        assert_eq!(evt.key.as_deref(), Some("Enter"));
        assert_eq!(evt.key_code, Some(13));
        assert_eq!(evt.target, 7);
    }

    #[test]
    fn test_pointer_down_offset() {
        let evt = DomEvent::pointer_down((), 42.5);
        assert_eq!(evt.event_type, EventType::MouseDown);
        assert_eq!(evt.offset_x, 42.5);
    }
}
