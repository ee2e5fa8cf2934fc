//! Browser event conversion - turns `web_sys` events into [`DomEvent`]s.

use fieldkit_core::{DomEvent, EventType};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent, TransitionEvent};

/// Convert a browser event delivered for `event_type`.
///
/// Returns `None` when the event target is not an element.
pub fn to_dom_event(event: &Event, event_type: EventType) -> Option<DomEvent<Element>> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let mut dom_event = DomEvent::new(event_type, target);

    if let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() {
        dom_event.key = Some(keyboard.key());
        dom_event.key_code = Some(keyboard.key_code());
    }
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        dom_event.offset_x = pointer_offset_x(mouse, &dom_event.target);
    }
    if let Some(transition) = event.dyn_ref::<TransitionEvent>() {
        dom_event.property_name = Some(transition.property_name());
    }
    Some(dom_event)
}

/// Pointer x relative to the left edge of `target`.
fn pointer_offset_x(event: &MouseEvent, target: &Element) -> f64 {
    f64::from(event.client_x()) - target.get_bounding_client_rect().left()
}
