//! The capability boundary between text field controllers and the host.
//!
//! [`TextFieldFoundation`](crate::TextFieldFoundation) never touches an
//! element directly. Every class toggle, attribute write and listener
//! registration goes through a [`TextFieldAdapter`], which makes the same
//! controller usable against a browser DOM, an in-memory document or a test
//! double.

use crate::event::{EventHandler, EventType};

/// A side effect an adapter postponed until the controller is released.
pub type DeferredTask = Box<dyn FnOnce()>;

/// Value, validity and disabled state of the native input.
pub trait InputController {
    /// Current input value.
    fn value(&self) -> String;

    /// Whether the input is disabled.
    fn is_disabled(&self) -> bool;

    /// Enable or disable the input.
    fn set_disabled(&mut self, disabled: bool);

    /// Whether the browser reports unparseable input (e.g. letters in a
    /// number field), in which case `value` reads as empty.
    fn is_bad_input(&self) -> bool;

    /// Whether the current value satisfies every constraint.
    fn check_validity(&self) -> bool;

    /// Record that the user has interacted with the field.
    fn set_received_user_input(&mut self, received: bool);
}

/// The animated underline beneath the input.
pub trait UnderlineController {
    /// Show the underline.
    fn activate(&mut self);

    /// Clear the underline's visual state.
    fn deactivate(&mut self);

    /// Anchor the activation animation at `offset_x` pixels from the left.
    fn set_transform_origin(&mut self, offset_x: f64);
}

/// Side effects and queries a text field controller needs from its host.
///
/// Elements the host did not render (label, helper text, icon) turn their
/// operations into no-ops and their queries into `false`.
pub trait TextFieldAdapter {
    /// Host handle for event targets.
    type Target: 'static;

    /// Add a class to the root element.
    fn add_class(&mut self, class_name: &str);

    /// Remove a class from the root element.
    fn remove_class(&mut self, class_name: &str);

    /// Add a class to the label.
    fn add_class_to_label(&mut self, class_name: &str);

    /// Remove a class from the label.
    fn remove_class_from_label(&mut self, class_name: &str);

    /// Set an attribute on the icon.
    fn set_icon_attr(&mut self, name: &str, value: &str);

    /// Whether `target` carries `class_name`.
    fn event_target_has_class(&self, target: &Self::Target, class_name: &str) -> bool;

    /// Listen for `event_type` on the root element.
    fn register_text_field_interaction_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<Self::Target>,
    );

    /// Stop listening for `event_type` on the root element.
    fn deregister_text_field_interaction_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<Self::Target>,
    );

    /// Tell the outside world the icon was activated.
    ///
    /// Hosts whose listeners may call back into the text field should queue
    /// the notification and hand it out from [`take_deferred`](Self::take_deferred).
    fn notify_icon_action(&mut self);

    /// Add a class to the helper text.
    fn add_class_to_helper_text(&mut self, class_name: &str);

    /// Remove a class from the helper text.
    fn remove_class_from_helper_text(&mut self, class_name: &str);

    /// Whether the helper text carries `class_name`.
    fn helper_text_has_class(&self, class_name: &str) -> bool;

    /// Listen for `event_type` on the native input.
    fn register_input_event_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<Self::Target>,
    );

    /// Stop listening for `event_type` on the native input.
    fn deregister_input_event_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<Self::Target>,
    );

    /// Listen for `event_type` on the bottom line.
    fn register_bottom_line_event_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<Self::Target>,
    );

    /// Stop listening for `event_type` on the bottom line.
    fn deregister_bottom_line_event_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<Self::Target>,
    );

    /// Set an attribute on the helper text.
    fn set_helper_text_attr(&mut self, name: &str, value: &str);

    /// Remove an attribute from the helper text.
    fn remove_helper_text_attr(&mut self, name: &str);

    /// The input controller, if the host has an input.
    fn input_foundation(&self) -> Option<&dyn InputController>;

    /// Mutable access to the input controller.
    fn input_foundation_mut(&mut self) -> Option<&mut dyn InputController>;

    /// The underline controller, if the host renders a bottom line.
    fn bottom_line_foundation(&mut self) -> Option<&mut dyn UnderlineController>;

    /// Work queued during the last handler, run once the controller is no
    /// longer borrowed.
    fn take_deferred(&mut self) -> Vec<DeferredTask> {
        Vec::new()
    }
}
