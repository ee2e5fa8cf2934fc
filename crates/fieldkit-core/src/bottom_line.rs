//! Foundation for the animated underline.
//!
//! All of the bottom line's state lives in its element's classes, so a
//! foundation can be created on demand around any adapter for that element.

use crate::adapter::UnderlineController;
use crate::constants::bottom_line;

/// Bottom line element operations.
pub trait BottomLineAdapter {
    /// Add a class to the line element.
    fn add_class(&mut self, class_name: &str);
    /// Remove a class from the line element.
    fn remove_class(&mut self, class_name: &str);
    /// Whether the line element carries `class_name`.
    fn has_class(&self, class_name: &str) -> bool;
    /// Set an attribute on the line element.
    fn set_attr(&mut self, name: &str, value: &str);

    /// Emit the animation-end event the text field listens for.
    fn notify_animation_end(&mut self);
}

/// Underline controller.
#[derive(Debug)]
pub struct BottomLineFoundation<A: BottomLineAdapter> {
    adapter: A,
}

impl<A: BottomLineAdapter> BottomLineFoundation<A> {
    /// Wrap `adapter` without touching the element.
    pub const fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Whether the underline is shown.
    pub fn is_active(&self) -> bool {
        self.adapter.has_class(bottom_line::BOTTOM_LINE_ACTIVE)
    }

    /// React to a finished CSS transition on the bottom line.
    ///
    /// The end of the `opacity` transition on an active line is the signal
    /// that the fade-out is complete.
    pub fn handle_transition_end(&mut self, property_name: &str) {
        if property_name == bottom_line::OPACITY_PROPERTY && self.is_active() {
            self.adapter.notify_animation_end();
        }
    }

    /// The wrapped adapter.
    pub const fn adapter(&self) -> &A {
        &self.adapter
    }
}

impl<A: BottomLineAdapter> UnderlineController for BottomLineFoundation<A> {
    fn activate(&mut self) {
        self.adapter.add_class(bottom_line::BOTTOM_LINE_ACTIVE);
    }

    fn deactivate(&mut self) {
        self.adapter.remove_class(bottom_line::BOTTOM_LINE_ACTIVE);
    }

    fn set_transform_origin(&mut self, offset_x: f64) {
        let style = format!("transform-origin: {offset_x}px center");
        self.adapter.set_attr(bottom_line::STYLE_ATTR, &style);
    }
}
