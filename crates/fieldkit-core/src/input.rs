//! Foundation for the native `<input>` inside a text field.

use crate::adapter::InputController;
use crate::validation::FieldValidator;

/// Native input element operations.
pub trait InputAdapter {
    /// Current value.
    fn value(&self) -> String;

    /// Whether the element is disabled.
    fn is_disabled(&self) -> bool;

    /// Set the element's disabled flag.
    fn set_disabled(&mut self, disabled: bool);

    /// `ValidityState.badInput`.
    fn is_bad_input(&self) -> bool;

    /// The element's own constraint check (`checkValidity()`).
    fn check_native_validity(&self) -> bool;
}

/// Input controller combining native validity with extra constraints.
#[derive(Debug)]
pub struct InputFoundation<A: InputAdapter> {
    adapter: A,
    validator: FieldValidator,
    received_user_input: bool,
}

impl<A: InputAdapter> InputFoundation<A> {
    /// Create an input foundation with no extra constraints.
    pub fn new(adapter: A) -> Self {
        Self::with_validator(adapter, FieldValidator::new())
    }

    /// Create an input foundation checked against `validator`.
    pub const fn with_validator(adapter: A, validator: FieldValidator) -> Self {
        Self {
            adapter,
            validator,
            received_user_input: false,
        }
    }

    /// Whether the user has interacted with the field.
    pub const fn received_user_input(&self) -> bool {
        self.received_user_input
    }

    /// Messages of every failing constraint for the current value.
    pub fn validation_messages(&self) -> Vec<String> {
        self.validator.validate(&self.adapter.value())
    }

    /// The adapter.
    pub const fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the adapter.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }
}

impl<A: InputAdapter> InputController for InputFoundation<A> {
    fn value(&self) -> String {
        self.adapter.value()
    }

    fn is_disabled(&self) -> bool {
        self.adapter.is_disabled()
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.adapter.set_disabled(disabled);
    }

    fn is_bad_input(&self) -> bool {
        self.adapter.is_bad_input()
    }

    fn check_validity(&self) -> bool {
        self.adapter.check_native_validity() && self.validator.is_valid(&self.adapter.value())
    }

    fn set_received_user_input(&mut self, received: bool) {
        self.received_user_input = received;
    }
}
