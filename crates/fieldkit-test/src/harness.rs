//! Test harness for fieldkit text fields.

use fieldkit_core::constants::css_classes;
use fieldkit_core::{ConfigError, DomEvent, EventHandler, EventType, TextFieldConfig};
use fieldkit_web::{Document, ElementId, HeadlessTextField};
use std::cell::Cell;
use std::rc::Rc;

/// A part of the text field markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Root,
    Input,
    Label,
    HelperText,
    Icon,
    BottomLine,
}

/// Drives a headless text field the way a user would.
pub struct Harness {
    field: HeadlessTextField,
    icon_actions: Rc<Cell<usize>>,
    icon_listener: EventHandler<ElementId>,
}

impl Harness {
    /// Render `config` and attach an icon action counter.
    pub fn new(config: &TextFieldConfig) -> Self {
        let field = HeadlessTextField::new(config);
        let icon_actions = Rc::new(Cell::new(0));
        let counter = Rc::clone(&icon_actions);
        let icon_listener: EventHandler<ElementId> =
            Rc::new(move |_: &DomEvent<ElementId>| counter.set(counter.get() + 1));
        field.document().borrow_mut().add_event_listener(
            field.elements().root,
            EventType::IconAction,
            &icon_listener,
        );
        Self {
            field,
            icon_actions,
            icon_listener,
        }
    }

    /// Build a harness from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        TextFieldConfig::from_yaml(yaml).map(|config| Self::new(&config))
    }

    /// The field under test.
    pub const fn field(&self) -> &HeadlessTextField {
        &self.field
    }

    // === Interaction ===

    /// Focus the input.
    pub fn focus(&mut self) -> &mut Self {
        let input = self.element(Part::Input);
        self.dispatch(&DomEvent::new(EventType::Focus, input))
    }

    /// Blur the input.
    pub fn blur(&mut self) -> &mut Self {
        let input = self.element(Part::Input);
        self.dispatch(&DomEvent::new(EventType::Blur, input))
    }

    /// Press the pointer on the input at `offset_x`.
    pub fn press(&mut self, offset_x: f64) -> &mut Self {
        let input = self.element(Part::Input);
        self.dispatch(&DomEvent::pointer_down(input, offset_x))
    }

    /// Click `part`.
    pub fn click(&mut self, part: Part) -> &mut Self {
        let target = self.element(part);
        self.dispatch(&DomEvent::click(target))
    }

    /// Press `key` while `part` has focus.
    pub fn key_down(&mut self, part: Part, key: &str, key_code: Option<u32>) -> &mut Self {
        let target = self.element(part);
        self.dispatch(&DomEvent::key_down(target, key, key_code))
    }

    /// Focus, replace the value with `text`, and blur.
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        self.focus();
        self.set_value(text);
        self.blur()
    }

    /// Replace the input value without any events.
    pub fn set_value(&mut self, value: &str) -> &mut Self {
        self.with_input(|el| value.clone_into(&mut el.value))
    }

    /// Mark the input as holding unparseable content.
    pub fn set_bad_input(&mut self, bad_input: bool) -> &mut Self {
        self.with_input(|el| el.bad_input = bad_input)
    }

    /// Finish a CSS transition of `property` on the bottom line.
    pub fn end_transition(&mut self, property: &str) -> &mut Self {
        if self.field.elements().bottom_line.is_some() {
            let line = self.element(Part::BottomLine);
            self.dispatch(&DomEvent::transition_end(line, property));
        }
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.field.set_disabled(disabled);
        self
    }

    pub fn set_valid(&mut self, is_valid: bool) -> &mut Self {
        self.field.set_valid(is_valid);
        self
    }

    /// Tear the field down.
    pub fn destroy(&mut self) -> &mut Self {
        self.field.destroy();
        self
    }

    // === Queries ===

    /// Handle of `part`.
    ///
    /// # Panics
    ///
    /// Panics if the field was rendered without `part`.
    pub fn element(&self, part: Part) -> ElementId {
        let elements = self.field.elements();
        let id = match part {
            Part::Root => Some(elements.root),
            Part::Input => Some(elements.input),
            Part::Label => Some(elements.label),
            Part::HelperText => elements.helper_text,
            Part::Icon => elements.icon,
            Part::BottomLine => elements.bottom_line,
        };
        id.unwrap_or_else(|| panic!("Text field was rendered without {part:?}"))
    }

    /// Whether `part` carries `class_name`.
    pub fn has_class(&self, part: Part, class_name: &str) -> bool {
        let id = self.element(part);
        self.field
            .document()
            .borrow()
            .get(id)
            .is_some_and(|el| el.has_class(class_name))
    }

    /// Value of attribute `name` on `part`.
    pub fn attribute(&self, part: Part, name: &str) -> Option<String> {
        let id = self.element(part);
        self.field
            .document()
            .borrow()
            .get(id)
            .and_then(|el| el.attribute(name).map(str::to_string))
    }

    /// Number of icon actions emitted so far.
    pub fn icon_actions(&self) -> usize {
        self.icon_actions.get()
    }

    // === Assertions ===

    /// Assert that `part` carries `class_name`.
    ///
    /// # Panics
    ///
    /// Panics if the class is missing.
    pub fn assert_has_class(&self, part: Part, class_name: &str) -> &Self {
        assert!(
            self.has_class(part, class_name),
            "Expected {part:?} to have class '{class_name}'"
        );
        self
    }

    /// Assert that `part` does not carry `class_name`.
    ///
    /// # Panics
    ///
    /// Panics if the class is present.
    pub fn assert_no_class(&self, part: Part, class_name: &str) -> &Self {
        assert!(
            !self.has_class(part, class_name),
            "Expected {part:?} to not have class '{class_name}'"
        );
        self
    }

    /// Assert the value of an attribute, `None` meaning absent.
    ///
    /// # Panics
    ///
    /// Panics if the attribute differs.
    pub fn assert_attribute(&self, part: Part, name: &str, expected: Option<&str>) -> &Self {
        let actual = self.attribute(part, name);
        assert_eq!(
            actual.as_deref(),
            expected,
            "Expected {part:?}[{name}] to be {expected:?} but got {actual:?}"
        );
        self
    }

    /// Assert the focus state.
    ///
    /// # Panics
    ///
    /// Panics if the focus state differs.
    pub fn assert_focused(&self, expected: bool) -> &Self {
        let actual = self.field.is_focused();
        assert_eq!(actual, expected, "Expected focused={expected} but got {actual}");
        self
    }

    /// Assert whether the root is styled invalid.
    ///
    /// # Panics
    ///
    /// Panics if the invalid class disagrees with `expected`.
    pub fn assert_valid(&self, expected: bool) -> &Self {
        let invalid = self.has_class(Part::Root, css_classes::INVALID);
        assert_eq!(
            !invalid, expected,
            "Expected valid={expected} but root invalid class is {invalid}"
        );
        self
    }

    /// Assert the number of icon actions.
    ///
    /// # Panics
    ///
    /// Panics if the count differs.
    pub fn assert_icon_actions(&self, expected: usize) -> &Self {
        let actual = self.icon_actions();
        assert_eq!(
            actual, expected,
            "Expected {expected} icon actions but got {actual}"
        );
        self
    }

    // === Internal ===

    fn dispatch(&mut self, event: &DomEvent<ElementId>) -> &mut Self {
        Document::dispatch(self.field.document(), event);
        self
    }

    fn with_input(&mut self, f: impl FnOnce(&mut fieldkit_web::Element)) -> &mut Self {
        let input = self.element(Part::Input);
        if let Some(el) = self.field.document().borrow_mut().get_mut(input) {
            f(el);
        }
        self
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        let root = self.field.elements().root;
        self.field.document().borrow_mut().remove_event_listener(
            root,
            &EventType::IconAction,
            &self.icon_listener,
        );
    }
}
