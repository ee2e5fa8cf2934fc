//! A text field rendered into a headless [`Document`].

use super::document::{Document, ElementId, SharedDocument};
use fieldkit_core::constants::{bottom_line, css_classes, strings};
use fieldkit_core::{
    BottomLineAdapter, BottomLineFoundation, ConfigError, DeferredTask, DomEvent, EventHandler,
    EventType, InputAdapter, InputController, InputFoundation, TextFieldAdapter, TextFieldConfig,
    TextFieldFoundation, UnderlineController,
};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// The elements making up one text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldElements {
    pub root: ElementId,
    pub input: ElementId,
    pub label: ElementId,
    pub helper_text: Option<ElementId>,
    pub icon: Option<ElementId>,
    pub bottom_line: Option<ElementId>,
}

/// [`InputAdapter`] over a headless input element.
pub struct HeadlessInput {
    document: SharedDocument,
    element: ElementId,
}

impl fmt::Debug for HeadlessInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessInput")
            .field("element", &self.element)
            .finish_non_exhaustive()
    }
}

impl InputAdapter for HeadlessInput {
    fn value(&self) -> String {
        self.document
            .borrow()
            .get(self.element)
            .map(|el| el.value.clone())
            .unwrap_or_default()
    }

    fn is_disabled(&self) -> bool {
        self.document
            .borrow()
            .get(self.element)
            .is_some_and(|el| el.disabled)
    }

    fn set_disabled(&mut self, disabled: bool) {
        if let Some(el) = self.document.borrow_mut().get_mut(self.element) {
            el.disabled = disabled;
        }
    }

    fn is_bad_input(&self) -> bool {
        self.document
            .borrow()
            .get(self.element)
            .is_some_and(|el| el.bad_input)
    }

    fn check_native_validity(&self) -> bool {
        !self.is_bad_input()
    }
}

/// [`BottomLineAdapter`] over a headless bottom line element.
#[derive(Debug)]
pub struct HeadlessBottomLine {
    document: Weak<RefCell<Document>>,
    element: ElementId,
}

impl HeadlessBottomLine {
    fn with_element<R>(&self, f: impl FnOnce(&mut super::Element) -> R) -> Option<R> {
        let document = self.document.upgrade()?;
        let mut doc = document.borrow_mut();
        doc.get_mut(self.element).map(f)
    }
}

impl BottomLineAdapter for HeadlessBottomLine {
    fn add_class(&mut self, class_name: &str) {
        self.with_element(|el| el.add_class(class_name));
    }

    fn remove_class(&mut self, class_name: &str) {
        self.with_element(|el| el.remove_class(class_name));
    }

    fn has_class(&self, class_name: &str) -> bool {
        self.with_element(|el| el.has_class(class_name))
            .unwrap_or(false)
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        self.with_element(|el| el.set_attribute(name, value));
    }

    fn notify_animation_end(&mut self) {
        if let Some(document) = self.document.upgrade() {
            Document::dispatch(
                &document,
                &DomEvent::new(EventType::BottomLineAnimationEnd, self.element),
            );
        }
    }
}

/// [`TextFieldAdapter`] over a headless document.
pub struct HeadlessAdapter {
    document: SharedDocument,
    elements: FieldElements,
    input: InputFoundation<HeadlessInput>,
    bottom_line: Option<BottomLineFoundation<HeadlessBottomLine>>,
    deferred: Vec<DeferredTask>,
}

impl HeadlessAdapter {
    fn update(&self, id: Option<ElementId>, f: impl FnOnce(&mut super::Element)) {
        if let Some(id) = id {
            if let Some(el) = self.document.borrow_mut().get_mut(id) {
                f(el);
            }
        }
    }

    fn has_class(&self, id: Option<ElementId>, class_name: &str) -> bool {
        id.is_some_and(|id| {
            self.document
                .borrow()
                .get(id)
                .is_some_and(|el| el.has_class(class_name))
        })
    }

    fn listen(
        &self,
        target: Option<ElementId>,
        event_type: EventType,
        handler: &EventHandler<ElementId>,
    ) {
        if let Some(target) = target {
            self.document
                .borrow_mut()
                .add_event_listener(target, event_type, handler);
        }
    }

    fn unlisten(
        &self,
        target: Option<ElementId>,
        event_type: &EventType,
        handler: &EventHandler<ElementId>,
    ) {
        if let Some(target) = target {
            self.document
                .borrow_mut()
                .remove_event_listener(target, event_type, handler);
        }
    }

    /// The input foundation, with its constraint messages.
    pub const fn input(&self) -> &InputFoundation<HeadlessInput> {
        &self.input
    }
}

impl TextFieldAdapter for HeadlessAdapter {
    type Target = ElementId;

    fn add_class(&mut self, class_name: &str) {
        self.update(Some(self.elements.root), |el| el.add_class(class_name));
    }

    fn remove_class(&mut self, class_name: &str) {
        self.update(Some(self.elements.root), |el| el.remove_class(class_name));
    }

    fn add_class_to_label(&mut self, class_name: &str) {
        self.update(Some(self.elements.label), |el| el.add_class(class_name));
    }

    fn remove_class_from_label(&mut self, class_name: &str) {
        self.update(Some(self.elements.label), |el| el.remove_class(class_name));
    }

    fn set_icon_attr(&mut self, name: &str, value: &str) {
        self.update(self.elements.icon, |el| el.set_attribute(name, value));
    }

    fn event_target_has_class(&self, target: &ElementId, class_name: &str) -> bool {
        self.has_class(Some(*target), class_name)
    }

    fn register_text_field_interaction_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<ElementId>,
    ) {
        self.listen(Some(self.elements.root), event_type, handler);
    }

    fn deregister_text_field_interaction_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<ElementId>,
    ) {
        self.unlisten(Some(self.elements.root), &event_type, handler);
    }

    fn notify_icon_action(&mut self) {
        let document = Rc::clone(&self.document);
        let root = self.elements.root;
        self.deferred.push(Box::new(move || {
            Document::dispatch(&document, &DomEvent::new(EventType::IconAction, root));
        }));
    }

    fn add_class_to_helper_text(&mut self, class_name: &str) {
        self.update(self.elements.helper_text, |el| el.add_class(class_name));
    }

    fn remove_class_from_helper_text(&mut self, class_name: &str) {
        self.update(self.elements.helper_text, |el| el.remove_class(class_name));
    }

    fn helper_text_has_class(&self, class_name: &str) -> bool {
        self.has_class(self.elements.helper_text, class_name)
    }

    fn register_input_event_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<ElementId>,
    ) {
        self.listen(Some(self.elements.input), event_type, handler);
    }

    fn deregister_input_event_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<ElementId>,
    ) {
        self.unlisten(Some(self.elements.input), &event_type, handler);
    }

    fn register_bottom_line_event_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<ElementId>,
    ) {
        self.listen(self.elements.bottom_line, event_type, handler);
    }

    fn deregister_bottom_line_event_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<ElementId>,
    ) {
        self.unlisten(self.elements.bottom_line, &event_type, handler);
    }

    fn set_helper_text_attr(&mut self, name: &str, value: &str) {
        self.update(self.elements.helper_text, |el| el.set_attribute(name, value));
    }

    fn remove_helper_text_attr(&mut self, name: &str) {
        self.update(self.elements.helper_text, |el| el.remove_attribute(name));
    }

    fn input_foundation(&self) -> Option<&dyn InputController> {
        Some(&self.input)
    }

    fn input_foundation_mut(&mut self) -> Option<&mut dyn InputController> {
        Some(&mut self.input)
    }

    fn bottom_line_foundation(&mut self) -> Option<&mut dyn UnderlineController> {
        self.bottom_line
            .as_mut()
            .map(|line| line as &mut dyn UnderlineController)
    }

    fn take_deferred(&mut self) -> Vec<DeferredTask> {
        std::mem::take(&mut self.deferred)
    }
}

/// A fully wired text field living in a headless document.
pub struct HeadlessTextField {
    document: SharedDocument,
    elements: FieldElements,
    foundation: Rc<RefCell<TextFieldFoundation<HeadlessAdapter>>>,
    transition_end: Option<EventHandler<ElementId>>,
}

impl HeadlessTextField {
    /// Render `config` into a fresh document and initialize the controller.
    pub fn new(config: &TextFieldConfig) -> Self {
        Self::in_document(Document::shared(), config)
    }

    /// Parse a YAML config and build the field.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        TextFieldConfig::from_yaml(yaml).map(|config| Self::new(&config))
    }

    /// Render `config` into `document` and initialize the controller.
    pub fn in_document(document: SharedDocument, config: &TextFieldConfig) -> Self {
        let elements = render(&mut document.borrow_mut(), config);

        let transition_end = elements.bottom_line.map(|line| {
            let weak = Rc::downgrade(&document);
            let handler: EventHandler<ElementId> = Rc::new(move |evt: &DomEvent<ElementId>| {
                let Some(property) = evt.property_name.as_deref() else {
                    return;
                };
                let mut foundation = BottomLineFoundation::new(HeadlessBottomLine {
                    document: weak.clone(),
                    element: evt.target,
                });
                foundation.handle_transition_end(property);
            });
            document
                .borrow_mut()
                .add_event_listener(line, EventType::TransitionEnd, &handler);
            handler
        });

        let adapter = HeadlessAdapter {
            document: Rc::clone(&document),
            elements,
            input: InputFoundation::with_validator(
                HeadlessInput {
                    document: Rc::clone(&document),
                    element: elements.input,
                },
                config.constraints.build(),
            ),
            bottom_line: elements.bottom_line.map(|element| {
                BottomLineFoundation::new(HeadlessBottomLine {
                    document: Rc::downgrade(&document),
                    element,
                })
            }),
            deferred: Vec::new(),
        };

        let foundation = TextFieldFoundation::new(adapter);
        {
            let mut f = foundation.borrow_mut();
            f.init();
            if config.disabled {
                f.set_disabled(true);
            }
        }

        Self {
            document,
            elements,
            foundation,
            transition_end,
        }
    }

    /// Tear the controller down and stop listening.
    pub fn destroy(&mut self) {
        self.foundation.borrow_mut().destroy();
        if let (Some(line), Some(handler)) = (self.elements.bottom_line, self.transition_end.take())
        {
            self.document
                .borrow_mut()
                .remove_event_listener(line, &EventType::TransitionEnd, &handler);
        }
    }

    pub const fn document(&self) -> &SharedDocument {
        &self.document
    }

    pub const fn elements(&self) -> &FieldElements {
        &self.elements
    }

    /// The controller.
    pub const fn foundation(&self) -> &Rc<RefCell<TextFieldFoundation<HeadlessAdapter>>> {
        &self.foundation
    }

    pub fn is_focused(&self) -> bool {
        self.foundation.borrow().is_focused()
    }

    pub fn is_disabled(&self) -> bool {
        self.foundation.borrow().is_disabled()
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.foundation.borrow_mut().set_disabled(disabled);
    }

    pub fn set_valid(&self, is_valid: bool) {
        self.foundation.borrow_mut().set_valid(is_valid);
    }

    /// Failing constraint messages for the current value.
    pub fn validation_messages(&self) -> Vec<String> {
        self.foundation
            .borrow()
            .adapter()
            .input()
            .validation_messages()
    }
}

/// Build the text field markup.
fn render(doc: &mut Document, config: &TextFieldConfig) -> FieldElements {
    let root = doc.create_element("div", None);
    let input = doc.create_element("input", Some(root));
    let label = doc.create_element("label", Some(root));
    let icon = config.icon.then(|| doc.create_element("i", Some(root)));
    let bottom_line_el = config
        .bottom_line
        .then(|| doc.create_element("div", Some(root)));
    // Helper text is a sibling of the root, linked through aria-controls.
    let helper_text = config
        .helper_text
        .as_ref()
        .map(|_| doc.create_element("p", None));

    if let Some(el) = doc.get_mut(root) {
        el.add_class(css_classes::ROOT);
    }
    if let Some(el) = doc.get_mut(input) {
        el.add_class(trim_selector(strings::INPUT_SELECTOR));
        el.value.clone_from(&config.value);
        el.disabled = config.disabled;
        if let Some(helper) = helper_text {
            el.set_attribute(strings::ARIA_CONTROLS, &helper_text_id(helper));
        }
    }
    if let Some(el) = doc.get_mut(label) {
        el.add_class(trim_selector(strings::LABEL_SELECTOR));
        el.text.clone_from(&config.label);
    }
    if let Some(el) = icon.and_then(|id| doc.get_mut(id)) {
        el.add_class(css_classes::TEXT_FIELD_ICON);
        el.set_attribute(strings::TABINDEX, strings::TABINDEX_FOCUSABLE);
    }
    if let Some(el) = bottom_line_el.and_then(|id| doc.get_mut(id)) {
        el.add_class(bottom_line::BOTTOM_LINE);
    }
    if let (Some(id), Some(helper)) = (helper_text, config.helper_text.as_ref()) {
        if let Some(el) = doc.get_mut(id) {
            el.add_class("mdc-text-field-helper-text");
            if helper.persistent {
                el.add_class(css_classes::HELPER_TEXT_PERSISTENT);
            }
            if helper.validation_msg {
                el.add_class(css_classes::HELPER_TEXT_VALIDATION_MSG);
            }
            el.text.clone_from(&helper.text);
            el.set_attribute("id", &helper_text_id(id));
            el.set_attribute(strings::ARIA_HIDDEN, "true");
        }
    }

    FieldElements {
        root,
        input,
        label,
        helper_text,
        icon,
        bottom_line: bottom_line_el,
    }
}

fn trim_selector(selector: &str) -> &str {
    selector.trim_start_matches('.')
}

fn helper_text_id(id: ElementId) -> String {
    format!("helper-text-{}", id.index())
}
