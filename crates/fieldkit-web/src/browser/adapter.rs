//! Adapters binding the controllers to live DOM elements.

use super::events::to_dom_event;
use fieldkit_core::{
    BottomLineAdapter, BottomLineFoundation, DeferredTask, EventHandler, EventType, InputAdapter,
    InputController, InputFoundation, TextFieldAdapter, UnderlineController,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Element, Event, HtmlInputElement};

fn log_dom_error(operation: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        tracing::warn!(operation, error = ?err, "DOM call failed");
    }
}

fn dispatch_custom_event(target: &Element, name: &str, bubbles: bool) {
    let init = CustomEventInit::new();
    init.set_bubbles(bubbles);
    let result = CustomEvent::new_with_event_init_dict(name, &init)
        .and_then(|event| target.dispatch_event(&event).map(|_| ()));
    log_dom_error(name, result);
}

/// [`InputAdapter`] over an `<input>` element.
#[derive(Debug, Clone)]
pub struct WebInputAdapter {
    element: HtmlInputElement,
}

impl WebInputAdapter {
    pub const fn new(element: HtmlInputElement) -> Self {
        Self { element }
    }
}

impl InputAdapter for WebInputAdapter {
    fn value(&self) -> String {
        self.element.value()
    }

    fn is_disabled(&self) -> bool {
        self.element.disabled()
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.element.set_disabled(disabled);
    }

    fn is_bad_input(&self) -> bool {
        self.element.validity().bad_input()
    }

    fn check_native_validity(&self) -> bool {
        self.element.check_validity()
    }
}

/// [`BottomLineAdapter`] over the bottom line element.
#[derive(Debug, Clone)]
pub struct WebBottomLineAdapter {
    element: Element,
}

impl WebBottomLineAdapter {
    pub const fn new(element: Element) -> Self {
        Self { element }
    }
}

impl BottomLineAdapter for WebBottomLineAdapter {
    fn add_class(&mut self, class_name: &str) {
        log_dom_error("add_class", self.element.class_list().add_1(class_name));
    }

    fn remove_class(&mut self, class_name: &str) {
        log_dom_error("remove_class", self.element.class_list().remove_1(class_name));
    }

    fn has_class(&self, class_name: &str) -> bool {
        self.element.class_list().contains(class_name)
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        log_dom_error("set_attribute", self.element.set_attribute(name, value));
    }

    fn notify_animation_end(&mut self) {
        dispatch_custom_event(
            &self.element,
            EventType::BottomLineAnimationEnd.as_str(),
            false,
        );
    }
}

/// A handler attached to a DOM element.
struct BoundListener {
    target: Element,
    event_type: EventType,
    handler: EventHandler<Element>,
    closure: Closure<dyn FnMut(Event)>,
}

impl BoundListener {
    fn detach(&self) {
        log_dom_error(
            "remove_event_listener",
            self.target.remove_event_listener_with_callback(
                self.event_type.as_str(),
                self.closure.as_ref().unchecked_ref(),
            ),
        );
    }
}

/// The elements a [`WebTextFieldAdapter`] works on.
#[derive(Debug, Clone)]
pub struct WebElements {
    pub root: Element,
    pub input: Option<HtmlInputElement>,
    pub label: Option<Element>,
    pub icon: Option<Element>,
    pub bottom_line: Option<Element>,
    pub helper_text: Option<Element>,
}

/// [`TextFieldAdapter`] over live DOM elements.
///
/// Each registered [`EventHandler`] is wrapped in a JS closure kept alive
/// until deregistration or drop.
pub struct WebTextFieldAdapter {
    elements: WebElements,
    input: Option<InputFoundation<WebInputAdapter>>,
    bottom_line: Option<BottomLineFoundation<WebBottomLineAdapter>>,
    listeners: Vec<BoundListener>,
    deferred: Vec<DeferredTask>,
}

impl WebTextFieldAdapter {
    pub fn new(
        elements: WebElements,
        input: Option<InputFoundation<WebInputAdapter>>,
    ) -> Self {
        let bottom_line = elements
            .bottom_line
            .clone()
            .map(|line| BottomLineFoundation::new(WebBottomLineAdapter::new(line)));
        Self {
            elements,
            input,
            bottom_line,
            listeners: Vec::new(),
            deferred: Vec::new(),
        }
    }

    pub const fn elements(&self) -> &WebElements {
        &self.elements
    }

    /// Number of listeners currently attached.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn position(
        &self,
        target: &Element,
        event_type: &EventType,
        handler: &EventHandler<Element>,
    ) -> Option<usize> {
        self.listeners.iter().position(|l| {
            l.target == *target && l.event_type == *event_type && Rc::ptr_eq(&l.handler, handler)
        })
    }

    fn listen(
        &mut self,
        target: Option<Element>,
        event_type: EventType,
        handler: &EventHandler<Element>,
    ) {
        let Some(target) = target else {
            return;
        };
        if self.position(&target, &event_type, handler).is_some() {
            return;
        }

        let callback = Rc::clone(handler);
        let delivered_as = event_type.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(dom_event) = to_dom_event(&event, delivered_as.clone()) {
                callback(&dom_event);
            }
        });
        let function: &js_sys::Function = closure.as_ref().unchecked_ref();
        log_dom_error(
            "add_event_listener",
            target.add_event_listener_with_callback(event_type.as_str(), function),
        );
        tracing::trace!(event = %event_type, "listener attached");
        self.listeners.push(BoundListener {
            target,
            event_type,
            handler: Rc::clone(handler),
            closure,
        });
    }

    fn unlisten(
        &mut self,
        target: Option<&Element>,
        event_type: &EventType,
        handler: &EventHandler<Element>,
    ) {
        let Some(target) = target else {
            return;
        };
        if let Some(pos) = self.position(target, event_type, handler) {
            self.listeners.remove(pos).detach();
        }
    }

    fn toggle(element: Option<&Element>, class_name: &str, add: bool) {
        if let Some(element) = element {
            let classes = element.class_list();
            let result = if add {
                classes.add_1(class_name)
            } else {
                classes.remove_1(class_name)
            };
            log_dom_error("class_list", result);
        }
    }

    fn input_element(&self) -> Option<Element> {
        self.elements
            .input
            .as_ref()
            .map(|input| input.clone().unchecked_into())
    }
}

impl Drop for WebTextFieldAdapter {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
    }
}

impl TextFieldAdapter for WebTextFieldAdapter {
    type Target = Element;

    fn add_class(&mut self, class_name: &str) {
        Self::toggle(Some(&self.elements.root), class_name, true);
    }

    fn remove_class(&mut self, class_name: &str) {
        Self::toggle(Some(&self.elements.root), class_name, false);
    }

    fn add_class_to_label(&mut self, class_name: &str) {
        Self::toggle(self.elements.label.as_ref(), class_name, true);
    }

    fn remove_class_from_label(&mut self, class_name: &str) {
        Self::toggle(self.elements.label.as_ref(), class_name, false);
    }

    fn set_icon_attr(&mut self, name: &str, value: &str) {
        if let Some(icon) = &self.elements.icon {
            log_dom_error("set_attribute", icon.set_attribute(name, value));
        }
    }

    fn event_target_has_class(&self, target: &Element, class_name: &str) -> bool {
        target.class_list().contains(class_name)
    }

    fn register_text_field_interaction_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<Element>,
    ) {
        let root = self.elements.root.clone();
        self.listen(Some(root), event_type, handler);
    }

    fn deregister_text_field_interaction_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<Element>,
    ) {
        let root = self.elements.root.clone();
        self.unlisten(Some(&root), &event_type, handler);
    }

    fn notify_icon_action(&mut self) {
        let root = self.elements.root.clone();
        self.deferred.push(Box::new(move || {
            dispatch_custom_event(&root, EventType::IconAction.as_str(), true);
        }));
    }

    fn add_class_to_helper_text(&mut self, class_name: &str) {
        Self::toggle(self.elements.helper_text.as_ref(), class_name, true);
    }

    fn remove_class_from_helper_text(&mut self, class_name: &str) {
        Self::toggle(self.elements.helper_text.as_ref(), class_name, false);
    }

    fn helper_text_has_class(&self, class_name: &str) -> bool {
        self.elements
            .helper_text
            .as_ref()
            .is_some_and(|helper| helper.class_list().contains(class_name))
    }

    fn register_input_event_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<Element>,
    ) {
        let input = self.input_element();
        self.listen(input, event_type, handler);
    }

    fn deregister_input_event_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<Element>,
    ) {
        let input = self.input_element();
        self.unlisten(input.as_ref(), &event_type, handler);
    }

    fn register_bottom_line_event_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<Element>,
    ) {
        let line = self.elements.bottom_line.clone();
        self.listen(line, event_type, handler);
    }

    fn deregister_bottom_line_event_handler(
        &mut self,
        event_type: EventType,
        handler: &EventHandler<Element>,
    ) {
        let line = self.elements.bottom_line.clone();
        self.unlisten(line.as_ref(), &event_type, handler);
    }

    fn set_helper_text_attr(&mut self, name: &str, value: &str) {
        if let Some(helper) = &self.elements.helper_text {
            log_dom_error("set_attribute", helper.set_attribute(name, value));
        }
    }

    fn remove_helper_text_attr(&mut self, name: &str) {
        if let Some(helper) = &self.elements.helper_text {
            log_dom_error("remove_attribute", helper.remove_attribute(name));
        }
    }

    fn input_foundation(&self) -> Option<&dyn InputController> {
        self.input.as_ref().map(|input| input as &dyn InputController)
    }

    fn input_foundation_mut(&mut self) -> Option<&mut dyn InputController> {
        self.input
            .as_mut()
            .map(|input| input as &mut dyn InputController)
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
