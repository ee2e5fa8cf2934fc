//! `#[wasm_bindgen]` entry point.

use super::adapter::{WebBottomLineAdapter, WebElements, WebInputAdapter, WebTextFieldAdapter};
use super::error::MountError;
use fieldkit_core::constants::strings;
use fieldkit_core::{BottomLineFoundation, EventType, InputFoundation, TextFieldFoundation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, TransitionEvent};

/// A text field upgraded in place from existing markup.
#[wasm_bindgen]
pub struct TextField {
    foundation: Rc<RefCell<TextFieldFoundation<WebTextFieldAdapter>>>,
    bottom_line: Option<Element>,
    transition_end: Option<Closure<dyn FnMut(TransitionEvent)>>,
}

#[wasm_bindgen]
impl TextField {
    /// Attach to a `.mdc-text-field` root element.
    #[wasm_bindgen(constructor)]
    pub fn new(root: Element) -> Result<TextField, JsValue> {
        Self::mount(root).map_err(JsValue::from)
    }

    pub fn disabled(&self) -> bool {
        self.foundation.borrow().is_disabled()
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.foundation.borrow_mut().set_disabled(disabled);
    }

    /// Override the validity computed on blur.
    pub fn set_valid(&self, is_valid: bool) {
        self.foundation.borrow_mut().set_valid(is_valid);
    }

    pub fn focused(&self) -> bool {
        self.foundation.borrow().is_focused()
    }

    /// Detach every listener and remove the upgraded class.
    pub fn destroy(&mut self) {
        self.foundation.borrow_mut().destroy();
        self.detach_transition_end();
    }
}

impl Drop for TextField {
    fn drop(&mut self) {
        self.detach_transition_end();
    }
}

impl TextField {
    /// Locate the field's parts under `root` and initialize the controller.
    pub fn mount(root: Element) -> Result<Self, MountError> {
        let input = root
            .query_selector(strings::INPUT_SELECTOR)?
            .ok_or_else(|| MountError::MissingElement(strings::INPUT_SELECTOR.to_string()))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| {
                MountError::Dom(format!("{} is not an <input>", strings::INPUT_SELECTOR))
            })?;
        let label = root.query_selector(strings::LABEL_SELECTOR)?;
        let icon = root.query_selector(strings::ICON_SELECTOR)?;
        let bottom_line = root.query_selector(strings::BOTTOM_LINE_SELECTOR)?;
        let helper_text = helper_text_for(&input);

        let transition_end = bottom_line
            .as_ref()
            .map(watch_bottom_line_transitions)
            .transpose()?;

        let elements = WebElements {
            root,
            input: Some(input.clone()),
            label,
            icon,
            bottom_line: bottom_line.clone(),
            helper_text,
        };
        let input_foundation = InputFoundation::new(WebInputAdapter::new(input));
        let adapter = WebTextFieldAdapter::new(elements, Some(input_foundation));

        let foundation = TextFieldFoundation::new(adapter);
        foundation.borrow_mut().init();
        tracing::debug!("text field mounted");

        Ok(Self {
            foundation,
            bottom_line,
            transition_end,
        })
    }

    fn detach_transition_end(&mut self) {
        if let (Some(line), Some(closure)) = (&self.bottom_line, self.transition_end.take()) {
            if let Err(err) = line.remove_event_listener_with_callback(
                EventType::TransitionEnd.as_str(),
                closure.as_ref().unchecked_ref(),
            ) {
                tracing::warn!(error = ?err, "failed to detach transitionend");
            }
        }
    }
}

/// The element named by the input's `aria-controls`.
fn helper_text_for(input: &HtmlInputElement) -> Option<Element> {
    let id = input.get_attribute(strings::ARIA_CONTROLS)?;
    input.owner_document()?.get_element_by_id(&id)
}

/// Forward bottom line `transitionend` events to a bottom line foundation.
fn watch_bottom_line_transitions(
    line: &Element,
) -> Result<Closure<dyn FnMut(TransitionEvent)>, MountError> {
    let target = line.clone();
    let closure = Closure::<dyn FnMut(TransitionEvent)>::new(move |event: TransitionEvent| {
        BottomLineFoundation::new(WebBottomLineAdapter::new(target.clone()))
            .handle_transition_end(&event.property_name());
    });
    line.add_event_listener_with_callback(
        EventType::TransitionEnd.as_str(),
        closure.as_ref().unchecked_ref(),
    )?;
    Ok(closure)
}
