//! A minimal in-memory DOM: elements with classes and attributes, event
//! listeners keyed on handler identity, and dispatch with bubbling.

use fieldkit_core::{DomEvent, EventHandler, EventType};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// Handle to an element of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    /// Position in document order.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An element node.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Text content
    pub text: String,
    /// Input value
    pub value: String,
    /// Input disabled flag
    pub disabled: bool,
    /// Input holds unparseable content
    pub bad_input: bool,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    parent: Option<ElementId>,
}

impl Element {
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.contains(class_name)
    }

    pub fn add_class(&mut self, class_name: &str) {
        self.classes.insert(class_name.to_string());
    }

    pub fn remove_class(&mut self, class_name: &str) {
        self.classes.remove(class_name);
    }

    /// Classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub const fn parent(&self) -> Option<ElementId> {
        self.parent
    }
}

struct Listener {
    target: ElementId,
    event_type: EventType,
    handler: EventHandler<ElementId>,
}

/// Element arena plus listener registry.
#[derive(Default)]
pub struct Document {
    elements: Vec<Element>,
    listeners: Vec<Listener>,
}

/// A document shared between a text field's adapters and its host.
pub type SharedDocument = Rc<RefCell<Document>>;

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shared document.
    pub fn shared() -> SharedDocument {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Append a new element, optionally as a child of `parent`.
    pub fn create_element(&mut self, tag: &str, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            tag: tag.to_string(),
            parent,
            ..Element::default()
        });
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// Add a listener. Re-adding the same handler for the same event is a
    /// no-op, as in the DOM.
    pub fn add_event_listener(
        &mut self,
        target: ElementId,
        event_type: EventType,
        handler: &EventHandler<ElementId>,
    ) {
        if self.position(target, &event_type, handler).is_some() {
            return;
        }
        self.listeners.push(Listener {
            target,
            event_type,
            handler: Rc::clone(handler),
        });
    }

    /// Remove a listener previously added with the same handler. Unknown
    /// handlers are ignored.
    pub fn remove_event_listener(
        &mut self,
        target: ElementId,
        event_type: &EventType,
        handler: &EventHandler<ElementId>,
    ) {
        if let Some(pos) = self.position(target, event_type, handler) {
            self.listeners.remove(pos);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of listeners for `event_type` on `target`.
    pub fn listeners_on(&self, target: ElementId, event_type: &EventType) -> usize {
        self.listeners
            .iter()
            .filter(|l| l.target == target && l.event_type == *event_type)
            .count()
    }

    fn position(
        &self,
        target: ElementId,
        event_type: &EventType,
        handler: &EventHandler<ElementId>,
    ) -> Option<usize> {
        self.listeners.iter().position(|l| {
            l.target == target && l.event_type == *event_type && Rc::ptr_eq(&l.handler, handler)
        })
    }

    /// Target first, then ancestors for bubbling events.
    fn propagation_path(&self, target: ElementId, bubbles: bool) -> Vec<ElementId> {
        let mut path = vec![target];
        if bubbles {
            let mut current = self.get(target).and_then(Element::parent);
            while let Some(id) = current {
                path.push(id);
                current = self.get(id).and_then(Element::parent);
            }
        }
        path
    }

    /// Deliver `event` to the listeners on its propagation path.
    ///
    /// The document is not borrowed while handlers run, so they may freely
    /// read and mutate it. Returns the number of handlers invoked.
    pub fn dispatch(document: &SharedDocument, event: &DomEvent<ElementId>) -> usize {
        let handlers: Vec<EventHandler<ElementId>> = {
            let doc = document.borrow();
            let mut handlers = Vec::new();
            for node in doc.propagation_path(event.target, event.event_type.bubbles()) {
                handlers.extend(
                    doc.listeners
                        .iter()
                        .filter(|l| l.target == node && l.event_type == event.event_type)
                        .map(|l| Rc::clone(&l.handler)),
                );
            }
            handlers
        };

        tracing::trace!(
            event = %event.event_type,
            handlers = handlers.len(),
            "headless dispatch"
        );
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }
}
