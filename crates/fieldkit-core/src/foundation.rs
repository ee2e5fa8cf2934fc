//! The text field controller.
//!
//! [`TextFieldFoundation`] reacts to focus, blur, pointer, click, keydown and
//! underline animation events by toggling state classes through its
//! [`TextFieldAdapter`]. It owns no rendering and only two flags of its own.

use crate::adapter::TextFieldAdapter;
use crate::constants::{css_classes, strings};
use crate::event::{DomEvent, EventHandler, EventType};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

const ENTER_KEY: &str = "Enter";
const ENTER_KEY_CODE: u32 = 13;

/// Root-level events routed to the interaction handler.
const INTERACTION_EVENTS: [EventType; 2] = [EventType::Click, EventType::KeyDown];

/// Callbacks bound to one controller instance.
///
/// Created once in [`TextFieldFoundation::new`] and reused for both
/// registration and deregistration.
struct BoundHandlers<T> {
    input_focus: EventHandler<T>,
    input_blur: EventHandler<T>,
    set_pointer_x_offset: EventHandler<T>,
    text_field_interaction: EventHandler<T>,
    bottom_line_animation_end: EventHandler<T>,
}

/// Focus, label, underline, helper-text and validity logic of a text field.
pub struct TextFieldFoundation<A: TextFieldAdapter> {
    adapter: A,
    is_focused: bool,
    use_custom_validity_checking: bool,
    handlers: BoundHandlers<A::Target>,
}

impl<A: TextFieldAdapter + 'static> TextFieldFoundation<A> {
    /// Create a controller driving `adapter`.
    ///
    /// The controller is returned shared because its bound event handlers
    /// refer back to it. Handlers hold a weak reference: once the last `Rc`
    /// is dropped, late events are ignored.
    pub fn new(adapter: A) -> Rc<RefCell<Self>> {
        Rc::new_cyclic(|weak| {
            RefCell::new(Self {
                adapter,
                is_focused: false,
                use_custom_validity_checking: false,
                handlers: BoundHandlers {
                    input_focus: bind(weak, "input_focus", |this, _| this.activate_focus()),
                    input_blur: bind(weak, "input_blur", |this, _| this.deactivate_focus()),
                    set_pointer_x_offset: bind(weak, "set_pointer_x_offset", |this, evt| {
                        this.set_bottom_line_transform_origin(evt);
                    }),
                    text_field_interaction: bind(weak, "text_field_interaction", |this, evt| {
                        this.handle_text_field_interaction(evt);
                    }),
                    bottom_line_animation_end: bind(weak, "bottom_line_animation_end", |this, _| {
                        this.handle_bottom_line_animation_end();
                    }),
                },
            })
        })
    }
}

/// Wrap `f` into a handler that upgrades `weak` and runs against the
/// controller.
fn bind<A, F>(
    weak: &Weak<RefCell<TextFieldFoundation<A>>>,
    name: &'static str,
    f: F,
) -> EventHandler<A::Target>
where
    A: TextFieldAdapter + 'static,
    F: Fn(&mut TextFieldFoundation<A>, &DomEvent<A::Target>) + 'static,
{
    let weak = weak.clone();
    Rc::new(move |evt: &DomEvent<A::Target>| {
        let Some(foundation) = weak.upgrade() else {
            return;
        };
        let Ok(mut this) = foundation.try_borrow_mut() else {
            tracing::warn!(
                handler = name,
                event = %evt.event_type,
                "text field is busy, dropping re-entrant event"
            );
            return;
        };
        f(&mut this, evt);
        let deferred = this.adapter.take_deferred();
        drop(this);
        for task in deferred {
            task();
        }
    })
}

impl<A: TextFieldAdapter> TextFieldFoundation<A> {
    /// Upgrade the markup and start listening for events.
    pub fn init(&mut self) {
        self.adapter.add_class(css_classes::UPGRADED);
        // Keep the label clear of a pre-filled value.
        if self.input_has_value() {
            self.adapter.add_class_to_label(css_classes::LABEL_FLOAT_ABOVE);
        }

        self.adapter.register_input_event_handler(EventType::Focus, &self.handlers.input_focus);
        self.adapter.register_input_event_handler(EventType::Blur, &self.handlers.input_blur);
        self.adapter.register_input_event_handler(
            EventType::MouseDown,
            &self.handlers.set_pointer_x_offset,
        );
        for event_type in INTERACTION_EVENTS {
            self.adapter.register_text_field_interaction_handler(
                event_type,
                &self.handlers.text_field_interaction,
            );
        }
        self.adapter.register_bottom_line_event_handler(
            EventType::BottomLineAnimationEnd,
            &self.handlers.bottom_line_animation_end,
        );

        tracing::debug!("text field initialized");
    }

    /// Undo [`init`](Self::init).
    pub fn destroy(&mut self) {
        self.adapter.remove_class(css_classes::UPGRADED);

        self.adapter.deregister_input_event_handler(EventType::Focus, &self.handlers.input_focus);
        self.adapter.deregister_input_event_handler(EventType::Blur, &self.handlers.input_blur);
        self.adapter.deregister_input_event_handler(
            EventType::MouseDown,
            &self.handlers.set_pointer_x_offset,
        );
        for event_type in INTERACTION_EVENTS {
            self.adapter.deregister_text_field_interaction_handler(
                event_type,
                &self.handlers.text_field_interaction,
            );
        }
        self.adapter.deregister_bottom_line_event_handler(
            EventType::BottomLineAnimationEnd,
            &self.handlers.bottom_line_animation_end,
        );

        tracing::debug!("text field destroyed");
    }

    /// Handle a click or keydown anywhere in the text field.
    pub fn handle_text_field_interaction(&mut self, evt: &DomEvent<A::Target>) {
        if self.is_disabled() {
            return;
        }

        if let Some(input) = self.adapter.input_foundation_mut() {
            input.set_received_user_input(true);
        }

        let target_is_icon = self
            .adapter
            .event_target_has_class(&evt.target, css_classes::TEXT_FIELD_ICON);
        let event_triggers_notification = evt.event_type == EventType::Click
            || evt.key.as_deref() == Some(ENTER_KEY)
            || evt.key_code == Some(ENTER_KEY_CODE);

        tracing::trace!(
            event = %evt.event_type,
            target_is_icon,
            event_triggers_notification,
            "text field interaction"
        );

        if target_is_icon && event_triggers_notification {
            self.adapter.notify_icon_action();
        }
    }

    /// Enter the focused state.
    pub fn activate_focus(&mut self) {
        self.adapter.add_class(css_classes::FOCUSED);
        if let Some(bottom_line) = self.adapter.bottom_line_foundation() {
            bottom_line.activate();
        }
        self.adapter.add_class_to_label(css_classes::LABEL_FLOAT_ABOVE);
        self.adapter.remove_class_from_label(css_classes::LABEL_SHAKE);
        self.show_helper_text();
        self.is_focused = true;

        tracing::debug!("text field focused");
    }

    /// Anchor the underline animation at the pointer position of `evt`.
    pub fn set_bottom_line_transform_origin(&mut self, evt: &DomEvent<A::Target>) {
        if let Some(bottom_line) = self.adapter.bottom_line_foundation() {
            bottom_line.set_transform_origin(evt.offset_x);
        }
    }

    /// Finish work that had to wait for the underline fade-out.
    pub fn handle_bottom_line_animation_end(&mut self) {
        // The underline must be fully transparent before its active class
        // goes, otherwise it visibly scales down first.
        if self.is_focused {
            return;
        }
        if let Some(bottom_line) = self.adapter.bottom_line_foundation() {
            bottom_line.deactivate();
        }
    }

    /// Leave the focused state.
    pub fn deactivate_focus(&mut self) {
        self.is_focused = false;
        self.adapter.remove_class(css_classes::FOCUSED);
        self.adapter.remove_class_from_label(css_classes::LABEL_SHAKE);

        let (has_value, is_bad_input) = self
            .adapter
            .input_foundation()
            .map_or((false, false), |input| {
                (!input.value().is_empty(), input.is_bad_input())
            });
        if !has_value && !is_bad_input {
            self.adapter.remove_class_from_label(css_classes::LABEL_FLOAT_ABOVE);
        }

        if !self.use_custom_validity_checking {
            let is_valid = self
                .adapter
                .input_foundation()
                .map_or(true, |input| input.check_validity());
            self.change_validity(is_valid);
        }

        tracing::debug!("text field blurred");
    }

    /// Whether the input is disabled.
    pub fn is_disabled(&self) -> bool {
        self.adapter
            .input_foundation()
            .is_some_and(|input| input.is_disabled())
    }

    /// Enable or disable the text field.
    pub fn set_disabled(&mut self, disabled: bool) {
        if let Some(input) = self.adapter.input_foundation_mut() {
            input.set_disabled(disabled);
        }
        if disabled {
            self.adapter.add_class(css_classes::DISABLED);
            self.adapter.remove_class(css_classes::INVALID);
            self.adapter.set_icon_attr(strings::TABINDEX, strings::TABINDEX_UNFOCUSABLE);
        } else {
            self.adapter.remove_class(css_classes::DISABLED);
            self.adapter.set_icon_attr(strings::TABINDEX, strings::TABINDEX_FOCUSABLE);
        }
    }

    /// Assert validity from outside.
    ///
    /// From the first call on, blur no longer derives validity from the
    /// input.
    pub fn set_valid(&mut self, is_valid: bool) {
        self.use_custom_validity_checking = true;
        self.change_validity(is_valid);
    }

    /// Whether the field currently has focus.
    pub const fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Whether validity is asserted externally via [`set_valid`](Self::set_valid).
    pub const fn uses_custom_validity(&self) -> bool {
        self.use_custom_validity_checking
    }

    /// The adapter.
    pub const fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the adapter.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn input_has_value(&self) -> bool {
        self.adapter
            .input_foundation()
            .is_some_and(|input| !input.value().is_empty())
    }

    fn change_validity(&mut self, is_valid: bool) {
        if is_valid {
            self.adapter.remove_class(css_classes::INVALID);
        } else {
            self.adapter.add_class_to_label(css_classes::LABEL_SHAKE);
            self.adapter.add_class(css_classes::INVALID);
        }
        tracing::trace!(is_valid, "text field validity changed");
        self.update_helper_text(is_valid);
    }

    fn update_helper_text(&mut self, is_valid: bool) {
        let helper_text_is_persistent = self
            .adapter
            .helper_text_has_class(css_classes::HELPER_TEXT_PERSISTENT);
        let helper_text_is_validation_msg = self
            .adapter
            .helper_text_has_class(css_classes::HELPER_TEXT_VALIDATION_MSG);
        let validation_msg_needs_display = helper_text_is_validation_msg && !is_valid;

        if validation_msg_needs_display {
            self.adapter.set_helper_text_attr(strings::ROLE, strings::ROLE_ALERT);
        } else {
            self.adapter.remove_helper_text_attr(strings::ROLE);
        }

        if helper_text_is_persistent || validation_msg_needs_display {
            return;
        }
        self.hide_helper_text();
    }

    fn show_helper_text(&mut self) {
        self.adapter.remove_helper_text_attr(strings::ARIA_HIDDEN);
    }

    fn hide_helper_text(&mut self) {
        self.adapter.set_helper_text_attr(strings::ARIA_HIDDEN, "true");
    }
}

impl<A: TextFieldAdapter> fmt::Debug for TextFieldFoundation<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFieldFoundation")
            .field("is_focused", &self.is_focused)
            .field(
                "use_custom_validity_checking",
                &self.use_custom_validity_checking,
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{InputController, UnderlineController};
    use std::collections::{BTreeMap, BTreeSet};

    type Target = &'static str;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Host {
        Root,
        Input,
        BottomLine,
    }

    #[derive(Debug, Default)]
    struct MockInput {
        value: String,
        disabled: bool,
        bad_input: bool,
        valid: bool,
        received_user_input: bool,
        validity_checks: std::cell::Cell<usize>,
    }

    impl InputController for MockInput {
        fn value(&self) -> String {
            self.value.clone()
        }
        fn is_disabled(&self) -> bool {
            self.disabled
        }
        fn set_disabled(&mut self, disabled: bool) {
            self.disabled = disabled;
        }
        fn is_bad_input(&self) -> bool {
            self.bad_input
        }
        fn check_validity(&self) -> bool {
            self.validity_checks.set(self.validity_checks.get() + 1);
            self.valid
        }
        fn set_received_user_input(&mut self, received: bool) {
            self.received_user_input = received;
        }
    }

    #[derive(Debug, Default)]
    struct MockUnderline {
        active: bool,
        activations: usize,
        deactivations: usize,
        origin: Option<f64>,
    }

    impl UnderlineController for MockUnderline {
        fn activate(&mut self) {
            self.active = true;
            self.activations += 1;
        }
        fn deactivate(&mut self) {
            self.active = false;
            self.deactivations += 1;
        }
        fn set_transform_origin(&mut self, offset_x: f64) {
            self.origin = Some(offset_x);
        }
    }

    /// Adapter that records resulting element state and registrations.
    #[derive(Default)]
    struct RecordingAdapter {
        root_classes: BTreeSet<String>,
        label_classes: BTreeSet<String>,
        helper_classes: BTreeSet<String>,
        helper_attrs: BTreeMap<String, String>,
        icon_attrs: BTreeMap<String, String>,
        icon_actions: usize,
        listeners: Vec<(Host, EventType, EventHandler<Target>)>,
        input: Option<MockInput>,
        underline: Option<MockUnderline>,
    }

    impl RecordingAdapter {
        fn with_input(value: &str) -> Self {
            Self {
                input: Some(MockInput {
                    value: value.to_string(),
                    valid: true,
                    ..MockInput::default()
                }),
                underline: Some(MockUnderline::default()),
                ..Self::default()
            }
        }

        fn listen(&mut self, host: Host, ty: EventType, handler: &EventHandler<Target>) {
            self.listeners.push((host, ty, Rc::clone(handler)));
        }

        fn unlisten(&mut self, host: Host, ty: &EventType, handler: &EventHandler<Target>) {
            self.listeners
                .retain(|(h, t, l)| !(*h == host && t == ty && Rc::ptr_eq(l, handler)));
        }

        fn input(&self) -> &MockInput {
            self.input.as_ref().expect("input configured")
        }

        fn underline(&self) -> &MockUnderline {
            self.underline.as_ref().expect("underline configured")
        }
    }

    impl TextFieldAdapter for RecordingAdapter {
        type Target = Target;

        fn add_class(&mut self, class_name: &str) {
            self.root_classes.insert(class_name.to_string());
        }
        fn remove_class(&mut self, class_name: &str) {
            self.root_classes.remove(class_name);
        }
        fn add_class_to_label(&mut self, class_name: &str) {
            self.label_classes.insert(class_name.to_string());
        }
        fn remove_class_from_label(&mut self, class_name: &str) {
            self.label_classes.remove(class_name);
        }
        fn set_icon_attr(&mut self, name: &str, value: &str) {
            self.icon_attrs.insert(name.to_string(), value.to_string());
        }
        fn event_target_has_class(&self, target: &Target, class_name: &str) -> bool {
            *target == "icon" && class_name == css_classes::TEXT_FIELD_ICON
        }
        fn register_text_field_interaction_handler(
            &mut self,
            event_type: EventType,
            handler: &EventHandler<Target>,
        ) {
            self.listen(Host::Root, event_type, handler);
        }
        fn deregister_text_field_interaction_handler(
            &mut self,
            event_type: EventType,
            handler: &EventHandler<Target>,
        ) {
            self.unlisten(Host::Root, &event_type, handler);
        }
        fn notify_icon_action(&mut self) {
            self.icon_actions += 1;
        }
        fn add_class_to_helper_text(&mut self, class_name: &str) {
            self.helper_classes.insert(class_name.to_string());
        }
        fn remove_class_from_helper_text(&mut self, class_name: &str) {
            self.helper_classes.remove(class_name);
        }
        fn helper_text_has_class(&self, class_name: &str) -> bool {
            self.helper_classes.contains(class_name)
        }
        fn register_input_event_handler(
            &mut self,
            event_type: EventType,
            handler: &EventHandler<Target>,
        ) {
            self.listen(Host::Input, event_type, handler);
        }
        fn deregister_input_event_handler(
            &mut self,
            event_type: EventType,
            handler: &EventHandler<Target>,
        ) {
            self.unlisten(Host::Input, &event_type, handler);
        }
        fn register_bottom_line_event_handler(
            &mut self,
            event_type: EventType,
            handler: &EventHandler<Target>,
        ) {
            self.listen(Host::BottomLine, event_type, handler);
        }
        fn deregister_bottom_line_event_handler(
            &mut self,
            event_type: EventType,
            handler: &EventHandler<Target>,
        ) {
            self.unlisten(Host::BottomLine, &event_type, handler);
        }
        fn set_helper_text_attr(&mut self, name: &str, value: &str) {
            self.helper_attrs.insert(name.to_string(), value.to_string());
        }
        fn remove_helper_text_attr(&mut self, name: &str) {
            self.helper_attrs.remove(name);
        }
        fn input_foundation(&self) -> Option<&dyn InputController> {
            self.input.as_ref().map(|i| i as &dyn InputController)
        }
        fn input_foundation_mut(&mut self) -> Option<&mut dyn InputController> {
            self.input.as_mut().map(|i| i as &mut dyn InputController)
        }
        fn bottom_line_foundation(&mut self) -> Option<&mut dyn UnderlineController> {
            self.underline
                .as_mut()
                .map(|u| u as &mut dyn UnderlineController)
        }
    }

    type Shared = Rc<RefCell<TextFieldFoundation<RecordingAdapter>>>;

    fn setup(adapter: RecordingAdapter) -> Shared {
        let foundation = TextFieldFoundation::new(adapter);
        foundation.borrow_mut().init();
        foundation
    }

    /// Deliver `evt` through the registered listeners, like a DOM would.
    fn fire(foundation: &Shared, host: Host, evt: &DomEvent<Target>) {
        let handlers: Vec<EventHandler<Target>> = foundation
            .borrow()
            .adapter()
            .listeners
            .iter()
            .filter(|(h, t, _)| *h == host && *t == evt.event_type)
            .map(|(_, _, l)| Rc::clone(l))
            .collect();
        for handler in handlers {
            handler(evt);
        }
    }

    fn focus(foundation: &Shared) {
        fire(foundation, Host::Input, &DomEvent::new(EventType::Focus, "input"));
    }

    fn blur(foundation: &Shared) {
        fire(foundation, Host::Input, &DomEvent::new(EventType::Blur, "input"));
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    #[test]
    fn test_init_adds_upgraded_class() {
        let f = setup(RecordingAdapter::with_input(""));
        let f = f.borrow();
        assert!(f.adapter().root_classes.contains(css_classes::UPGRADED));
        assert!(!f
            .adapter()
            .label_classes
            .contains(css_classes::LABEL_FLOAT_ABOVE));
    }

    #[test]
    fn test_init_floats_label_for_prefilled_value() {
        let f = setup(RecordingAdapter::with_input("x"));
        assert!(f
            .borrow()
            .adapter()
            .label_classes
            .contains(css_classes::LABEL_FLOAT_ABOVE));
    }

    #[test]
    fn test_init_registers_all_listeners() {
        let f = setup(RecordingAdapter::with_input(""));
        let f = f.borrow();
        let registered: Vec<(Host, EventType)> = f
            .adapter()
            .listeners
            .iter()
            .map(|(h, t, _)| (*h, t.clone()))
            .collect();
        assert_eq!(
            registered,
            vec![
                (Host::Input, EventType::Focus),
                (Host::Input, EventType::Blur),
                (Host::Input, EventType::MouseDown),
                (Host::Root, EventType::Click),
                (Host::Root, EventType::KeyDown),
                (Host::BottomLine, EventType::BottomLineAnimationEnd),
            ]
        );
    }

    #[test]
    fn test_click_and_keydown_share_one_handler() {
        let f = setup(RecordingAdapter::with_input(""));
        let f = f.borrow();
        let root: Vec<&EventHandler<Target>> = f
            .adapter()
            .listeners
            .iter()
            .filter(|(h, _, _)| *h == Host::Root)
            .map(|(_, _, l)| l)
            .collect();
        assert_eq!(root.len(), 2);
        assert!(Rc::ptr_eq(root[0], root[1]));
    }

    #[test]
    fn test_destroy_removes_exactly_what_init_added() {
        let f = setup(RecordingAdapter::with_input(""));
        f.borrow_mut().destroy();
        let f = f.borrow();
        assert!(f.adapter().listeners.is_empty());
        assert!(!f.adapter().root_classes.contains(css_classes::UPGRADED));
    }

    #[test]
    fn test_events_after_destroy_do_nothing() {
        let f = setup(RecordingAdapter::with_input(""));
        f.borrow_mut().destroy();
        focus(&f);
        assert!(!f.borrow().is_focused());
    }

    #[test]
    fn test_destroy_without_init_is_harmless() {
        let f = TextFieldFoundation::new(RecordingAdapter::with_input(""));
        f.borrow_mut().destroy();
        assert!(f.borrow().adapter().listeners.is_empty());
    }

    #[test]
    fn test_handler_outliving_foundation_is_noop() {
        let f = setup(RecordingAdapter::with_input(""));
        let handler = Rc::clone(&f.borrow().adapter().listeners[0].2);
        drop(f);
        handler(&DomEvent::new(EventType::Focus, "input"));
    }

    #[test]
    fn test_reentrant_event_is_dropped() {
        let f = setup(RecordingAdapter::with_input(""));
        let handler = Rc::clone(&f.borrow().adapter().listeners[0].2);
        let guard = f.borrow_mut();
        handler(&DomEvent::new(EventType::Focus, "input"));
        assert!(!guard.is_focused());
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    #[test]
    fn test_interaction_marks_received_user_input() {
        let f = setup(RecordingAdapter::with_input(""));
        fire(&f, Host::Root, &DomEvent::click("root"));
        assert!(f.borrow().adapter().input().received_user_input);
        assert_eq!(f.borrow().adapter().icon_actions, 0);
    }

    #[test]
    fn test_icon_click_notifies_once() {
        let f = setup(RecordingAdapter::with_input(""));
        fire(&f, Host::Root, &DomEvent::click("icon"));
        assert_eq!(f.borrow().adapter().icon_actions, 1);
    }

    #[test]
    fn test_icon_enter_key_notifies() {
        let f = setup(RecordingAdapter::with_input(""));
        fire(&f, Host::Root, &DomEvent::key_down("icon", "Enter", None));
        assert_eq!(f.borrow().adapter().icon_actions, 1);
    }

    #[test]
    fn test_icon_legacy_key_code_notifies() {
        let f = setup(RecordingAdapter::with_input(""));
        fire(&f, Host::Root, &DomEvent::key_down("icon", "", Some(13)));
        assert_eq!(f.borrow().adapter().icon_actions, 1);
    }

    #[test]
    fn test_icon_other_key_does_not_notify() {
        let f = setup(RecordingAdapter::with_input(""));
        fire(&f, Host::Root, &DomEvent::key_down("icon", "a", Some(65)));
        assert_eq!(f.borrow().adapter().icon_actions, 0);
        assert!(f.borrow().adapter().input().received_user_input);
    }

    #[test]
    fn test_disabled_interaction_short_circuits() {
        let mut adapter = RecordingAdapter::with_input("");
        adapter.input.as_mut().expect("input").disabled = true;
        let f = setup(adapter);
        fire(&f, Host::Root, &DomEvent::click("icon"));
        let f = f.borrow();
        assert_eq!(f.adapter().icon_actions, 0);
        assert!(!f.adapter().input().received_user_input);
    }

    // =========================================================================
    // Focus
    // =========================================================================

    #[test]
    fn test_activate_focus() {
        let f = setup(RecordingAdapter::with_input(""));
        f.borrow_mut().adapter_mut().add_class_to_label(css_classes::LABEL_SHAKE);
        f.borrow_mut()
            .adapter_mut()
            .set_helper_text_attr(strings::ARIA_HIDDEN, "true");
        focus(&f);

        let f = f.borrow();
        assert!(f.is_focused());
        assert!(f.adapter().root_classes.contains(css_classes::FOCUSED));
        assert!(f
            .adapter()
            .label_classes
            .contains(css_classes::LABEL_FLOAT_ABOVE));
        assert!(!f.adapter().label_classes.contains(css_classes::LABEL_SHAKE));
        assert!(!f.adapter().helper_attrs.contains_key(strings::ARIA_HIDDEN));
        assert_eq!(f.adapter().underline().activations, 1);
    }

    #[test]
    fn test_activate_focus_without_underline() {
        let mut adapter = RecordingAdapter::with_input("");
        adapter.underline = None;
        let f = setup(adapter);
        focus(&f);
        assert!(f.borrow().is_focused());
    }

    #[test]
    fn test_blur_with_empty_input_unfloats_label() {
        let f = setup(RecordingAdapter::with_input(""));
        focus(&f);
        blur(&f);
        let f = f.borrow();
        assert!(!f.is_focused());
        assert!(!f.adapter().root_classes.contains(css_classes::FOCUSED));
        assert!(!f
            .adapter()
            .label_classes
            .contains(css_classes::LABEL_FLOAT_ABOVE));
    }

    #[test]
    fn test_blur_with_value_keeps_label_floated() {
        let f = setup(RecordingAdapter::with_input("hello"));
        focus(&f);
        blur(&f);
        assert!(f
            .borrow()
            .adapter()
            .label_classes
            .contains(css_classes::LABEL_FLOAT_ABOVE));
    }

    #[test]
    fn test_blur_with_bad_input_keeps_label_floated() {
        let mut adapter = RecordingAdapter::with_input("");
        adapter.input.as_mut().expect("input").bad_input = true;
        let f = setup(adapter);
        focus(&f);
        blur(&f);
        assert!(f
            .borrow()
            .adapter()
            .label_classes
            .contains(css_classes::LABEL_FLOAT_ABOVE));
    }

    #[test]
    fn test_blur_invalid_input_adds_invalid_and_shake() {
        let mut adapter = RecordingAdapter::with_input("");
        adapter.input.as_mut().expect("input").valid = false;
        let f = setup(adapter);
        focus(&f);
        blur(&f);
        let f = f.borrow();
        assert!(f.adapter().root_classes.contains(css_classes::INVALID));
        assert!(f.adapter().label_classes.contains(css_classes::LABEL_SHAKE));
    }

    #[test]
    fn test_blur_valid_input_removes_invalid() {
        let f = setup(RecordingAdapter::with_input("ok"));
        f.borrow_mut().adapter_mut().add_class(css_classes::INVALID);
        focus(&f);
        blur(&f);
        assert!(!f
            .borrow()
            .adapter()
            .root_classes
            .contains(css_classes::INVALID));
    }

    #[test]
    fn test_refocus_cancels_shake() {
        let mut adapter = RecordingAdapter::with_input("");
        adapter.input.as_mut().expect("input").valid = false;
        let f = setup(adapter);
        focus(&f);
        blur(&f);
        focus(&f);
        assert!(!f
            .borrow()
            .adapter()
            .label_classes
            .contains(css_classes::LABEL_SHAKE));
    }

    #[test]
    fn test_pointer_press_sets_transform_origin() {
        let f = setup(RecordingAdapter::with_input(""));
        fire(&f, Host::Input, &DomEvent::pointer_down("input", 37.0));
        assert_eq!(f.borrow().adapter().underline().origin, Some(37.0));
    }

    #[test]
    fn test_animation_end_while_unfocused_deactivates_underline() {
        let f = setup(RecordingAdapter::with_input(""));
        focus(&f);
        blur(&f);
        fire(
            &f,
            Host::BottomLine,
            &DomEvent::new(EventType::BottomLineAnimationEnd, "bottom-line"),
        );
        let f = f.borrow();
        assert_eq!(f.adapter().underline().deactivations, 1);
        assert!(!f.adapter().underline().active);
    }

    #[test]
    fn test_animation_end_while_focused_is_noop() {
        let f = setup(RecordingAdapter::with_input(""));
        focus(&f);
        f.borrow_mut().handle_bottom_line_animation_end();
        let f = f.borrow();
        assert_eq!(f.adapter().underline().deactivations, 0);
        assert!(f.adapter().underline().active);
    }

    // =========================================================================
    // Validity and helper text
    // =========================================================================

    #[test]
    fn test_set_valid_suppresses_blur_validation() {
        let mut adapter = RecordingAdapter::with_input("");
        adapter.input.as_mut().expect("input").valid = false;
        let f = setup(adapter);
        f.borrow_mut().set_valid(true);
        focus(&f);
        blur(&f);
        let f = f.borrow();
        assert!(f.uses_custom_validity());
        assert_eq!(f.adapter().input().validity_checks.get(), 0);
        assert!(!f.adapter().root_classes.contains(css_classes::INVALID));
    }

    #[test]
    fn test_set_valid_false_persists_across_blur() {
        let f = setup(RecordingAdapter::with_input("fine"));
        f.borrow_mut().set_valid(false);
        focus(&f);
        blur(&f);
        let f = f.borrow();
        assert!(f.adapter().root_classes.contains(css_classes::INVALID));
        assert!(f.uses_custom_validity());
    }

    #[test]
    fn test_validation_message_gets_alert_role() {
        let mut adapter = RecordingAdapter::with_input("");
        adapter
            .helper_classes
            .insert(css_classes::HELPER_TEXT_VALIDATION_MSG.to_string());
        let f = setup(adapter);
        f.borrow_mut().set_valid(false);
        let f = f.borrow();
        assert_eq!(
            f.adapter().helper_attrs.get(strings::ROLE).map(String::as_str),
            Some(strings::ROLE_ALERT)
        );
        assert!(!f.adapter().helper_attrs.contains_key(strings::ARIA_HIDDEN));
    }

    #[test]
    fn test_validation_message_role_removed_when_valid() {
        let mut adapter = RecordingAdapter::with_input("");
        adapter
            .helper_classes
            .insert(css_classes::HELPER_TEXT_VALIDATION_MSG.to_string());
        let f = setup(adapter);
        f.borrow_mut().set_valid(false);
        f.borrow_mut().set_valid(true);
        let f = f.borrow();
        assert!(!f.adapter().helper_attrs.contains_key(strings::ROLE));
        assert_eq!(
            f.adapter()
                .helper_attrs
                .get(strings::ARIA_HIDDEN)
                .map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn test_plain_helper_text_never_gets_alert_role() {
        let f = setup(RecordingAdapter::with_input(""));
        f.borrow_mut().set_valid(false);
        let f = f.borrow();
        assert!(!f.adapter().helper_attrs.contains_key(strings::ROLE));
        assert!(f.adapter().helper_attrs.contains_key(strings::ARIA_HIDDEN));
    }

    #[test]
    fn test_persistent_helper_text_stays_visible() {
        let mut adapter = RecordingAdapter::with_input("");
        adapter
            .helper_classes
            .insert(css_classes::HELPER_TEXT_PERSISTENT.to_string());
        let f = setup(adapter);
        f.borrow_mut().set_valid(true);
        assert!(!f
            .borrow()
            .adapter()
            .helper_attrs
            .contains_key(strings::ARIA_HIDDEN));
    }

    // =========================================================================
    // Disabled
    // =========================================================================

    #[test]
    fn test_set_disabled_true() {
        let f = setup(RecordingAdapter::with_input(""));
        f.borrow_mut().adapter_mut().add_class(css_classes::INVALID);
        f.borrow_mut().set_disabled(true);
        let f = f.borrow();
        assert!(f.is_disabled());
        assert!(f.adapter().root_classes.contains(css_classes::DISABLED));
        assert!(!f.adapter().root_classes.contains(css_classes::INVALID));
        assert_eq!(
            f.adapter().icon_attrs.get(strings::TABINDEX).map(String::as_str),
            Some("-1")
        );
    }

    #[test]
    fn test_set_disabled_false() {
        let f = setup(RecordingAdapter::with_input(""));
        f.borrow_mut().set_disabled(true);
        f.borrow_mut().set_disabled(false);
        let f = f.borrow();
        assert!(!f.is_disabled());
        assert!(!f.adapter().root_classes.contains(css_classes::DISABLED));
        assert_eq!(
            f.adapter().icon_attrs.get(strings::TABINDEX).map(String::as_str),
            Some("0")
        );
    }

    #[test]
    fn test_disabling_does_not_blur() {
        let f = setup(RecordingAdapter::with_input(""));
        focus(&f);
        f.borrow_mut().set_disabled(true);
        assert!(f.borrow().is_focused());
    }

    #[test]
    fn test_missing_input_reads_as_empty_and_enabled() {
        let adapter = RecordingAdapter {
            underline: Some(MockUnderline::default()),
            ..RecordingAdapter::default()
        };
        let f = setup(adapter);
        assert!(!f.borrow().is_disabled());
        focus(&f);
        blur(&f);
        let f = f.borrow();
        assert!(!f
            .adapter()
            .label_classes
            .contains(css_classes::LABEL_FLOAT_ABOVE));
        assert!(!f.adapter().root_classes.contains(css_classes::INVALID));
    }

    #[test]
    fn test_debug_shows_flags() {
        let f = setup(RecordingAdapter::with_input(""));
        let debug = format!("{:?}", f.borrow());
        assert!(debug.contains("is_focused: false"));
        assert!(debug.contains("use_custom_validity_checking: false"));
    }
}
