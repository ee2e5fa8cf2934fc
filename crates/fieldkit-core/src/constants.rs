//! CSS class names and attribute strings shared by the text field controllers.
//!
//! The class names follow the `mdc-text-field` stylesheet contract, so hosts
//! can pair these controllers with the stock Material text field CSS.

/// State classes toggled on the text field root, label, helper text and icon.
pub mod css_classes {
    /// Root element class.
    pub const ROOT: &str = "mdc-text-field";
    /// Added once the controller has taken over the markup.
    pub const UPGRADED: &str = "mdc-text-field--upgraded";
    /// Root is disabled.
    pub const DISABLED: &str = "mdc-text-field--disabled";
    /// Root has focus.
    pub const FOCUSED: &str = "mdc-text-field--focused";
    /// Root holds an invalid value.
    pub const INVALID: &str = "mdc-text-field--invalid";
    /// Helper text stays visible regardless of focus.
    pub const HELPER_TEXT_PERSISTENT: &str = "mdc-text-field-helper-text--persistent";
    /// Helper text doubles as the validation message.
    pub const HELPER_TEXT_VALIDATION_MSG: &str = "mdc-text-field-helper-text--validation-msg";
    /// Label floats above the input.
    pub const LABEL_FLOAT_ABOVE: &str = "mdc-text-field__label--float-above";
    /// Label shake animation.
    pub const LABEL_SHAKE: &str = "mdc-text-field__label--shake";
    /// Leading or trailing icon.
    pub const TEXT_FIELD_ICON: &str = "mdc-text-field__icon";
}

/// Attribute names, values and selectors.
pub mod strings {
    /// Hides helper text from assistive technology.
    pub const ARIA_HIDDEN: &str = "aria-hidden";
    /// Links the input to its helper text element id.
    pub const ARIA_CONTROLS: &str = "aria-controls";
    /// Role attribute name.
    pub const ROLE: &str = "role";
    /// Role value that makes assistive technology announce the helper text.
    pub const ROLE_ALERT: &str = "alert";
    /// Icon tab-order attribute.
    pub const TABINDEX: &str = "tabindex";
    /// Tab index of a focusable icon.
    pub const TABINDEX_FOCUSABLE: &str = "0";
    /// Tab index of an icon removed from the tab order.
    pub const TABINDEX_UNFOCUSABLE: &str = "-1";
    /// Custom event emitted when the icon is activated.
    pub const ICON_EVENT: &str = "MDCTextField:icon";
    pub const INPUT_SELECTOR: &str = ".mdc-text-field__input";
    pub const LABEL_SELECTOR: &str = ".mdc-text-field__label";
    pub const ICON_SELECTOR: &str = ".mdc-text-field__icon";
    pub const BOTTOM_LINE_SELECTOR: &str = ".mdc-text-field__bottom-line";
}

/// Event names the input foundation listens on.
pub mod input {
    pub const FOCUS_EVENT: &str = "focus";
    pub const BLUR_EVENT: &str = "blur";
    /// Pointer press used to anchor the underline animation.
    pub const PRESSED_EVENT: &str = "mousedown";
}

/// Classes and events of the bottom line (underline).
pub mod bottom_line {
    pub const BOTTOM_LINE: &str = "mdc-text-field__bottom-line";
    pub const BOTTOM_LINE_ACTIVE: &str = "mdc-text-field__bottom-line--active";
    /// Emitted once the bottom line fade-out has finished.
    pub const ANIMATION_END_EVENT: &str = "MDCTextFieldBottomLine:animation-end";
    pub const STYLE_ATTR: &str = "style";
    /// The transition whose end signals a finished fade.
    pub const OPACITY_PROPERTY: &str = "opacity";
}
