//! Headless host: a text field living in an in-memory document.
//!
//! Useful for tests and for driving the controller outside a browser.

mod document;
mod field;

pub use document::{Document, Element, ElementId, SharedDocument};
pub use field::{
    FieldElements, HeadlessAdapter, HeadlessBottomLine, HeadlessInput, HeadlessTextField,
};
