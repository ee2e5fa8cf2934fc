//! Core logic for fieldkit text fields.
//!
//! This crate decides *what* visual state a text field should be in and
//! leaves *how* it is rendered to an adapter:
//! - The controller: [`TextFieldFoundation`]
//! - Its capability boundary: [`TextFieldAdapter`]
//! - Sibling controllers: [`InputFoundation`] and [`BottomLineFoundation`]
//! - Events: [`DomEvent`], [`EventType`], [`EventHandler`]
//! - Constraint validation and configuration: [`validation`], [`TextFieldConfig`]

pub mod adapter;
pub mod bottom_line;
mod config;
pub mod constants;
mod error;
mod event;
mod foundation;
pub mod input;
pub mod validation;

pub use adapter::{DeferredTask, InputController, TextFieldAdapter, UnderlineController};
pub use bottom_line::{BottomLineAdapter, BottomLineFoundation};
pub use config::{ConstraintConfig, HelperTextConfig, PatternKind, TextFieldConfig};
pub use error::ConfigError;
pub use event::{DomEvent, EventHandler, EventType};
pub use foundation::TextFieldFoundation;
pub use input::{InputAdapter, InputFoundation};
pub use validation::{FieldValidator, ValidationResult, Validator};
