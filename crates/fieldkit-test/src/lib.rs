#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
//! Testing harness for fieldkit text fields.
//!
//! Drives a [`HeadlessTextField`](fieldkit_web::HeadlessTextField) through
//! user-level interactions and asserts on the resulting markup.
//!
//! ```
//! use fieldkit_core::constants::css_classes;
//! use fieldkit_test::{Harness, Part};
//!
//! let mut harness = Harness::new(&Default::default());
//! harness
//!     .focus()
//!     .assert_has_class(Part::Root, css_classes::FOCUSED);
//! harness
//!     .blur()
//!     .assert_no_class(Part::Root, css_classes::FOCUSED);
//! ```

mod harness;

pub use harness::{Harness, Part};
