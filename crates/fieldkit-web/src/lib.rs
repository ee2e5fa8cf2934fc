//! Hosts for fieldkit text fields.
//!
//! - [`headless`]: an in-memory document for tests and server-side use
//! - `browser` (wasm32 only): adapters over `web_sys` elements and a
//!   `#[wasm_bindgen]` component
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { TextField } from './fieldkit_web.js';
//!
//! await init();
//! const field = new TextField(document.querySelector('.mdc-text-field'));
//! field.set_disabled(true);
//! ```

pub mod headless;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use headless::{Document, Element, ElementId, FieldElements, HeadlessTextField, SharedDocument};

#[cfg(target_arch = "wasm32")]
pub use browser::{MountError, TextField};
