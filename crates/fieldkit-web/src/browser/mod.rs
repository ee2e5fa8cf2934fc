//! Browser host: adapters over `web_sys` elements.

mod adapter;
mod component;
mod error;
pub mod events;

pub use adapter::{WebBottomLineAdapter, WebElements, WebInputAdapter, WebTextFieldAdapter};
pub use component::TextField;
pub use error::MountError;
