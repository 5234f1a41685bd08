//! Arena document tree hosting live `<input>` elements.
//!
//! [`Document`] owns the element tree (parent links, tag names), the focused
//! element, and one [`input_core::InputState`] per `<input>`. It implements
//! [`input_core::InputStore`] with the browser's radio-group rule layered on
//! top: a radio becoming checked unchecks the other radios that share its
//! tree, `name` and form owner.

mod document;
mod error;
mod radio;
mod types;

pub use document::Document;
pub use error::DomError;
pub use types::NodeId;
