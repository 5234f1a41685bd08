//! # input_core
//!
//! Live state layer for `<input>` elements.
//!
//! This crate models the parts of an input element that script can read and
//! write, following the HTML value/checkedness rules:
//! - [`InputId`]: A generic, opaque identifier for input elements
//! - [`InputState`]: value, value content attribute, checkedness, checked
//!   content attribute, dirty flags, `name` and `type`
//! - [`InputValueStore`]: a flat map of input states with a focused input
//! - [`InputStore`]: the write surface a reconciler drives
//! - [`Mutation`]: journal entry recorded for every write
//!
//! ## Design Principles
//!
//! The crate knows nothing about the document tree. Radio group exclusivity
//! needs tree and form-owner information, so it is layered on top by the
//! document that owns the inputs.
//!
//! ## Integration
//!
//! Document implementations convert their node ids at the boundary:
//! ```ignore
//! impl From<dom::NodeId> for InputId {
//!     fn from(id: dom::NodeId) -> Self {
//!         InputId::from_raw(id.0 as u64)
//!     }
//! }
//! ```

mod id;
mod mutation;
mod state;
mod store;
mod text;
mod traits;

pub use id::InputId;
pub use mutation::Mutation;
pub use state::{InputState, ValueMode, WrapperState, value_mode};
pub use store::InputValueStore;
pub use traits::InputStore;

pub use text::{filter_single_line, is_valid_floating_point_number, sanitize_value};
