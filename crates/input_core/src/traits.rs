//! Input store trait defining the write surface of input elements.
//!
//! A reconciler drives inputs exclusively through this trait, so it can run
//! against a bare [`InputValueStore`](crate::InputValueStore) in tests or
//! against a full document that layers radio-group behavior on top.
//!
//! # Design Principles
//!
//! - Uses `InputId` as the identifier type, keeping the trait tree-agnostic
//! - Writes to an unknown id are ignored; callers check existence through
//!   [`InputStore::input`] first

use crate::id::InputId;
use crate::state::{InputState, WrapperState};

/// Trait defining the input store interface.
///
/// # Integration Pattern
///
/// For document-based systems, convert node ids to `InputId` at the routing
/// boundary:
///
/// ```ignore
/// fn sync(node: dom::NodeId, store: &mut impl InputStore) {
///     let id = InputId::from(node);
///     store.set_checked(id, true);
/// }
/// ```
pub trait InputStore {
    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns the live state for this input, if any.
    fn input(&self, id: InputId) -> Option<&InputState>;

    /// Returns `true` if `id` is the currently focused element.
    fn is_active(&self, id: InputId) -> bool;

    // =========================================================================
    // Value
    // =========================================================================

    fn set_value(&mut self, id: InputId, value: String);

    fn set_default_value(&mut self, id: InputId, value: String);

    fn remove_value_attribute(&mut self, id: InputId);

    // =========================================================================
    // Checkbox/Radio
    // =========================================================================

    /// Set the `checked` property.
    ///
    /// Implementations that know about radio groups uncheck the other group
    /// members when a radio becomes checked.
    fn set_checked(&mut self, id: InputId, checked: bool);

    /// Set the `defaultChecked` property (the `checked` content attribute).
    fn set_default_checked(&mut self, id: InputId, checked: bool);

    // =========================================================================
    // Misc
    // =========================================================================

    fn set_name(&mut self, id: InputId, name: String);

    fn set_wrapper_state(&mut self, id: InputId, wrapper: WrapperState);
}

// =============================================================================
// Implementation for InputValueStore
// =============================================================================

impl InputStore for crate::store::InputValueStore {
    #[inline]
    fn input(&self, id: InputId) -> Option<&InputState> {
        self.get(id)
    }

    #[inline]
    fn is_active(&self, id: InputId) -> bool {
        self.focused() == Some(id)
    }

    fn set_value(&mut self, id: InputId, value: String) {
        if let Some(st) = self.get_mut(id) {
            st.set_value(value);
        }
    }

    fn set_default_value(&mut self, id: InputId, value: String) {
        if let Some(st) = self.get_mut(id) {
            st.set_default_value(value);
        }
    }

    fn remove_value_attribute(&mut self, id: InputId) {
        if let Some(st) = self.get_mut(id) {
            st.remove_value_attribute();
        }
    }

    fn set_checked(&mut self, id: InputId, checked: bool) {
        if let Some(st) = self.get_mut(id) {
            st.set_checked(checked);
        }
    }

    fn set_default_checked(&mut self, id: InputId, checked: bool) {
        if let Some(st) = self.get_mut(id) {
            st.set_default_checked(checked);
        }
    }

    fn set_name(&mut self, id: InputId, name: String) {
        if let Some(st) = self.get_mut(id) {
            st.set_name(name);
        }
    }

    fn set_wrapper_state(&mut self, id: InputId, wrapper: WrapperState) {
        if let Some(st) = self.get_mut(id) {
            st.set_wrapper(wrapper);
        }
    }
}
