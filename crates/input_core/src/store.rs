//! Central store for input element state.
//!
//! This store is tree-agnostic: it holds one [`InputState`] per input and
//! remembers which input has focus.

use crate::id::InputId;
use crate::state::InputState;
use std::collections::HashMap;

/// Flat map of input states.
///
/// # Example
///
/// ```
/// use input_core::{InputId, InputState, InputStore, InputValueStore};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::from_raw(1);
///
/// store.insert(id, InputState::new("text"));
/// store.set_value(id, "Hello".to_string());
///
/// assert_eq!(store.get(id).map(|s| s.value()), Some("Hello"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, InputState>,
    focused: Option<InputId>,
}

impl InputValueStore {
    /// Create a new, empty input value store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            focused: None,
        }
    }

    /// Returns `true` if an entry exists for this input.
    pub fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn get(&self, id: InputId) -> Option<&InputState> {
        self.values.get(&id)
    }

    pub fn get_mut(&mut self, id: InputId) -> Option<&mut InputState> {
        self.values.get_mut(&id)
    }

    /// Insert or replace the state for this input.
    pub fn insert(&mut self, id: InputId, state: InputState) {
        self.values.insert(id, state);
    }

    pub fn remove(&mut self, id: InputId) -> Option<InputState> {
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.values.remove(&id)
    }

    /// Called when an input gains focus. Unknown ids are ignored.
    pub fn focus(&mut self, id: InputId) {
        if self.values.contains_key(&id) {
            self.focused = Some(id);
        }
    }

    /// Called when the focused input loses focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<InputId> {
        self.focused
    }
}
