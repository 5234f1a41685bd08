use crate::props::InputProps;
use input_core::{InputId, InputState};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Latest props of every managed input, keyed by input.
pub trait PropsRegistry {
    fn current_props(&self, id: InputId) -> Option<&InputProps>;
}

impl<S: BuildHasher> PropsRegistry for HashMap<InputId, InputProps, S> {
    fn current_props(&self, id: InputId) -> Option<&InputProps> {
        self.get(&id)
    }
}

/// Remembers the last value the library observed on each input, so the
/// event layer can tell a real change from a programmatic write.
pub trait ValueTracker {
    /// Start tracking `id` at its current value.
    fn track(&mut self, id: InputId, state: &InputState);

    /// Record the input's current value. Returns `true` if it differs from
    /// the last observed one, or if the input is not tracked.
    fn update_value_if_changed(&mut self, id: InputId, state: &InputState) -> bool;
}

/// In-memory [`ValueTracker`].
///
/// Checkboxes and radios are tracked by checkedness (`"true"`/`"false"`),
/// every other type by value.
#[derive(Clone, Debug, Default)]
pub struct TrackedValues {
    values: HashMap<InputId, String>,
}

impl TrackedValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracked_value(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }

    pub fn untrack(&mut self, id: InputId) {
        self.values.remove(&id);
    }
}

fn observed_value(state: &InputState) -> String {
    if state.is_checkable() {
        state.checked().to_string()
    } else {
        state.value().to_string()
    }
}

impl ValueTracker for TrackedValues {
    fn track(&mut self, id: InputId, state: &InputState) {
        self.values.insert(id, observed_value(state));
    }

    fn update_value_if_changed(&mut self, id: InputId, state: &InputState) -> bool {
        let Some(last) = self.values.get_mut(&id) else {
            return true;
        };
        let next = observed_value(state);
        if *last == next {
            return false;
        }
        *last = next;
        true
    }
}
