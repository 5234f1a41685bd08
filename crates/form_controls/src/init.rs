use crate::coerce::{stringify, to_string_value, truthy};
use crate::diagnostics::DiagnosticSink;
use crate::error::SyncError;
use crate::props::{InputProps, non_nullish};
use crate::reconciler::InputReconciler;
use input_core::{InputId, InputStore, ValueMode, WrapperState};

impl<D: DiagnosticSink> InputReconciler<D> {
    /// Set up a freshly created (or hydrated) input from its first props.
    ///
    /// When hydrating, neither `value` nor `checked` is taken from props:
    /// server-rendered markup may already carry user input.
    pub fn init_input<S: InputStore + ?Sized>(
        &mut self,
        store: &mut S,
        id: InputId,
        props: &InputProps,
        is_hydrating: bool,
    ) -> Result<(), SyncError> {
        let st = store.input(id).ok_or(SyncError::MissingInput(id))?;
        let node_value = st.value().to_string();
        let node_value_dirty = st.is_value_dirty();
        let value_is_attribute = st.value_mode() != ValueMode::Value;
        let has_value_attribute = st.has_value_attribute();
        let node_checked = st.checked();
        let name = st.name().to_string();

        let value = non_nullish(&props.value);
        let default_value = non_nullish(&props.default_value);
        let initial_value = value
            .or(default_value)
            .map(|v| stringify(&to_string_value(v)))
            .unwrap_or_default();
        let initial_checked = non_nullish(&props.checked)
            .or(props.default_checked.as_ref())
            .is_some_and(truthy);

        store.set_wrapper_state(
            id,
            WrapperState {
                initial_value: initial_value.clone(),
                initial_checked,
                controlled: props.is_controlled(),
            },
        );

        let syncing = self.config.attribute_syncing;

        if props.value.is_some() || props.default_value.is_some() {
            // A submit/reset without a value keeps the browser's own label.
            if props.is_button() && value.is_none() {
                return Ok(());
            }
            if !is_hydrating {
                if syncing {
                    if node_value != initial_value {
                        store.set_value(id, initial_value.clone());
                    }
                } else if let Some(v) = value
                    && (props.is_button() || node_value != initial_value)
                {
                    store.set_value(id, stringify(&to_string_value(v)));
                }
            }
            let next_default = if syncing {
                Some(initial_value.clone())
            } else {
                default_value.map(|v| stringify(&to_string_value(v)))
            };
            if let Some(next_default) = next_default {
                let markup_differs =
                    is_hydrating && !node_value.is_empty() && node_value != next_default;
                if value_is_attribute {
                    // Here the value *is* the attribute; keep the rendered one.
                    if !(markup_differs && has_value_attribute) {
                        store.set_default_value(id, next_default);
                    }
                } else {
                    // A clean value follows the attribute; pin what the markup
                    // shows before the attribute changes under it.
                    if markup_differs && !node_value_dirty {
                        store.set_value(id, node_value.clone());
                    }
                    store.set_default_value(id, next_default);
                }
            }
        }

        // Detach from the radio group while checkedness is forced, so the
        // writes below cannot uncheck a sibling.
        if !name.is_empty() {
            store.set_name(id, String::new());
        }

        if is_hydrating {
            // Re-assigning the current checkedness marks it dirty, which keeps
            // the defaultChecked toggle below from replacing it. This also
            // means the value tracker registered afterwards sees the markup
            // state rather than the props.
            store.set_checked(id, node_checked);
        } else if syncing {
            store.set_checked(id, initial_checked);
        } else if let Some(checked) = non_nullish(&props.checked) {
            store.set_checked(id, truthy(checked));
        }

        if syncing {
            force_default_checked(store, id, initial_checked);
        } else if let Some(default_checked) = non_nullish(&props.default_checked) {
            force_default_checked(store, id, truthy(default_checked));
        }

        if !name.is_empty() {
            store.set_name(id, name);
        }

        log::trace!(
            target: "form_controls.init",
            "init {id}: value={initial_value:?} checked={initial_checked} hydrating={is_hydrating}"
        );
        Ok(())
    }
}

/// Assign `defaultChecked` through a flip so the engine always sees a
/// change. Some engines drop a `defaultChecked` write whose value matches
/// the stale attribute, leaving the checked content attribute out of sync
/// with the live checkedness.
fn force_default_checked<S: InputStore + ?Sized>(store: &mut S, id: InputId, checked: bool) {
    let current = store.input(id).is_some_and(|st| st.default_checked());
    store.set_default_checked(id, !current);
    store.set_default_checked(id, checked);
}
