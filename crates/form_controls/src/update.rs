use crate::coerce::{loosely_equal, stringify, to_string_value, truthy};
use crate::default_value::set_default_value;
use crate::diagnostics::DiagnosticSink;
use crate::error::SyncError;
use crate::props::{InputProps, PropValue, non_nullish};
use crate::reconciler::InputReconciler;
use input_core::{InputId, InputStore, sanitize_value};

impl<D: DiagnosticSink> InputReconciler<D> {
    /// Reconcile an existing input against updated props.
    ///
    /// Value is resolved before checkedness. Every write is skipped when the
    /// element already holds the target, so repeating a call with the same
    /// props writes nothing.
    pub fn update_input<S: InputStore + ?Sized>(
        &mut self,
        store: &mut S,
        id: InputId,
        props: &InputProps,
    ) -> Result<(), SyncError> {
        let st = store.input(id).ok_or(SyncError::MissingInput(id))?;
        let wrapper = st.wrapper().cloned();
        self.warn_on_controlled_switch(wrapper.as_ref(), props);

        let input_type = props.type_str();
        let value = props.value.as_ref().map(to_string_value);

        match value.as_ref().filter(|v| !v.is_null()) {
            Some(v) => {
                let node_value = st.value();
                let target = stringify(v);
                // The node stores the sanitized form, so compare against that.
                let sanitized = sanitize_value(st.input_type(), &target);
                let stale = if input_type == Some("number") {
                    // Loose comparison keeps "1.0" typed by the user when the
                    // prop is the number 1.
                    (matches!(v, PropValue::Number(n) if *n == 0.0) && node_value.is_empty())
                        || (!loosely_equal(node_value, v) && node_value != sanitized)
                } else {
                    node_value != sanitized
                };
                if stale {
                    log::trace!(target: "form_controls.update", "{id}: value <- {v:?}");
                    store.set_value(id, target);
                }
            }
            None if props.is_button() => {
                // Buttons keep their own label; only checkedness is synced.
                if st.has_value_attribute() {
                    store.remove_value_attribute(id);
                }
                return self.update_input_checked(store, id, props);
            }
            None => {}
        }

        if self.config.attribute_syncing {
            if props.value.is_some() {
                set_default_value(store, id, input_type, value.as_ref());
            } else if let Some(default_value) = &props.default_value {
                set_default_value(store, id, input_type, Some(&to_string_value(default_value)));
            } else if store.input(id).is_some_and(|st| st.has_value_attribute()) {
                store.remove_value_attribute(id);
            }
        } else {
            match non_nullish(&props.default_value) {
                None => {
                    if store.input(id).is_some_and(|st| st.has_value_attribute()) {
                        store.remove_value_attribute(id);
                    }
                }
                Some(default_value) => {
                    set_default_value(store, id, input_type, Some(&to_string_value(default_value)));
                }
            }
        }

        let default_checked = non_nullish(&props.default_checked).map(truthy);
        let next_default_checked = if self.config.attribute_syncing {
            default_checked.filter(|_| non_nullish(&props.checked).is_none())
        } else {
            Some(default_checked.unwrap_or(false))
        };
        if let Some(next) = next_default_checked
            && store.input(id).is_some_and(|st| st.default_checked() != next)
        {
            store.set_default_checked(id, next);
        }

        self.update_input_checked(store, id, props)
    }

    /// Force the live `checked` property to match a non-nullish `checked` prop.
    pub fn update_input_checked<S: InputStore + ?Sized>(
        &mut self,
        store: &mut S,
        id: InputId,
        props: &InputProps,
    ) -> Result<(), SyncError> {
        let st = store.input(id).ok_or(SyncError::MissingInput(id))?;
        if let Some(checked) = non_nullish(&props.checked) {
            let checked = truthy(checked);
            if st.checked() != checked {
                log::trace!(target: "form_controls.update", "{id}: checked <- {checked}");
                store.set_checked(id, checked);
            }
        }
        Ok(())
    }
}
