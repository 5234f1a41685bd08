use crate::coerce::stringify;
use crate::diagnostics::DiagnosticSink;
use crate::error::SyncError;
use crate::props::{InputProps, non_nullish};
use crate::reconciler::InputReconciler;
use crate::registry::{PropsRegistry, ValueTracker};
use dom::{Document, NodeId};
use input_core::InputId;

impl<D: DiagnosticSink> InputReconciler<D> {
    /// Re-assert controlled state after the browser changed `id` on its own.
    ///
    /// Checking a radio silently unchecks the rest of its group, so every
    /// other same-name radio in the same tree and form is re-synced with
    /// its own latest props. All of those radios must be managed: a sibling
    /// without registered props fails with
    /// [`SyncError::UnmanagedRadioSibling`] and later siblings are left
    /// untouched.
    pub fn restore_controlled_input_state<R, T>(
        &mut self,
        doc: &mut Document,
        id: NodeId,
        props: &InputProps,
        registry: &R,
        tracker: &mut T,
    ) -> Result<(), SyncError>
    where
        R: PropsRegistry + ?Sized,
        T: ValueTracker + ?Sized,
    {
        doc.expect_input(id)?;
        self.update_input(doc, id.into(), props)?;

        let Some(name) = non_nullish(&props.name).filter(|_| props.is_type("radio")) else {
            return Ok(());
        };
        let name = stringify(name);

        let root = doc.root_of(id);
        let owner = doc.form_owner(id);
        let cousins: Vec<NodeId> = doc
            .query_radio_group(root, &name)
            .into_iter()
            .filter(|&other| other != id && doc.form_owner(other) == owner)
            .collect();

        for other in cousins {
            let other_id = InputId::from(other);
            let other_props = registry.current_props(other_id).ok_or_else(|| {
                SyncError::UnmanagedRadioSibling {
                    sibling: other_id,
                    name: name.clone(),
                }
            })?;

            // The browser may have unchecked it; let the tracker see that so
            // the next change event on it is not swallowed.
            if let Some(st) = doc.input(other) {
                tracker.update_value_if_changed(other_id, st);
            }
            log::trace!(target: "form_controls.restore", "{id}: re-syncing radio {other} ({name:?})");
            self.update_input(doc, other_id, other_props)?;
        }
        Ok(())
    }
}
