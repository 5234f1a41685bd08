use crate::diagnostics::{DiagnosticKind, DiagnosticSink};
use crate::props::{InputProps, non_nullish};
use crate::reconciler::InputReconciler;
use input_core::WrapperState;

/// Types whose `value` is not user-editable, so a `value` prop without a
/// change handler is fine.
const READ_ONLY_VALUE_TYPES: &[&str] = &[
    "button", "checkbox", "image", "hidden", "radio", "reset", "submit",
];

impl<D: DiagnosticSink> InputReconciler<D> {
    /// Report conflicting or incomplete controlled/uncontrolled props.
    ///
    /// `owner` names the component rendering the input, when known. Never
    /// touches the element.
    pub fn validate_input_props(&mut self, props: &InputProps, owner: Option<&str>) {
        let owner = owner.unwrap_or("A component");
        let ty = props.type_str().unwrap_or("text");

        if props.checked.is_some() && props.default_checked.is_some() {
            self.warn_once(DiagnosticKind::CheckedAndDefaultChecked, || {
                format!(
                    "{owner} contains an input of type {ty} with both checked and defaultChecked \
                     props. Input elements must be either controlled or uncontrolled; remove one \
                     of these props."
                )
            });
        }

        if props.value.is_some() && props.default_value.is_some() {
            self.warn_once(DiagnosticKind::ValueAndDefaultValue, || {
                format!(
                    "{owner} contains an input of type {ty} with both value and defaultValue \
                     props. Input elements must be either controlled or uncontrolled; remove one \
                     of these props."
                )
            });
        }

        let has_handler = props.has_on_change || props.read_only || props.disabled;
        if has_handler {
            return;
        }

        if non_nullish(&props.value).is_some() && !READ_ONLY_VALUE_TYPES.contains(&ty) {
            self.warn_once(DiagnosticKind::ValueWithoutHandler, || {
                format!(
                    "{owner} provided a `value` prop to an input of type {ty} without an \
                     `onChange` handler. This renders a read-only field; set either `onChange` \
                     or `readOnly`."
                )
            });
        }

        if non_nullish(&props.checked).is_some() {
            self.warn_once(DiagnosticKind::CheckedWithoutHandler, || {
                format!(
                    "{owner} provided a `checked` prop to an input of type {ty} without an \
                     `onChange` handler. This renders a read-only field; set either `onChange` \
                     or `readOnly`."
                )
            });
        }
    }

    /// Warn when an input flips between controlled and uncontrolled after
    /// its first render.
    pub(crate) fn warn_on_controlled_switch(
        &mut self,
        wrapper: Option<&WrapperState>,
        props: &InputProps,
    ) {
        let Some(wrapper) = wrapper else {
            return;
        };
        let ty = props.type_str().unwrap_or("text");
        let controlled = props.is_controlled();

        if wrapper.controlled && !controlled {
            self.warn_once(DiagnosticKind::ControlledToUncontrolled, || {
                format!(
                    "A component is changing a controlled input of type {ty} to be \
                     uncontrolled. Decide between using a controlled or uncontrolled input \
                     element for the lifetime of the component."
                )
            });
        } else if !wrapper.controlled && controlled {
            self.warn_once(DiagnosticKind::UncontrolledToControlled, || {
                format!(
                    "A component is changing an uncontrolled input of type {ty} to be \
                     controlled. Decide between using a controlled or uncontrolled input \
                     element for the lifetime of the component."
                )
            });
        }
    }
}
