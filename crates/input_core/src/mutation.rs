/// A single write applied to an input element.
///
/// Every script-visible write made through [`InputState`](crate::InputState)
/// appends one of these to the element's journal, including writes that
/// store a value equal to the current one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    /// `element.value = ...`
    SetValue(String),
    /// `element.defaultValue = ...` (sets the `value` content attribute)
    SetDefaultValue(String),
    /// `element.removeAttribute("value")`
    RemoveValueAttribute,
    /// `element.checked = ...`
    SetChecked(bool),
    /// `element.defaultChecked = ...` (sets or removes the `checked` content attribute)
    SetDefaultChecked(bool),
    /// `element.name = ...`
    SetName(String),
    /// Checkedness cleared because another radio in the same group became checked.
    GroupUnchecked,
}

impl Mutation {
    /// Returns `true` for writes that touch the value or its content attribute.
    pub fn is_value_write(&self) -> bool {
        matches!(
            self,
            Mutation::SetValue(_) | Mutation::SetDefaultValue(_) | Mutation::RemoveValueAttribute
        )
    }

    /// Returns `true` for writes that touch checkedness or the checked content attribute.
    pub fn is_checked_write(&self) -> bool {
        matches!(
            self,
            Mutation::SetChecked(_) | Mutation::SetDefaultChecked(_) | Mutation::GroupUnchecked
        )
    }
}
