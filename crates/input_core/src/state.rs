//! Per-input live state.
//!
//! Mirrors the HTML model of an `<input>`: a value and a dirty-value flag
//! alongside the `value` content attribute, and a checkedness and
//! dirty-checkedness flag alongside the `checked` content attribute.

use crate::mutation::Mutation;
use crate::text::sanitize_value;

/// How the `value` IDL attribute behaves for an input type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueMode {
    /// The element keeps its own value; the attribute only seeds it while clean.
    Value,
    /// `value` reflects the `value` content attribute, `""` when absent.
    Default,
    /// `value` reflects the `value` content attribute, `"on"` when absent.
    DefaultOn,
}

pub fn value_mode(input_type: &str) -> ValueMode {
    match input_type {
        "checkbox" | "radio" => ValueMode::DefaultOn,
        "hidden" | "submit" | "reset" | "button" | "image" => ValueMode::Default,
        _ => ValueMode::Value,
    }
}

/// Library-owned bookkeeping attached to an input when it is first set up.
///
/// Not part of the element's observable state; writing it is not journaled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WrapperState {
    pub initial_value: String,
    pub initial_checked: bool,
    pub controlled: bool,
}

/// Live state for a single input element.
#[derive(Clone, Debug)]
pub struct InputState {
    input_type: String,
    name: String,

    /// Current value for [`ValueMode::Value`] types.
    value: String,
    dirty_value: bool,
    /// The `value` content attribute (`defaultValue`).
    value_attr: Option<String>,

    checkedness: bool,
    dirty_checkedness: bool,
    /// Presence of the `checked` content attribute (`defaultChecked`).
    checked_attr: bool,

    wrapper: Option<WrapperState>,
    journal: Vec<Mutation>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new("text")
    }
}

impl InputState {
    /// Create a clean input of the given type.
    ///
    /// The type is trimmed and lower-cased; an empty type is `text`.
    pub fn new(input_type: &str) -> Self {
        let ty = input_type.trim();
        let input_type = if ty.is_empty() {
            "text".to_string()
        } else {
            ty.to_ascii_lowercase()
        };
        Self {
            input_type,
            name: String::new(),
            value: String::new(),
            dirty_value: false,
            value_attr: None,
            checkedness: false,
            dirty_checkedness: false,
            checked_attr: false,
            wrapper: None,
            journal: Vec::new(),
        }
    }

    /// Seed content attributes as parsed markup would, without journaling.
    pub fn with_attributes(
        mut self,
        name: Option<&str>,
        value: Option<&str>,
        checked: bool,
    ) -> Self {
        if let Some(name) = name {
            self.name = name.to_string();
        }
        self.value_attr = value.map(str::to_string);
        self.value = sanitize_value(&self.input_type, value.unwrap_or("")).into_owned();
        self.checked_attr = checked;
        self.checkedness = checked;
        self
    }

    pub fn input_type(&self) -> &str {
        &self.input_type
    }

    pub fn value_mode(&self) -> ValueMode {
        value_mode(&self.input_type)
    }

    pub fn is_radio(&self) -> bool {
        self.input_type == "radio"
    }

    pub fn is_checkable(&self) -> bool {
        matches!(self.input_type.as_str(), "checkbox" | "radio")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `value` IDL attribute.
    pub fn value(&self) -> &str {
        match self.value_mode() {
            ValueMode::Value => &self.value,
            ValueMode::Default => self.value_attr.as_deref().unwrap_or(""),
            ValueMode::DefaultOn => self.value_attr.as_deref().unwrap_or("on"),
        }
    }

    /// The `defaultValue` IDL attribute: the `value` content attribute or `""`.
    pub fn default_value(&self) -> &str {
        self.value_attr.as_deref().unwrap_or("")
    }

    pub fn has_value_attribute(&self) -> bool {
        self.value_attr.is_some()
    }

    pub fn is_value_dirty(&self) -> bool {
        self.dirty_value
    }

    pub fn checked(&self) -> bool {
        self.checkedness
    }

    /// The `defaultChecked` IDL attribute: presence of the `checked` content attribute.
    pub fn default_checked(&self) -> bool {
        self.checked_attr
    }

    pub fn is_checkedness_dirty(&self) -> bool {
        self.dirty_checkedness
    }

    pub fn wrapper(&self) -> Option<&WrapperState> {
        self.wrapper.as_ref()
    }

    /// Writes recorded since creation or the last [`take_journal`](Self::take_journal).
    pub fn journal(&self) -> &[Mutation] {
        &self.journal
    }

    pub fn take_journal(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.journal)
    }

    // =========================================================================
    // Script writes (journaled)
    // =========================================================================

    pub fn set_value(&mut self, value: String) {
        match self.value_mode() {
            ValueMode::Value => {
                self.value = sanitize_value(&self.input_type, &value).into_owned();
                self.dirty_value = true;
            }
            ValueMode::Default | ValueMode::DefaultOn => {
                self.value_attr = Some(value.clone());
            }
        }
        self.journal.push(Mutation::SetValue(value));
    }

    pub fn set_default_value(&mut self, value: String) {
        if self.value_mode() == ValueMode::Value && !self.dirty_value {
            self.value = sanitize_value(&self.input_type, &value).into_owned();
        }
        self.value_attr = Some(value.clone());
        self.journal.push(Mutation::SetDefaultValue(value));
    }

    pub fn remove_value_attribute(&mut self) {
        if self.value_mode() == ValueMode::Value && !self.dirty_value {
            self.value.clear();
        }
        self.value_attr = None;
        self.journal.push(Mutation::RemoveValueAttribute);
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checkedness = checked;
        self.dirty_checkedness = true;
        self.journal.push(Mutation::SetChecked(checked));
    }

    pub fn set_default_checked(&mut self, checked: bool) {
        self.checked_attr = checked;
        if !self.dirty_checkedness {
            self.checkedness = checked;
        }
        self.journal.push(Mutation::SetDefaultChecked(checked));
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name.clone();
        self.journal.push(Mutation::SetName(name));
    }

    /// Clear checkedness because another member of the radio group was checked.
    pub fn clear_checkedness_for_group(&mut self) {
        self.checkedness = false;
        self.journal.push(Mutation::GroupUnchecked);
    }

    // =========================================================================
    // User interaction (not journaled)
    // =========================================================================

    /// Replace the value the way typing into the control would.
    pub fn user_edit_value(&mut self, value: &str) {
        match self.value_mode() {
            ValueMode::Value => {
                self.value = value.to_string();
                self.dirty_value = true;
            }
            ValueMode::Default | ValueMode::DefaultOn => {}
        }
    }

    /// Set checkedness the way activating the control would.
    pub fn user_set_checked(&mut self, checked: bool) {
        self.checkedness = checked;
        self.dirty_checkedness = true;
    }

    pub fn set_wrapper(&mut self, wrapper: WrapperState) {
        self.wrapper = Some(wrapper);
    }
}
