/// A single author-supplied prop value.
///
/// `Function` and `Symbol` stand for values that have no meaningful string
/// form; coercion treats them as empty/falsy.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Function,
    Symbol,
}

impl PropValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(n as f64)
    }
}

/// Declared intent for one `<input>`.
///
/// Each prop is `None` when absent and `Some(PropValue::Null)` when present
/// but null; the two are distinguished by the conflicting-props diagnostics
/// and by which default-value source the updater picks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputProps {
    pub value: Option<PropValue>,
    pub default_value: Option<PropValue>,
    pub checked: Option<PropValue>,
    pub default_checked: Option<PropValue>,
    pub input_type: Option<PropValue>,
    pub name: Option<PropValue>,
    pub has_on_change: bool,
    pub read_only: bool,
    pub disabled: bool,
}

impl InputProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<PropValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_default_value(mut self, value: impl Into<PropValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_checked(mut self, checked: impl Into<PropValue>) -> Self {
        self.checked = Some(checked.into());
        self
    }

    pub fn with_default_checked(mut self, checked: impl Into<PropValue>) -> Self {
        self.default_checked = Some(checked.into());
        self
    }

    pub fn with_type(mut self, input_type: impl Into<PropValue>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<PropValue>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_on_change(mut self) -> Self {
        self.has_on_change = true;
        self
    }

    pub fn with_read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// The `type` prop when it is a string; any other value never matches a type.
    pub fn type_str(&self) -> Option<&str> {
        self.input_type.as_ref().and_then(PropValue::as_str)
    }

    pub fn is_type(&self, ty: &str) -> bool {
        self.type_str() == Some(ty)
    }

    pub fn is_button(&self) -> bool {
        matches!(self.type_str(), Some("submit" | "reset"))
    }

    pub fn uses_checked(&self) -> bool {
        matches!(self.type_str(), Some("checkbox" | "radio"))
    }

    /// `checked` for checkbox/radio, `value` for everything else.
    pub fn is_controlled(&self) -> bool {
        if self.uses_checked() {
            non_nullish(&self.checked).is_some()
        } else {
            non_nullish(&self.value).is_some()
        }
    }
}

/// The prop value unless it is absent or null.
pub(crate) fn non_nullish(prop: &Option<PropValue>) -> Option<&PropValue> {
    prop.as_ref().filter(|v| !v.is_null())
}
