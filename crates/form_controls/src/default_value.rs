use crate::coerce::stringify;
use crate::props::PropValue;
use input_core::{InputId, InputStore};

/// Write `defaultValue`, skipping redundant writes.
///
/// A focused number input is left alone; its value attribute is synced on
/// blur by the event layer. A nullish `value` restores the initial value
/// recorded at init.
pub fn set_default_value<S: InputStore + ?Sized>(
    store: &mut S,
    id: InputId,
    input_type: Option<&str>,
    value: Option<&PropValue>,
) {
    if input_type == Some("number") && store.is_active(id) {
        return;
    }
    let Some(st) = store.input(id) else {
        return;
    };

    let next = match value.filter(|v| !v.is_null()) {
        Some(v) => stringify(v),
        None => st
            .wrapper()
            .map(|w| w.initial_value.clone())
            .unwrap_or_default(),
    };
    if st.default_value() != next {
        store.set_default_value(id, next);
    }
}
