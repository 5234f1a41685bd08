//! Controlled/uncontrolled synchronization for `<input>` elements.
//!
//! An [`InputReconciler`] takes an immutable [`InputProps`] record and
//! mutates a live input (through [`input_core::InputStore`]) until its
//! `value`, `defaultValue`, `checked`, `defaultChecked` and `name` agree with
//! it. The owning render pipeline calls:
//!
//! - [`InputReconciler::validate_input_props`] before mounting, for authoring
//!   diagnostics,
//! - [`InputReconciler::init_input`] once when the element is created or
//!   hydrated,
//! - [`InputReconciler::update_input`] on every prop update,
//! - [`InputReconciler::restore_controlled_input_state`] after the browser
//!   mutated the input on its own (user interaction), which also re-syncs
//!   the other radios of the group.
//!
//! Diagnostics go to an injected [`DiagnosticSink`] that deduplicates per
//! reconciler instance. Props of other inputs and the last observed values
//! come from the [`PropsRegistry`] and [`ValueTracker`] collaborators.

mod coerce;
mod config;
mod default_value;
mod diagnostics;
mod error;
mod init;
mod props;
mod reconciler;
mod registry;
mod restore;
mod update;
mod validate;

pub use coerce::{
    js_number_to_string, js_string_to_number, loosely_equal, stringify, to_string_value, truthy,
};
pub use config::SyncConfig;
pub use default_value::set_default_value;
pub use diagnostics::{
    Diagnostic, DiagnosticKind, DiagnosticSink, LogDiagnostics, RecordingDiagnostics,
};
pub use error::SyncError;
pub use props::{InputProps, PropValue};
pub use reconciler::InputReconciler;
pub use registry::{PropsRegistry, TrackedValues, ValueTracker};

#[cfg(test)]
mod tests;
