//! Authoring diagnostics.
//!
//! Diagnostics never change behavior. A sink reports each
//! [`DiagnosticKind`] at most once over its lifetime, so one noisy component
//! does not flood the log and a fresh reconciler starts with a clean slate.

use std::collections::HashSet;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    CheckedAndDefaultChecked,
    ValueAndDefaultValue,
    ValueWithoutHandler,
    CheckedWithoutHandler,
    UncontrolledToControlled,
    ControlledToUncontrolled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub trait DiagnosticSink {
    /// Returns `true` the first time `kind` is seen and marks it reported.
    fn should_report(&mut self, kind: DiagnosticKind) -> bool;

    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sends diagnostics to the `log` facade at warn level.
#[derive(Debug, Default)]
pub struct LogDiagnostics {
    seen: HashSet<DiagnosticKind>,
}

impl LogDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for LogDiagnostics {
    fn should_report(&mut self, kind: DiagnosticKind) -> bool {
        self.seen.insert(kind)
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!(target: "form_controls.diagnostics", "{diagnostic}");
    }
}

/// Keeps reported diagnostics in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    seen: HashSet<DiagnosticKind>,
    reported: Vec<Diagnostic>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> &[Diagnostic] {
        &self.reported
    }

    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.reported.iter().map(|d| d.kind).collect()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn should_report(&mut self, kind: DiagnosticKind) -> bool {
        self.seen.insert(kind)
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported.push(diagnostic);
    }
}
