use crate::config::SyncConfig;
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, LogDiagnostics};

/// Drives live inputs towards their props.
///
/// One reconciler corresponds to one library instance: it owns the
/// configuration and the diagnostic sink, so warning deduplication is
/// scoped to it rather than to the process.
#[derive(Debug)]
pub struct InputReconciler<D = LogDiagnostics> {
    pub(crate) config: SyncConfig,
    diagnostics: D,
}

impl InputReconciler<LogDiagnostics> {
    pub fn new() -> Self {
        Self::with_diagnostics(SyncConfig::default(), LogDiagnostics::new())
    }
}

impl Default for InputReconciler<LogDiagnostics> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DiagnosticSink> InputReconciler<D> {
    pub fn with_diagnostics(config: SyncConfig, diagnostics: D) -> Self {
        Self {
            config,
            diagnostics,
        }
    }

    pub fn config(&self) -> SyncConfig {
        self.config
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }

    pub(crate) fn warn_once(&mut self, kind: DiagnosticKind, message: impl FnOnce() -> String) {
        if self.diagnostics.should_report(kind) {
            self.diagnostics.report(Diagnostic {
                kind,
                message: message(),
            });
        }
    }
}
