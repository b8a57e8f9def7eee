//! Connectivity-panel state.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use crate::controller::diagnostics::DiagnosticsReport;

/// Row counts for the connectivity panel. Populated once at startup and
/// never refetched; `None` means the requests have not all settled yet.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticsState {
    pub report: Option<DiagnosticsReport>,
}

impl DiagnosticsState {
    pub fn loaded(&self) -> bool {
        self.report.is_some()
    }
}
