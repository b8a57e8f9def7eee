use super::*;
use crate::controller::diagnostics::DiagnosticsReport;

#[test]
fn diagnostics_state_defaults_unloaded() {
    let state = DiagnosticsState::default();
    assert!(!state.loaded());
    assert!(state.report.is_none());
}

#[test]
fn loaded_after_report_arrives() {
    let state = DiagnosticsState {
        report: Some(DiagnosticsReport::default()),
    };
    assert!(state.loaded());
}
