//! Unit tests for StageState

use core_types::{ErrorKind, StageState};

#[test]
fn test_idle_allows_reconfiguration() {
    assert!(StageState::Idle.ensure_idle("scanner").is_ok());
}

#[test]
fn test_running_refuses_reconfiguration() {
    let err = StageState::Running.ensure_idle("scanner").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Busy);
    assert!(err.message.contains("currently working"));
}

#[test]
fn test_full_cycle() {
    let mut state = StageState::default();
    state.begin("parser").unwrap();
    assert!(state.is_running());
    state.finish();
    assert!(!state.is_running());
    state.begin("parser").unwrap();
}
