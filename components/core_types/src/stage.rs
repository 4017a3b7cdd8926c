//! Busy-state tracking for front-end stages.
//!
//! A stage moves `Idle -> Running -> Idle` around each run. Configuration
//! may only change while the stage is idle.

use crate::DlError;

/// Run state of a scanner or parser.
///
/// # Examples
///
/// ```
/// use core_types::StageState;
///
/// let mut state = StageState::Idle;
/// state.begin("scanner").unwrap();
/// assert!(state.ensure_idle("scanner").is_err());
/// state.finish();
/// assert!(state.ensure_idle("scanner").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageState {
    /// Not running; configuration may change
    #[default]
    Idle,
    /// Running; configuration is frozen
    Running,
}

impl StageState {
    /// True while the stage is running
    pub fn is_running(self) -> bool {
        self == StageState::Running
    }

    /// Fail with a busy error unless idle
    pub fn ensure_idle(self, stage: &str) -> Result<(), DlError> {
        match self {
            StageState::Idle => Ok(()),
            StageState::Running => Err(DlError::busy(stage)),
        }
    }

    /// Enter the running state
    pub fn begin(&mut self, stage: &str) -> Result<(), DlError> {
        self.ensure_idle(stage)?;
        *self = StageState::Running;
        Ok(())
    }

    /// Return to idle
    pub fn finish(&mut self) {
        *self = StageState::Idle;
    }
}
