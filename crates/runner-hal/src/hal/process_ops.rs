//! Process execution helpers.
//!
//! External commands are "world-touching" and must go through the HAL so the
//! orchestrator can be tested without spawning real processes.

use super::CommandSpec;
use crate::HalResult;
use std::time::Duration;

/// Process execution trait (external command runner).
pub trait ProcessOps {
    /// Run `cmd` to completion. Fails unless the command exits with status 0
    /// within `timeout`.
    fn run_command(&self, cmd: &CommandSpec, timeout: Duration) -> HalResult<()>;
}
