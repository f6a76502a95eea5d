//! Fake HAL implementation for testing.
//!
//! Records every command without executing it, so orchestration can be
//! verified in CI without flashing tools or hardware attached.

use super::{CommandSpec, ProcessOps};
use crate::{HalError, HalResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Operation records for testing and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Command {
        program: String,
        args: Vec<String>,
        timeout_secs: u64,
    },
}

/// How a scripted command should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeFailure {
    Exit(Option<i32>),
    NotFound,
    Timeout,
    Cancelled,
}

#[derive(Debug, Default)]
struct FakeHalState {
    operations: Vec<Operation>,
    failures: HashMap<String, FakeFailure>,
}

/// Fake HAL that records operations without executing them.
#[derive(Debug, Clone, Default)]
pub struct FakeHal {
    state: Arc<Mutex<FakeHalState>>,
}

impl FakeHal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later invocation of `program` fail with `failure`.
    pub fn fail_program(&self, program: &str, failure: FakeFailure) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(program.to_string(), failure);
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<Operation> {
        self.state.lock().unwrap().operations.clone()
    }

    pub fn operation_count(&self) -> usize {
        self.state.lock().unwrap().operations.len()
    }

    /// Programs invoked so far, in order.
    pub fn programs(&self) -> Vec<String> {
        self.operations()
            .into_iter()
            .map(|op| match op {
                Operation::Command { program, .. } => program,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.state.lock().unwrap().operations.clear();
    }
}

impl ProcessOps for FakeHal {
    fn run_command(&self, cmd: &CommandSpec, timeout: Duration) -> HalResult<()> {
        let program = cmd.program_name();
        let mut state = self.state.lock().unwrap();
        state.operations.push(Operation::Command {
            program: program.clone(),
            args: cmd.args_lossy(),
            timeout_secs: timeout.as_secs(),
        });

        match state.failures.get(&program).copied() {
            None => Ok(()),
            Some(FakeFailure::Exit(code)) => Err(HalError::CommandFailed {
                program,
                code,
                stderr: "fake failure".to_string(),
            }),
            Some(FakeFailure::NotFound) => Err(HalError::CommandNotFound(program)),
            Some(FakeFailure::Timeout) => Err(HalError::CommandTimeout {
                program,
                timeout_secs: timeout.as_secs(),
            }),
            Some(FakeFailure::Cancelled) => Err(HalError::Cancelled { program }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let hal = FakeHal::new();
        hal.run_command(
            &CommandSpec::new("a").arg("1"),
            Duration::from_secs(3),
        )
        .unwrap();
        hal.run_command(&CommandSpec::new("b"), Duration::from_secs(4))
            .unwrap();

        assert_eq!(hal.programs(), vec!["a", "b"]);
        assert_eq!(
            hal.operations()[0],
            Operation::Command {
                program: "a".to_string(),
                args: vec!["1".to_string()],
                timeout_secs: 3,
            }
        );
    }

    #[test]
    fn scripted_failure_is_returned_and_recorded() {
        let hal = FakeHal::new();
        hal.fail_program("b", FakeFailure::Exit(Some(3)));

        let err = hal
            .run_command(&CommandSpec::new("b"), Duration::from_secs(1))
            .unwrap_err();
        assert_eq!(err.exit_code(), Some(3));
        assert_eq!(hal.operation_count(), 1);

        hal.clear();
        assert_eq!(hal.operation_count(), 0);
    }
}
