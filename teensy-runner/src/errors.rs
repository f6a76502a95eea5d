use runner_hal::HalError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE_MESSAGE: &str = "Please provide the binary as first argument!";

/// Exit status used when Ctrl+C aborted a step (128 + SIGINT).
pub const EXIT_CANCELLED: i32 = 130;

pub type RunnerResult<T> = Result<T, RunnerError>;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Please provide the binary as first argument!")]
    Usage,

    #[error("Cannot read firmware binary {}: {source}", .path.display())]
    Binary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Firmware binary {} is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("Failed to create temporary workspace: {0}")]
    Workspace(#[source] HalError),

    #[error("Intel HEX conversion failed: {0}")]
    Conversion(#[source] HalError),

    #[error("Flashing failed: {0}")]
    Flash(#[source] HalError),
}

impl RunnerError {
    /// Process exit status for this error.
    ///
    /// Tool failures propagate the tool's own status when it exited with one.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::Conversion(err) | RunnerError::Flash(err) => {
                if err.is_cancelled() {
                    EXIT_CANCELLED
                } else {
                    err.exit_code().filter(|code| *code != 0).unwrap_or(1)
                }
            }
            _ => 1,
        }
    }
}
