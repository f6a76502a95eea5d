//! HAL implementation that spawns real processes.

use super::{CommandSpec, ProcessOps};
use crate::{HalError, HalResult};
use std::process::{Child, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use wait_timeout::ChildExt;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Real HAL that runs commands on the host.
///
/// Child stdout/stderr are inherited so tool progress reaches the terminal.
#[derive(Debug, Clone, Default)]
pub struct SystemHal {
    cancel: Arc<AtomicBool>,
    dry_run: bool,
}

impl SystemHal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share a cancellation flag (typically set from a Ctrl+C handler).
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    fn cancel_requested(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
}

fn map_command_err(program: &str, err: std::io::Error) -> HalError {
    if err.kind() == std::io::ErrorKind::NotFound {
        return HalError::CommandNotFound(program.to_string());
    }
    HalError::Io(err)
}

fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

impl ProcessOps for SystemHal {
    fn run_command(&self, spec: &CommandSpec, timeout: Duration) -> HalResult<()> {
        let program = spec.program_name();
        if self.dry_run {
            log::info!("DRY RUN: {}", spec);
            return Ok(());
        }
        if self.cancel_requested() {
            return Err(HalError::Cancelled { program });
        }

        log::debug!("spawning {} (timeout {}s)", spec, timeout.as_secs());
        let mut cmd = spec.to_command();
        // Avoid commands hanging waiting for input.
        cmd.stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        let mut child = cmd.spawn().map_err(|e| map_command_err(&program, e))?;

        let start = Instant::now();
        let status = loop {
            if let Some(status) = child.wait_timeout(POLL_INTERVAL).map_err(HalError::Io)? {
                break status;
            }
            if self.cancel_requested() {
                kill_and_reap(&mut child);
                return Err(HalError::Cancelled { program });
            }
            if start.elapsed() >= timeout {
                kill_and_reap(&mut child);
                return Err(HalError::CommandTimeout {
                    program,
                    timeout_secs: timeout.as_secs(),
                });
            }
        };

        if !status.success() {
            // A tool killed by Ctrl+C exits before we observe the flag.
            if self.cancel_requested() {
                return Err(HalError::Cancelled { program });
            }
            return Err(HalError::CommandFailed {
                program,
                code: status.code(),
                stderr: String::new(),
            });
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn successful_command_returns_ok() {
        let hal = SystemHal::new();
        hal.run_command(&CommandSpec::new("true"), Duration::from_secs(5))
            .unwrap();
    }

    #[test]
    fn nonzero_exit_reports_code() {
        let hal = SystemHal::new();
        let spec = CommandSpec::new("sh").args(["-c", "exit 7"]);
        let err = hal.run_command(&spec, Duration::from_secs(5)).unwrap_err();
        match err {
            HalError::CommandFailed { program, code, .. } => {
                assert_eq!(program, "sh");
                assert_eq!(code, Some(7));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_program_maps_to_not_found() {
        let hal = SystemHal::new();
        let spec = CommandSpec::new("definitely-not-a-real-tool-4d1e");
        let err = hal.run_command(&spec, Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, HalError::CommandNotFound(p) if p == "definitely-not-a-real-tool-4d1e"));
    }

    #[test]
    fn timeout_kills_child() {
        let hal = SystemHal::new();
        let spec = CommandSpec::new("sleep").arg("5");
        let start = Instant::now();
        let err = hal
            .run_command(&spec, Duration::from_millis(300))
            .unwrap_err();
        assert!(matches!(err, HalError::CommandTimeout { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn cancel_flag_stops_before_spawn() {
        let cancel = Arc::new(AtomicBool::new(true));
        let hal = SystemHal::new().with_cancel_flag(cancel);
        let err = hal
            .run_command(&CommandSpec::new("true"), Duration::from_secs(5))
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn cancel_flag_kills_running_child() {
        let hal = SystemHal::new();
        let flag = hal.cancel_flag();
        let setter = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(200));
            flag.store(true, Ordering::Relaxed);
        });
        let err = hal
            .run_command(&CommandSpec::new("sleep").arg("5"), Duration::from_secs(10))
            .unwrap_err();
        setter.join().unwrap();
        assert!(err.is_cancelled());
    }

    #[test]
    fn dry_run_spawns_nothing() {
        let hal = SystemHal::new().with_dry_run(true);
        hal.run_command(
            &CommandSpec::new("definitely-not-a-real-tool-4d1e"),
            Duration::from_secs(1),
        )
        .unwrap();
    }
}
