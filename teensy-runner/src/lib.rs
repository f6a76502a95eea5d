//! teensy-runner: convert a firmware binary to Intel HEX and flash it.
//!
//! The process entry point lives in `main.rs`; everything else is here so the
//! orchestration can be driven from tests with a fake HAL.

pub mod cancel;
pub mod cli;
pub mod config;
pub mod errors;
pub mod flash;
pub mod logging;

use runner_hal::ProcessOps;

pub use cli::Cli;
pub use config::FlashConfig;
pub use errors::{RunnerError, RunnerResult};
pub use flash::{flash, FlashOutcome};

/// Run one invocation described by `cli` and print the confirmation line.
pub fn run<P: ProcessOps + ?Sized>(hal: &P, cli: &Cli) -> RunnerResult<FlashOutcome> {
    let binary = cli.binary.as_deref().ok_or(RunnerError::Usage)?;
    let cfg = FlashConfig::from(cli);

    let outcome = flash(hal, &cfg, binary)?;
    if cfg.dry_run {
        println!("DRY RUN: no device was flashed.");
    } else {
        println!("{}", cfg.success_message());
    }
    Ok(outcome)
}
