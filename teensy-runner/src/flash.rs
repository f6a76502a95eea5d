//! Flash orchestration: ELF -> Intel HEX -> loader, inside a scoped workspace.

use runner_hal::{ProcessOps, Workspace};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::config::{FlashConfig, HEX_FILE_NAME};
use crate::errors::{RunnerError, RunnerResult};

/// Paths a completed run used. Both are gone by the time this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashOutcome {
    pub workspace: PathBuf,
    pub hex: PathBuf,
}

/// Convert `binary` to Intel HEX and flash it.
///
/// The workspace holding the HEX artifact is removed on every return path.
pub fn flash<P: ProcessOps + ?Sized>(
    hal: &P,
    cfg: &FlashConfig,
    binary: &Path,
) -> RunnerResult<FlashOutcome> {
    check_binary(binary)?;

    let workspace =
        Workspace::create(cfg.workspace_parent.as_deref()).map_err(RunnerError::Workspace)?;
    let outcome = FlashOutcome {
        workspace: workspace.path().to_path_buf(),
        hex: workspace.join(HEX_FILE_NAME),
    };

    // On error the guard drops here and takes the directory with it.
    run_steps(hal, cfg, binary, &outcome.hex)?;

    if let Err(err) = workspace.close() {
        log::warn!(
            "failed to remove workspace {}: {}",
            outcome.workspace.display(),
            err
        );
    }
    Ok(outcome)
}

fn run_steps<P: ProcessOps + ?Sized>(
    hal: &P,
    cfg: &FlashConfig,
    binary: &Path,
    hex: &Path,
) -> RunnerResult<()> {
    let convert = cfg.conversion_command(binary, hex);
    log::info!("Converting {} to Intel HEX", binary.display());
    log::info!("{}", convert);
    hal.run_command(&convert, cfg.convert_timeout)
        .map_err(RunnerError::Conversion)?;

    let load = cfg.flash_command(hex);
    log::info!("Flashing {}", cfg.mcu);
    log::info!("{}", load);
    hal.run_command(&load, cfg.flash_timeout)
        .map_err(RunnerError::Flash)?;
    Ok(())
}

fn check_binary(binary: &Path) -> RunnerResult<()> {
    let meta = fs::metadata(binary).map_err(|source| RunnerError::Binary {
        path: binary.to_path_buf(),
        source,
    })?;
    if !meta.is_file() {
        return Err(RunnerError::NotAFile(binary.to_path_buf()));
    }
    File::open(binary).map_err(|source| RunnerError::Binary {
        path: binary.to_path_buf(),
        source,
    })?;
    Ok(())
}
