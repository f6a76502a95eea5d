use runner_hal::CommandSpec;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Cli;

pub const DEFAULT_OBJCOPY: &str = "llvm-objcopy";
pub const DEFAULT_LOADER: &str = "teensy_loader_cli";
pub const DEFAULT_MCU: &str = "TEENSY40";
/// Wait for the bootloader, soft-reboot into it, verify after writing.
pub const DEFAULT_LOADER_FLAGS: &str = "-wsv";
pub const DEFAULT_CONVERT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_FLASH_TIMEOUT_SECS: u64 = 300;

pub const HEX_FILE_NAME: &str = "firmware.hex";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashConfig {
    pub objcopy: String,
    pub loader: String,
    pub mcu: String,
    pub loader_flags: String,
    pub workspace_parent: Option<PathBuf>,
    pub convert_timeout: Duration,
    pub flash_timeout: Duration,
    pub dry_run: bool,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            objcopy: DEFAULT_OBJCOPY.to_string(),
            loader: DEFAULT_LOADER.to_string(),
            mcu: DEFAULT_MCU.to_string(),
            loader_flags: DEFAULT_LOADER_FLAGS.to_string(),
            workspace_parent: None,
            convert_timeout: Duration::from_secs(DEFAULT_CONVERT_TIMEOUT_SECS),
            flash_timeout: Duration::from_secs(DEFAULT_FLASH_TIMEOUT_SECS),
            dry_run: false,
        }
    }
}

impl From<&Cli> for FlashConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            objcopy: cli.objcopy.clone(),
            loader: cli.loader.clone(),
            mcu: cli.mcu.clone(),
            workspace_parent: cli.tmp_dir.clone(),
            convert_timeout: Duration::from_secs(cli.convert_timeout_secs),
            flash_timeout: Duration::from_secs(cli.flash_timeout_secs),
            dry_run: cli.dry_run,
            ..Self::default()
        }
    }
}

impl FlashConfig {
    /// `<objcopy> -O ihex <binary> <hex>`
    pub fn conversion_command(&self, binary: &Path, hex: &Path) -> CommandSpec {
        CommandSpec::new(&self.objcopy)
            .args(["-O", "ihex"])
            .arg(binary)
            .arg(hex)
    }

    /// `<loader> --mcu=<MCU> <flags> <hex>`
    pub fn flash_command(&self, hex: &Path) -> CommandSpec {
        CommandSpec::new(&self.loader)
            .arg(format!("--mcu={}", self.mcu))
            .arg(&self.loader_flags)
            .arg(hex)
    }

    pub fn success_message(&self) -> String {
        format!(
            "{} successfully flashed. Read the results of the benchmark from its UART2.",
            self.mcu
        )
    }
}
