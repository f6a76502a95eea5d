//! CLI argument parsing for teensy-runner.
//!
//! Usable as a cargo `runner`: cargo appends the built binary as the first
//! positional argument.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::{
    DEFAULT_CONVERT_TIMEOUT_SECS, DEFAULT_FLASH_TIMEOUT_SECS, DEFAULT_LOADER, DEFAULT_MCU,
    DEFAULT_OBJCOPY,
};

#[derive(Parser, Debug)]
#[command(name = "teensy-runner")]
#[command(version, about = "Convert a firmware binary to Intel HEX and flash it onto a Teensy")]
pub struct Cli {
    /// Compiled firmware image (ELF) to flash
    pub binary: Option<PathBuf>,

    /// Microcontroller identifier passed to the loader
    #[arg(long, default_value = DEFAULT_MCU)]
    pub mcu: String,

    /// Object-copy tool used for the Intel HEX conversion
    #[arg(long, default_value = DEFAULT_OBJCOPY)]
    pub objcopy: String,

    /// Device flashing tool
    #[arg(long, default_value = DEFAULT_LOADER)]
    pub loader: String,

    /// Parent directory for the temporary workspace (default: system temp dir)
    #[arg(long, value_name = "DIR")]
    pub tmp_dir: Option<PathBuf>,

    /// Seconds before the conversion step is killed
    #[arg(long, default_value_t = DEFAULT_CONVERT_TIMEOUT_SECS)]
    pub convert_timeout_secs: u64,

    /// Seconds before the flash step is killed (includes waiting for the board)
    #[arg(long, default_value_t = DEFAULT_FLASH_TIMEOUT_SECS)]
    pub flash_timeout_secs: u64,

    /// Log the commands but do not run them
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn usage() -> String {
        Cli::command().render_usage().to_string()
    }
}
