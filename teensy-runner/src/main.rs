use clap::Parser;
use runner_hal::SystemHal;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use teensy_runner::{cancel, logging, Cli, RunnerError};

fn main() {
    let cli = Cli::parse();
    logging::init();

    let cancel_flag = Arc::new(AtomicBool::new(false));
    if let Err(err) = cancel::install_ctrlc_handler(Arc::clone(&cancel_flag)) {
        log::warn!("Ctrl+C handler not installed: {}", err);
    }
    let hal = SystemHal::new()
        .with_cancel_flag(cancel_flag)
        .with_dry_run(cli.dry_run);

    // Every guard is dropped inside `run`, so exiting afterwards is safe.
    if let Err(err) = teensy_runner::run(&hal, &cli) {
        match &err {
            RunnerError::Usage => eprintln!("{}\n\n{}", err, Cli::usage()),
            _ => log::error!("{}", err),
        }
        std::process::exit(err.exit_code());
    }
}
