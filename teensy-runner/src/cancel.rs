//! Ctrl+C cancellation handling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static HANDLER_SET: OnceLock<()> = OnceLock::new();

/// Route Ctrl+C into `flag` instead of killing the process outright, so the
/// running step can stop its child and the workspace guard still runs.
pub fn install_ctrlc_handler(flag: Arc<AtomicBool>) -> anyhow::Result<()> {
    if HANDLER_SET.get().is_some() {
        return Ok(());
    }

    ctrlc::set_handler(move || {
        flag.store(true, Ordering::Relaxed);
        log::info!("Cancellation requested (Ctrl+C).");
    })?;

    let _ = HANDLER_SET.set(());
    Ok(())
}
