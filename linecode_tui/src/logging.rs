use std::{fs::File, path::Path, sync::Mutex};

use crate::error::{LinecodeTuiError, LinecodeTuiResult};

/// Sends `tracing` output to `path`. The terminal belongs to the UI, so
/// without a path nothing is logged.
pub fn init(path: Option<&Path>, verbose: bool) -> LinecodeTuiResult<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    let max_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(max_level)
        .try_init()
        .map_err(|e| LinecodeTuiError::Logging(e.to_string()))?;
    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
