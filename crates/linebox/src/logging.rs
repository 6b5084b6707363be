//! File logging. The terminal belongs to the UI, so logs go to disk.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Name of the log file inside the data directory.
const LOG_FILE: &str = "linebox.log";

/// Location of the log file, if a data directory is available.
pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "linebox", "linebox").map(|dirs| dirs.data_local_dir().join(LOG_FILE))
}

/// Install the global subscriber. Filter comes from `RUST_LOG`, default `info`.
///
/// Returns the log path, or `None` when no data directory exists and
/// logging is disabled.
pub fn init() -> color_eyre::Result<Option<PathBuf>> {
    let Some(path) = log_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("failed to install log subscriber: {e}"))?;
    Ok(Some(path))
}
