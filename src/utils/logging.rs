//! File logger setup.
//!
//! The game owns the terminal, so log output goes to ~/.skyhop/skyhop.log.
//! `RUST_LOG` picks the filter, `info` when unset.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use env_logger::{Env, Target};

use super::persistence::app_path;
use crate::core::constants::LOG_FILE;

/// Install the global logger, returning the log file path.
///
/// Fails only when the log file cannot be opened. A logger that is already
/// installed (tests, repeated calls) is left in place.
pub fn init() -> io::Result<PathBuf> {
    let path = app_path(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let result = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
    if result.is_err() {
        log::debug!("logger already installed");
    }
    Ok(path)
}
