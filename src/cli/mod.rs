//! CLI command implementations

pub mod config;
pub mod definition;
pub mod exec;
pub mod list;
pub mod repl;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::session::Session;
use crate::storage::Storage;

/// Build the session from config plus the `--file` override
pub fn open_session(file: Option<PathBuf>) -> Result<Session> {
    let config = Config::load()?;
    let path = config.task_file(file)?;
    debug!("Using task file {}", path.display());

    let storage = Storage::new(path).with_backup(config.storage.backup);
    Ok(Session::open(storage))
}
