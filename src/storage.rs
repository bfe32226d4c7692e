//! Task storage - record file persistence

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::task::{record, TaskList};

pub struct Storage {
    path: PathBuf,
    backup: bool,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup: true,
        }
    }

    /// Keep a `.bak` copy of the previous file on every save
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self) -> PathBuf {
        self.sibling("bak")
    }

    pub fn load(&self) -> Result<TaskList> {
        if !self.path.exists() {
            debug!("No task file at {}, starting empty", self.path.display());
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| self.unavailable(source))?;
        let tasks = record::decode_all(&content)?;
        info!("Loaded {} task(s) from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| self.unavailable(source))?;
            }
        }

        if self.backup && self.path.exists() {
            if let Err(e) = fs::copy(&self.path, self.backup_path()) {
                warn!("Failed to create backup: {}", e);
            }
        }

        fs::write(&self.path, tasks.to_records()).map_err(|source| self.unavailable(source))?;
        debug!("Saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Move an unreadable task file aside so later saves cannot overwrite it.
    ///
    /// Uses `<file>.corrupt`, or a timestamped name when that is taken.
    /// Returns the new location.
    pub fn set_aside(&self) -> Result<PathBuf> {
        let mut target = self.sibling("corrupt");
        if target.exists() {
            let stamp = Local::now().format("%Y%m%d%H%M%S");
            target = self.sibling(&format!("corrupt-{}", stamp));
        }

        fs::rename(&self.path, &target).map_err(|source| self.unavailable(source))?;
        warn!(
            "Moved unreadable task file {} to {}",
            self.path.display(),
            target.display()
        );
        Ok(target)
    }

    fn sibling(&self, extension: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".");
        name.push(extension);
        PathBuf::from(name)
    }

    fn unavailable(&self, source: std::io::Error) -> Error {
        Error::PersistenceUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}
