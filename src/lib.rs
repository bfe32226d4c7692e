//! Taskmate library - task model, command parsing and persistence
//!
//! Input lines such as `deadline report /by 2024-12-01` are parsed into
//! commands, executed against a task list owned by a [`Session`], and the
//! list is rewritten to a plain record file after every change.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod task;

pub use command::{Command, Reply};
pub use error::{Error, Result};
pub use session::Session;
pub use storage::Storage;
pub use task::{Task, TaskKind, TaskList};
