use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between an input line and its reply.
///
/// Every variant carries a message fit to show the user as-is.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Sorry, I don't know what '{0}' means. Type 'help' to see what I can do.")]
    UnknownCommand(String),

    #[error("{0}")]
    InvalidFormat(String),

    #[error("There is no task {number}. You have {size} task(s) in the list.")]
    IndexOutOfRange { number: i64, size: usize },

    #[error("Could not access task file {}: {source}", .path.display())]
    PersistenceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Task file is corrupt at line {line}: {reason}")]
    CorruptRecord { line: usize, reason: String },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidFormat(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
