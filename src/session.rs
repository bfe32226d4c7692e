//! Session: owns the task list for the process lifetime and turns input
//! lines into reply text.

use tracing::warn;

use crate::command;
use crate::error::Error;
use crate::storage::Storage;
use crate::task::TaskList;

pub const GREETING: &str = "Hello! I'm Taskmate, your task tracker.\nWhat can I do for you? (type 'help' for commands)";

pub struct Session {
    tasks: TaskList,
    storage: Storage,
    notice: Option<String>,
}

impl Session {
    /// Load tasks from `storage`. A failed load leaves the session with an
    /// empty list and a notice for the user; it is never fatal.
    pub fn open(storage: Storage) -> Self {
        let (tasks, notice) = match storage.load() {
            Ok(tasks) => (tasks, None),
            Err(e) => {
                warn!("Starting with an empty list: {}", e);
                let mut notice = e.to_string();
                if matches!(e, Error::CorruptRecord { .. }) {
                    match storage.set_aside() {
                        Ok(kept) => notice.push_str(&format!(
                            "\nThe unreadable file was kept as {}.",
                            kept.display()
                        )),
                        Err(e) => notice.push_str(&format!("\n{}", e)),
                    }
                }
                notice.push_str("\nStarting with an empty task list.");
                (TaskList::new(), Some(notice))
            }
        };

        Self {
            tasks,
            storage,
            notice,
        }
    }

    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    /// The load failure message, if any; returned once.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Parse and run one input line. Always returns text; every failure is
    /// rendered as its message.
    pub fn respond(&mut self, input: &str) -> String {
        let command = match command::parse(input) {
            Ok(command) => command,
            Err(e) => return e.to_string(),
        };

        let reply = command.execute(&mut self.tasks);
        if !reply.modified {
            return reply.message;
        }

        match self.storage.save(&self.tasks) {
            Ok(()) => reply.message,
            Err(e) => {
                warn!("Failed to save tasks: {}", e);
                format!(
                    "{}\nWarning: your changes were not saved. {}",
                    reply.message, e
                )
            }
        }
    }

    /// Whether `input` is the exit command. Parsing only; nothing runs.
    pub fn is_exit(&self, input: &str) -> bool {
        command::parse(input)
            .map(|command| command.is_exit())
            .unwrap_or(false)
    }
}
