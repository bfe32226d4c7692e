//! Commands parsed from one input line and executed against a task list

mod parser;

pub use parser::parse;

use std::fmt;
use tracing::debug;

use crate::error::{Error, Result};
use crate::task::{Task, TaskList};

pub const HELP_TEXT: &str = "Here is what I understand:
  list                              show all tasks
  pending                           show tasks not yet done
  todo <description>                add a todo
  deadline <description> /by <date> add a deadline
  event <description> /at <date>    add an event
  mark <number>                     mark a task as done
  unmark <number>                   mark a task as not done
  delete <number>                   remove a task
  find <keyword>                    show tasks containing a keyword
  help                              show this message
  bye                               leave

Dates like 2024-12-01, 1/12/2024, 2024-12-01 1800 or 1/12/2024 18:00 are
recognized; anything else is kept as written.";

/// One user action with its operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Task),
    Delete(String),
    Mark(String),
    Unmark(String),
    List,
    Pending,
    Find(String),
    Help,
    Exit,
}

/// Response text plus whether the task list changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub message: String,
    pub modified: bool,
}

impl Reply {
    fn changed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            modified: true,
        }
    }

    fn unchanged(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            modified: false,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Command {
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Run against `tasks`. Bad task numbers become the reply text; they
    /// never escape as errors.
    pub fn execute(&self, tasks: &mut TaskList) -> Reply {
        debug!(command = ?self, "executing");

        match self {
            Command::Add(task) => add(tasks, task.clone()),
            Command::Delete(number) => by_number(tasks, number, delete),
            Command::Mark(number) => by_number(tasks, number, |tasks, index| {
                let task = tasks.mark(index)?;
                Ok(Reply::changed(format!(
                    "Nice! I've marked this task as done:\n  {}",
                    task
                )))
            }),
            Command::Unmark(number) => by_number(tasks, number, |tasks, index| {
                let task = tasks.unmark(index)?;
                Ok(Reply::changed(format!(
                    "OK, I've marked this task as not done yet:\n  {}",
                    task
                )))
            }),
            Command::List => listing(
                tasks,
                "Here are the tasks in your list:",
                "Your list is empty.",
            ),
            Command::Pending => listing(
                &tasks.incomplete_tasks(),
                "Here are the tasks you have not finished:",
                "Nothing pending. Everything is done!",
            ),
            Command::Find(keyword) => listing(
                &tasks.find_keyword(keyword),
                "Here are the matching tasks in your list:",
                "No tasks match that keyword.",
            ),
            Command::Help => Reply::unchanged(HELP_TEXT),
            Command::Exit => Reply::unchanged("Bye. Hope to see you again soon!"),
        }
    }
}

fn add(tasks: &mut TaskList, task: Task) -> Reply {
    let shown = task.to_string();
    if !tasks.add(task) {
        return Reply::unchanged(format!(
            "That task is already in your list:\n  {}",
            shown
        ));
    }

    Reply::changed(format!(
        "Got it. I've added this task:\n  {}\n{}",
        shown,
        count_line(tasks)
    ))
}

fn delete(tasks: &mut TaskList, index: usize) -> Result<Reply> {
    let removed = tasks.delete(index)?;
    Ok(Reply::changed(format!(
        "Noted. I've removed this task:\n  {}\n{}",
        removed,
        count_line(tasks)
    )))
}

fn by_number(
    tasks: &mut TaskList,
    number: &str,
    action: impl FnOnce(&mut TaskList, usize) -> Result<Reply>,
) -> Reply {
    let result = parse_number(number)
        .and_then(|n| tasks.index_of(n))
        .and_then(|index| action(tasks, index));

    match result {
        Ok(reply) => reply,
        Err(e) => Reply::unchanged(e.to_string()),
    }
}

fn parse_number(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::invalid(format!("'{}' is not a task number.", raw.trim())))
}

fn listing(tasks: &TaskList, header: &str, empty: &str) -> Reply {
    if tasks.is_empty() {
        return Reply::unchanged(empty);
    }
    Reply::unchanged(format!("{}\n{}", header, tasks.to_display()))
}

fn count_line(tasks: &TaskList) -> String {
    match tasks.len() {
        1 => "Now you have 1 task in the list.".to_string(),
        n => format!("Now you have {} tasks in the list.", n),
    }
}
