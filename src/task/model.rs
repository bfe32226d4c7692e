//! Task data model

use serde::Serialize;
use std::fmt;

use super::when;
use crate::error::{Error, Result};

/// Character that separates fields in a task record; never allowed in task text.
pub const FIELD_SEPARATOR: char = '|';

const DEADLINE_MARKER: &str = "/by ";
const EVENT_MARKER: &str = "/at ";

/// Task variant with its type-specific field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    Todo,
    Deadline { by: String },
    Event { at: String },
}

impl TaskKind {
    /// Keyword that creates this kind of task
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline { .. } => "deadline",
            Self::Event { .. } => "event",
        }
    }

    /// Single-letter marker used in display and records
    pub fn letter(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }

    /// The normalized date text, if this kind carries one
    pub fn when(&self) -> Option<&str> {
        match self {
            Self::Todo => None,
            Self::Deadline { by } => Some(by),
            Self::Event { at } => Some(at),
        }
    }
}

/// A task
///
/// Equality ignores the completion flag: two tasks are the same task when
/// kind, description and date agree.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    description: String,

    #[serde(flatten)]
    kind: TaskKind,

    completed: bool,
}

impl Task {
    /// Create a todo
    pub fn todo(description: &str) -> Result<Self> {
        Self::build(TaskKind::Todo, description)
    }

    /// Create a deadline due at `by` (normalized)
    pub fn deadline(description: &str, by: &str) -> Result<Self> {
        let by = checked_when(by, "deadline")?;
        Self::build(TaskKind::Deadline { by }, description)
    }

    /// Create an event happening at `at` (normalized)
    pub fn event(description: &str, at: &str) -> Result<Self> {
        let at = checked_when(at, "event")?;
        Self::build(TaskKind::Event { at }, description)
    }

    fn build(kind: TaskKind, description: &str) -> Result<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::invalid(format!(
                "The description of a {} cannot be empty.",
                kind.keyword()
            )));
        }
        check_record_safe(description, "Task descriptions")?;

        Ok(Self {
            description: description.to_string(),
            kind,
            completed: false,
        })
    }

    /// Parse `<keyword> <text>` into a task
    ///
    /// Accepted shapes: `todo <desc>`, `deadline <desc> /by <when>`,
    /// `event <desc> /at <when>`. Keywords are case-sensitive.
    pub fn parse(raw: &str, completed: bool) -> Result<Self> {
        let raw = raw.trim();
        let (keyword, rest) = match raw.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (raw, ""),
        };

        let mut task = match keyword {
            "todo" => Self::todo(rest)?,
            "deadline" => {
                let (description, by) = rest.split_once(DEADLINE_MARKER).ok_or_else(|| {
                    Error::invalid("Use the format: deadline <description> /by <date>")
                })?;
                Self::deadline(description, by)?
            }
            "event" => {
                let (description, at) = rest.split_once(EVENT_MARKER).ok_or_else(|| {
                    Error::invalid("Use the format: event <description> /at <date>")
                })?;
                Self::event(description, at)?
            }
            _ => return Err(Error::invalid("That is not a valid task type.")),
        };

        task.completed = completed;
        Ok(task)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Set the completion flag; the only mutation a task allows
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Whether the description contains `keyword` (case-sensitive, keyword trimmed)
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.description.contains(keyword.trim())
    }

    /// Format as a persisted record line (without trailing newline)
    pub fn to_record(&self) -> String {
        let flag = if self.completed { 1 } else { 0 };
        let mut line = format!("{} | {} | {}", self.kind.letter(), flag, self.description);

        if let Some(when) = self.kind.when() {
            line.push_str(&format!(" | {}", when));
        }

        line
    }
}

fn checked_when(raw: &str, keyword: &str) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::invalid(format!(
            "The date of a {} cannot be empty.",
            keyword
        )));
    }
    check_record_safe(raw, "Dates")?;
    Ok(when::normalize(raw))
}

/// Text stored in a record must stay on one line and never contain the separator.
fn check_record_safe(text: &str, what: &str) -> Result<()> {
    if text.contains(FIELD_SEPARATOR) {
        return Err(Error::invalid(format!(
            "{} cannot contain '{}'.",
            what, FIELD_SEPARATOR
        )));
    }
    if text.chars().any(char::is_control) {
        return Err(Error::invalid(format!(
            "{} must fit on a single line.",
            what
        )));
    }
    Ok(())
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.description == other.description
    }
}

impl Eq for Task {}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.letter(), mark, self.description)?;

        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { at } => write!(f, " (at: {})", at),
        }
    }
}
