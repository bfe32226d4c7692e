//! Task record reader
//!
//! One task per line, fields separated by `|` and trimmed:
//! `T | 0 | Buy milk`, `D | 1 | Submit report | 2024-01-01 1800`.
//! Writing lives on [`Task::to_record`] and [`TaskList::to_records`].

use super::list::TaskList;
use super::model::{Task, FIELD_SEPARATOR};
use crate::error::{Error, Result};

/// Decode a single record line. `line` is the 1-based line number used in errors.
pub fn decode(record: &str, line: usize) -> Result<Task> {
    let corrupt = |reason: String| Error::CorruptRecord { line, reason };

    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).map(str::trim).collect();

    let completed = match fields.get(1) {
        Some(&"0") => false,
        Some(&"1") => true,
        Some(other) => return Err(corrupt(format!("completion flag must be 0 or 1, got '{other}'"))),
        None => return Err(corrupt("missing completion flag".to_string())),
    };

    let expected = match fields[0] {
        "T" => 3,
        "D" | "E" => 4,
        other => return Err(corrupt(format!("unknown task kind '{other}'"))),
    };
    if fields.len() != expected {
        return Err(corrupt(format!(
            "expected {} fields, found {}",
            expected,
            fields.len()
        )));
    }

    let task = match fields[0] {
        "T" => Task::todo(fields[2]),
        "D" => Task::deadline(fields[2], fields[3]),
        _ => Task::event(fields[2], fields[3]),
    };

    let mut task = task.map_err(|e| corrupt(e.to_string()))?;
    task.set_completed(completed);
    Ok(task)
}

/// Decode a whole task file. Blank lines are skipped.
pub fn decode_all(content: &str) -> Result<TaskList> {
    let mut tasks = TaskList::new();

    for (idx, record) in content.lines().enumerate() {
        if record.trim().is_empty() {
            continue;
        }
        tasks.add(decode(record, idx + 1)?);
    }

    Ok(tasks)
}
