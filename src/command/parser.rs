//! Input line parser

use super::Command;
use crate::error::{Error, Result};
use crate::task::Task;

/// Parse one input line into a [`Command`].
///
/// The first whitespace-delimited word selects the command (case-sensitive);
/// the rest of the line is its operand.
pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Err(Error::invalid(
            "Please type a command. Type 'help' to see what I can do.",
        ));
    }

    let (keyword, operand) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword {
        "list" => Ok(Command::List),
        "pending" => Ok(Command::Pending),
        "help" => Ok(Command::Help),
        "bye" => Ok(Command::Exit),
        "todo" | "deadline" | "event" => Ok(Command::Add(Task::parse(line, false)?)),
        "mark" => Ok(Command::Mark(required(operand, "mark <task number>")?)),
        "unmark" => Ok(Command::Unmark(required(operand, "unmark <task number>")?)),
        "delete" => Ok(Command::Delete(required(operand, "delete <task number>")?)),
        "find" => Ok(Command::Find(required(operand, "find <keyword>")?)),
        _ => Err(Error::UnknownCommand(keyword.to_string())),
    }
}

fn required(operand: &str, usage: &str) -> Result<String> {
    if operand.is_empty() {
        return Err(Error::invalid(format!("Usage: {}", usage)));
    }
    Ok(operand.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskKind;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("list").unwrap(), Command::List);
        assert_eq!(parse("  list  ").unwrap(), Command::List);
        assert_eq!(parse("pending").unwrap(), Command::Pending);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("bye").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_add_commands() {
        match parse("todo read book").unwrap() {
            Command::Add(task) => {
                assert_eq!(task.description(), "read book");
                assert_eq!(task.kind(), &TaskKind::Todo);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        match parse("deadline report /by 2024-12-01").unwrap() {
            Command::Add(task) => {
                assert_eq!(task.description(), "report");
                assert_eq!(task.kind().when(), Some("2024-12-01"));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        match parse("event sync\t/at 2024-12-01 10:00").unwrap() {
            Command::Add(task) => assert_eq!(task.kind().when(), Some("2024-12-01 1000")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_numeric_commands_keep_operand() {
        assert_eq!(parse("mark 2").unwrap(), Command::Mark("2".to_string()));
        assert_eq!(parse("unmark   3").unwrap(), Command::Unmark("3".to_string()));
        assert_eq!(parse("delete x").unwrap(), Command::Delete("x".to_string()));
        assert_eq!(parse("find old book").unwrap(), Command::Find("old book".to_string()));
    }

    #[test]
    fn test_parse_missing_operand() {
        for line in ["mark", "unmark ", "delete", "find   ", "todo", "deadline"] {
            assert!(
                matches!(parse(line), Err(Error::InvalidFormat(_))),
                "expected InvalidFormat for {line:?}"
            );
        }

        let err = parse("mark").unwrap_err();
        assert_eq!(err.to_string(), "Usage: mark <task number>");
    }

    #[test]
    fn test_parse_missing_separator() {
        assert!(matches!(
            parse("deadline report 2024-12-01"),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            parse("event party tonight"),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(parse("blah"), Err(Error::UnknownCommand(k)) if k == "blah"));
        assert!(matches!(parse("List"), Err(Error::UnknownCommand(_))));
    }

    #[test]
    fn test_parse_empty_line() {
        for line in ["", "   ", "\t\n"] {
            let err = parse(line).unwrap_err();
            assert!(matches!(err, Error::InvalidFormat(_)), "{line:?}");
            assert!(err.to_string().contains("Please type a command"));
        }
    }
}
