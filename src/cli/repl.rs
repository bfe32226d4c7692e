//! Interactive loop: one line in, one reply out, until `bye` or end of input

use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::session::Session;

const PROMPT: &str = "> ";

pub async fn run(session: Session) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = std::io::stdout();
    drive(session, stdin, &mut stdout.lock()).await
}

/// Feed lines from `input` to the session, writing replies to `out`.
///
/// Each line is fully handled before the next is read.
pub async fn drive<R, W>(mut session: Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", session.greeting())?;
    if let Some(notice) = session.take_notice() {
        writeln!(out, "{}", notice)?;
    }

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        writeln!(out, "{}", session.respond(&line))?;
        if session.is_exit(&line) {
            break;
        }
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::tempdir;

    async fn transcript(session: Session, input: &str) -> String {
        let mut out = Vec::new();
        drive(session, input.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_drive_stops_at_bye() {
        let temp = tempdir().unwrap();
        let session = Session::open(Storage::new(temp.path().join("tasks.txt")));

        let out = transcript(session, "todo read book\n\nbye\ntodo never added\n").await;
        assert!(out.starts_with("Hello!"));
        assert!(out.contains("[T][ ] read book"));
        assert!(out.contains("Bye."));
        assert!(!out.contains("never added"));
    }

    #[tokio::test]
    async fn test_drive_survives_bad_input() {
        let temp = tempdir().unwrap();
        let session = Session::open(Storage::new(temp.path().join("tasks.txt")));

        let out = transcript(session, "frobnicate\nmark 5\nlist\n").await;
        assert!(out.contains("I don't know what 'frobnicate' means"));
        assert!(out.contains("There is no task 5."));
        assert!(out.contains("Your list is empty."));
    }
}
