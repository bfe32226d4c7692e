//! `taskmate list` command implementation

use anyhow::Result;
use clap::Args;

use crate::session::Session;
use crate::task::Task;

#[derive(Args)]
pub struct ListArgs {
    /// Only tasks that are not done yet
    #[arg(long)]
    pending: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(mut session: Session, args: ListArgs) -> Result<()> {
    if let Some(notice) = session.take_notice() {
        eprintln!("{}", notice);
    }

    let tasks = if args.pending {
        session.tasks().incomplete_tasks()
    } else {
        session.tasks().clone()
    };

    if args.json {
        let items: Vec<&Task> = tasks.iter().collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found in {}.", session.storage().path().display());
        return Ok(());
    }

    println!("{}", tasks.to_display());
    Ok(())
}
