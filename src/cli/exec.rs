//! `taskmate exec` command implementation

use anyhow::Result;
use clap::Args;

use crate::session::Session;

#[derive(Args)]
pub struct ExecArgs {
    /// Words of the command line, joined with spaces
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

pub async fn run(mut session: Session, args: ExecArgs) -> Result<()> {
    if let Some(notice) = session.take_notice() {
        eprintln!("{}", notice);
    }

    let line = args.words.join(" ");
    println!("{}", session.respond(&line));
    Ok(())
}
