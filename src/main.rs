//! Taskmate - personal task tracker

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskmate::cli::{self, Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if std::env::var("TASKMATE_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskmate=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "taskmate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Config { command }) => cli::config::run(command, cli.file),
        Some(Commands::Exec(args)) => cli::exec::run(cli::open_session(cli.file)?, args).await,
        Some(Commands::List(args)) => cli::list::run(cli::open_session(cli.file)?, args).await,
        None => cli::repl::run(cli::open_session(cli.file)?).await,
    }
}
