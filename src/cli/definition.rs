//! Command-line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::config::ConfigCommands;
use super::exec::ExecArgs;
use super::list::ListArgs;

#[derive(Parser)]
#[command(name = "taskmate")]
#[command(about = "Track todos, deadlines and events with short text commands")]
#[command(version)]
pub struct Cli {
    /// Task file to read and write (overrides the config file)
    #[arg(short, long, global = true, env = "TASKMATE_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single command line, e.g. `taskmate exec todo read book`
    Exec(ExecArgs),

    /// Print the task list
    List(ListArgs),

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
