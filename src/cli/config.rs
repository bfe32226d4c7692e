//! `taskmate config` command implementation

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::config::{config_path, save_config, Config};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a config file with default settings (keeps an existing one)
    Init,

    /// Print the config file location and the task file in use
    Show,
}

pub fn run(command: ConfigCommands, file: Option<PathBuf>) -> Result<()> {
    match command {
        ConfigCommands::Init => run_init(),
        ConfigCommands::Show => run_show(file),
    }
}

fn run_init() -> Result<()> {
    let path = config_path()?;
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    save_config(&Config::default())?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn run_show(file: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    println!("Config file: {}", config_path()?.display());
    println!("Task file:   {}", config.task_file(file)?.display());
    println!("Backups:     {}", if config.storage.backup { "on" } else { "off" });
    Ok(())
}
