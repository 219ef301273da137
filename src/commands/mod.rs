pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod save;
pub mod watch;

use crate::libs::config::Config;
use crate::store::TaskStore;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Change fields of an existing task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show all tasks")]
    List,
    #[command(about = "Write the task table to the tasks file")]
    Save,
    #[command(about = "Export all tasks to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Watch the task table and show reminders when tasks start")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Tasks file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args, &open_store(cli.file)?),
            Commands::Edit(args) => edit::cmd(args, &open_store(cli.file)?),
            Commands::Delete(args) => delete::cmd(args, &open_store(cli.file)?),
            Commands::List => list::cmd(&open_store(cli.file)?),
            Commands::Save => save::cmd(&open_store(cli.file)?),
            Commands::Export(args) => export::cmd(args, &open_store(cli.file)?),
            Commands::Watch => watch::cmd(open_store(cli.file)?).await,
        }
    }
}

/// Opens the store at `file`, or at the configured tasks file.
pub fn open_store(file: Option<PathBuf>) -> Result<TaskStore> {
    let path = match file {
        Some(path) => path,
        None => Config::read()?.tasks_file()?,
    };
    Ok(TaskStore::open(path))
}
