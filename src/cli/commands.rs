use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dk", about = concat!("[+] docket v", env!("CARGO_PKG_VERSION"), " - your list lives on the server"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Server base URL (overrides config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Session id scoping which tasks are visible (overrides config)
    #[arg(long, global = true)]
    pub session: Option<i64>,

    /// Use an alternate config file
    #[arg(short = 'C', long = "config", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the session's tasks
    List,
    /// Add tasks; parts split on ';', an inline #tag becomes the first tag
    Add(AddArgs),
    /// Toggle a task's completion
    Toggle(TaskIdArgs),
    /// Change a task's description
    Rename(RenameArgs),
    /// Delete a task
    Delete(TaskIdArgs),
    /// List all tags
    Tags,
    /// Tag management
    Tag(TagCmd),
}

#[derive(Args)]
pub struct AddArgs {
    /// Entry text, e.g. "Buy milk #errands; Call mom"
    pub entry: String,
}

#[derive(Args)]
pub struct TaskIdArgs {
    pub task_id: i64,
}

#[derive(Args)]
pub struct RenameArgs {
    pub task_id: i64,
    pub description: String,
}

#[derive(Args)]
pub struct TagCmd {
    #[command(subcommand)]
    pub command: TagCommands,
}

#[derive(Subcommand)]
pub enum TagCommands {
    /// Attach a tag to a task (the tag is created on first use)
    Add { task_id: i64, name: String },
    /// Remove a tag from one task
    Rm { task_id: i64, name: String },
    /// Set a tag's color: a palette name (red, cyan, ...) or "#RRGGBB"
    Color { tag_id: i64, color: String },
    /// Delete a tag everywhere; refused while tasks still use it
    Delete { tag_id: i64 },
}
