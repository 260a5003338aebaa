use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bl", about = concat!("[*] backlog v", env!("CARGO_PKG_VERSION"), " - one list for everything"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory (default: ~/.backlog)
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks grouped by priority tier
    List(ListArgs),
    /// Add a task to the end of the backlog
    Add(AddArgs),
    /// Delete a task by id
    Delete(DeleteArgs),
    /// Show status counts
    Stats,
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by priority tier (urgent, high, medium, longterm)
    #[arg(long)]
    pub priority: Option<String>,
    /// Include context and next-action detail
    #[arg(long)]
    pub expand: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Priority tier (urgent, high, medium, longterm)
    #[arg(long, default_value = "high")]
    pub priority: String,
    /// Workflow status ("TO DO", "IN PROGRESS", ...)
    #[arg(long, default_value = "TO DO")]
    pub status: String,
    /// Free-text deadline label
    #[arg(long)]
    pub deadline: Option<String>,
    /// Background / context
    #[arg(long)]
    pub details: Option<String>,
    /// The very next concrete step
    #[arg(long)]
    pub action: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Task id
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
