use clap::{Parser, Subcommand};

use crate::task::Status;

#[derive(Parser, Debug)]
#[command(
    name = "task-tracker",
    about = "Track short personal tasks from the command line.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a new task
    Add {
        /// The task description; multiple words are joined with spaces
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// List all tasks, or only those with a given status
    List {
        /// Show only tasks with this status
        status: Option<Status>,
    },
    /// Update a task's description and/or status
    Update {
        /// Id of the task to update
        id: u32,
        /// The new description; multiple words are joined with spaces
        #[arg(long, num_args = 1.., value_name = "TEXT")]
        description: Option<Vec<String>>,
        /// The new status
        #[arg(long, value_name = "STATUS")]
        status: Option<Status>,
    },
    /// Delete a task by id
    Delete {
        /// Id of the task to delete
        id: u32,
    },
}
