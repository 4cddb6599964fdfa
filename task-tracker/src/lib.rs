pub mod cli;
pub mod commands;
pub mod repository;
pub mod storage;
pub mod task;

use anyhow::Result;

use crate::cli::{Cli, Command};
use crate::storage::TaskStore;

/// Dispatches a parsed command to the matching task operation.
pub fn run(cli: Cli, store: &TaskStore) -> Result<()> {
    match cli.command {
        Command::Add { description } => commands::add(store, &description.join(" ")),
        Command::List { status } => commands::list(store, status),
        Command::Update {
            id,
            description,
            status,
        } => {
            let description = description.map(|words| words.join(" "));
            commands::update(store, id, description.as_deref(), status)
        }
        Command::Delete { id } => commands::delete(store, id),
    }
}
