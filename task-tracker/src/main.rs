use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use log4rs::Config;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use task_tracker::cli::Cli;
use task_tracker::storage::TaskStore;

const TASKS_FILE: &str = "tasks.json";

fn init_logging() {
    let stdout = ConsoleAppender::builder().build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Warn))
        .expect("logging configuration is valid");
    log4rs::init_config(config).expect("logging is initialized once");
}

fn main() -> Result<()> {
    init_logging();

    // Parse first: the help and usage-error paths must not touch storage.
    let cli = Cli::parse();

    let store = TaskStore::new(TASKS_FILE);
    store.initialize()?;
    task_tracker::run(cli, &store)
}
