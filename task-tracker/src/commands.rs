use anyhow::Result;
use prettytable::{Table, row};

use crate::repository::TaskRepository;
use crate::storage::TaskStore;
use crate::task::{Status, Task};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn add(store: &TaskStore, description: &str) -> Result<()> {
    if description.trim().is_empty() {
        println!("Error: Task description cannot be empty.");
        return Ok(());
    }
    let mut repository = TaskRepository::new(store.load()?);
    let id = repository.add(description.to_string());
    store.save(repository.tasks())?;
    println!("Task added: {description} (ID: {id})");
    Ok(())
}

pub fn list(store: &TaskStore, status: Option<Status>) -> Result<()> {
    let repository = TaskRepository::new(store.load()?);
    let tasks = repository.filtered(status);
    if tasks.is_empty() {
        println!("No tasks available. Use the 'add' command to create a task.");
        return Ok(());
    }
    print_table(&tasks);
    Ok(())
}

fn print_table(tasks: &[&Task]) {
    let mut table = Table::new();
    table.add_row(row!["ID", "Description", "Status", "Created At", "Updated At"]);
    for task in tasks {
        table.add_row(row![
            task.id,
            task.description,
            task.status,
            task.created_at.format(TIME_FORMAT),
            task.updated_at.format(TIME_FORMAT),
        ]);
    }
    table.printstd();
}

pub fn update(
    store: &TaskStore,
    id: u32,
    description: Option<&str>,
    status: Option<Status>,
) -> Result<()> {
    let mut repository = TaskRepository::new(store.load()?);
    if !repository.update(id, description, status) {
        println!("Error: Task with ID {id} not found.");
        return Ok(());
    }
    store.save(repository.tasks())?;
    println!("Task ID {id} updated successfully.");
    Ok(())
}

pub fn delete(store: &TaskStore, id: u32) -> Result<()> {
    let mut repository = TaskRepository::new(store.load()?);
    if !repository.delete(id) {
        println!("Error: Task with ID {id} not found.");
        return Ok(());
    }
    store.save(repository.tasks())?;
    println!("Task ID {id} deleted successfully.");
    Ok(())
}
