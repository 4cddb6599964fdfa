use chrono::Utc;

use crate::task::{Status, Task};

/// In-memory task collection. Insertion order is preserved and the
/// sequence is never re-sorted; ids are unique by construction.
#[derive(Debug, Default, Clone)]
pub struct TaskRepository {
    tasks: Vec<Task>,
}

impl TaskRepository {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The next id depends only on the current collection state, not on
    /// history: max existing id plus one, or 1 for an empty collection.
    fn next_id(&self) -> u32 {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }

    pub fn add(&mut self, description: String) -> u32 {
        let id = self.next_id();
        let now = Utc::now();
        self.tasks.push(Task {
            id,
            description,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// All tasks, or only those matching the given status, in insertion
    /// order.
    pub fn filtered(&self, status: Option<Status>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| status.is_none_or(|wanted| task.status == wanted))
            .collect()
    }

    /// Applies the given changes to the task with this id. A provided
    /// description only replaces the old one when it is non-empty after
    /// trimming; `updated_at` is refreshed even when neither field is
    /// given. Returns false when no task has this id.
    pub fn update(&mut self, id: u32, description: Option<&str>, status: Option<Status>) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        if let Some(description) = description
            && !description.trim().is_empty()
        {
            task.description = description.to_string();
        }
        if let Some(status) = status {
            task.status = status;
        }
        task.updated_at = Utc::now();
        true
    }

    /// Removes exactly the task with this id, keeping the order of the
    /// rest. Returns false when no task has this id.
    pub fn delete(&mut self, id: u32) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        true
    }
}
