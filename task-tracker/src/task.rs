use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single to-do item. Serialized field names match the storage file
/// format (`createdAt`, `updatedAt`).
#[derive(Debug, Eq, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle label of a task. Transitions are unrestricted; there is no
/// terminal state.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: 1,
            description: "Test task".to_string(),
            status: Status::InProgress,
            created_at: "2023-01-01T00:00:00Z".parse().unwrap(),
            updated_at: "2023-01-02T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_task_serializes_with_storage_field_names() {
        let json = serde_json::to_value(sample_task()).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["description"], "Test task");
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["createdAt"], "2023-01-01T00:00:00Z");
        assert_eq!(json["updatedAt"], "2023-01-02T00:00:00Z");
    }

    #[test]
    fn test_task_round_trips_through_json() {
        let task = sample_task();

        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, task);
    }

    #[test]
    fn test_status_uses_kebab_case_labels() {
        assert_eq!(Status::Todo.to_string(), "todo");
        assert_eq!(Status::InProgress.to_string(), "in-progress");
        assert_eq!(Status::Done.to_string(), "done");
    }

    #[test]
    fn test_status_defaults_to_todo() {
        assert_eq!(Status::default(), Status::Todo);
    }
}
