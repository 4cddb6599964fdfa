use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::task::{Status, Task};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of a task. `status` and the timestamps are optional so
/// hand-edited or partially written files still load; missing fields are
/// defaulted once, at load time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: u32,
    description: String,
    status: Option<Status>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl TaskRecord {
    /// Returns the normalized task and whether any default was filled in.
    fn normalize(self, now: DateTime<Utc>) -> (Task, bool) {
        let filled =
            self.status.is_none() || self.created_at.is_none() || self.updated_at.is_none();
        let task = Task {
            id: self.id,
            description: self.description,
            status: self.status.unwrap_or_default(),
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        };
        (task, filled)
    }
}

/// Reads and writes the whole task collection as a pretty-printed JSON
/// array at a caller-supplied path.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the storage file holding an empty collection if it does not
    /// exist yet. Never touches an existing file.
    pub fn initialize(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            return Ok(());
        }
        self.save(&[])
    }

    /// Reads the whole collection. An absent file is an empty collection,
    /// and unparsable content is reported and substituted with an empty
    /// collection instead of failing the process; the damaged file itself
    /// is left alone until the next mutation saves over it. Records with
    /// missing fields are normalized and the repaired collection is
    /// persisted right away.
    pub fn load(&self) -> Result<Vec<Task>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let records: Vec<TaskRecord> = match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "tasks file {} is corrupted ({err}), starting with an empty list",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
        };

        let now = Utc::now();
        let mut filled_any = false;
        let tasks: Vec<Task> = records
            .into_iter()
            .map(|record| {
                let (task, filled) = record.normalize(now);
                filled_any |= filled;
                task
            })
            .collect();

        if filled_any {
            info!(
                "filled missing fields in {}, persisting the normalized tasks",
                self.path.display()
            );
            self.save(&tasks)?;
        }
        debug!("loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    /// Overwrites the collection on disk. The content goes to a sibling
    /// temporary file first and is renamed over the target, so a crash
    /// mid-write cannot leave a half-written file at the storage path.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(tasks)?;
        let temp = self.path.with_extension("tmp");
        let mut file = File::create(&temp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
