use super::{sheet, StoreError};
use crate::libs::task::{Task, TaskDraft, TaskPatch};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Owned task table mirrored to a workbook file.
///
/// Reads hand out copies, so a snapshot never changes after it is taken. Every
/// mutation is persisted before it becomes visible: if writing the file fails the
/// in-memory table is left as it was and the error is returned.
pub struct TaskStore {
    path: PathBuf,
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    /// Opens the store backed by `path`, loading whatever the file holds.
    ///
    /// A missing file gives an empty store. So does a file that cannot be read or
    /// parsed; the failure is logged and the file itself is left untouched until
    /// the next save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = Self::load(&path);
        Self {
            path,
            tasks: RwLock::new(tasks),
        }
    }

    fn load(path: &Path) -> Vec<Task> {
        if !path.exists() {
            debug!(path = %path.display(), "Tasks file not found, starting with an empty table");
            return Vec::new();
        }
        match sheet::read_tasks(path) {
            Ok(tasks) => {
                debug!(path = %path.display(), count = tasks.len(), "Loaded tasks");
                tasks
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load tasks file, starting with an empty table");
                Vec::new()
            }
        }
    }

    /// Discards the in-memory table and loads the file again.
    pub fn reload(&self) {
        let tasks = Self::load(&self.path);
        *self.tasks.write() = tasks;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the whole table to the backing file.
    pub fn save(&self) -> Result<(), StoreError> {
        let tasks = self.tasks.read();
        sheet::write_tasks(&self.path, &tasks)
    }

    /// Appends a new task and returns its freshly generated id.
    pub fn create(&self, draft: TaskDraft) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.mutate(|tasks| tasks.push(draft.into_task(id.clone())))?;
        debug!(task_id = %id, "Created task");
        Ok(id)
    }

    /// Overwrites the attributes supplied in `patch` on the task with `id`.
    ///
    /// Returns `Ok(false)` without touching anything when no task has that id.
    pub fn update(&self, id: &str, patch: &TaskPatch) -> Result<bool, StoreError> {
        let mut tasks = self.tasks.write();
        let index = match tasks.iter().position(|task| task.id == id) {
            Some(index) => index,
            None => return Ok(false),
        };

        let mut next = tasks.clone();
        patch.apply(&mut next[index]);
        sheet::write_tasks(&self.path, &next)?;
        *tasks = next;
        debug!(task_id = %id, "Updated task");
        Ok(true)
    }

    /// Removes every task with `id` and returns how many were removed.
    ///
    /// The table is persisted even when nothing matched.
    pub fn delete(&self, id: &str) -> Result<usize, StoreError> {
        let mut removed = 0;
        self.mutate(|tasks| {
            let before = tasks.len();
            tasks.retain(|task| task.id != id);
            removed = before - tasks.len();
        })?;
        debug!(task_id = %id, removed, "Deleted task");
        Ok(removed)
    }

    /// Returns a copy of the whole table.
    pub fn get_all(&self) -> Vec<Task> {
        self.tasks.read().clone()
    }

    pub fn get(&self, id: &str) -> Option<Task> {
        self.tasks.read().iter().find(|task| task.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tasks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.read().is_empty()
    }

    fn mutate<F>(&self, change: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Vec<Task>),
    {
        let mut tasks = self.tasks.write();
        let mut next = tasks.clone();
        change(&mut next);
        sheet::write_tasks(&self.path, &next)?;
        *tasks = next;
        Ok(())
    }
}
