//! Task board use-case service.
//!
//! # Responsibility
//! - Own the authoritative in-memory task list for a session.
//! - Mirror every mutation into the persistence adapter (write-through).
//! - Provide the grouping projection consumed by both presentation modes.
//!
//! # Invariants
//! - The in-memory list changes only after the adapter write succeeds, so
//!   session state never silently diverges from durable state.
//! - Reads never fail; only mutations can reject input or surface storage
//!   errors.

use crate::gesture::interpret_drag;
use crate::model::task::{normalize_title, Status, Task, TaskId, TaskValidationError};
use crate::repo::task_repo::{RepoError, TaskRepository};
use crate::service::projection::StatusGroups;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for task board use-cases.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Task input failed validation.
    Validation(TaskValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for TaskServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type ServiceResult<T> = Result<T, TaskServiceError>;

/// Session store over a persistence adapter.
pub struct TaskService<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service over an initialized adapter, loading the durable
    /// rows as the session's starting state.
    pub fn new(repo: R) -> ServiceResult<Self> {
        let tasks = repo.select_all()?;
        Ok(Self { repo, tasks })
    }

    /// The session task list in insertion (id) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Borrow of the underlying adapter, for callers that need raw counts.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Adds a task with status `To Do` and a storage-assigned id.
    ///
    /// # Errors
    /// - `Validation` when the trimmed title is empty; the store is left
    ///   unchanged.
    /// - `Repo` when the write-through insert fails; the store is left
    ///   unchanged.
    pub fn add_task(&mut self, title: &str) -> ServiceResult<Task> {
        let title = normalize_title(title)?;
        let id = self.repo.insert(&title, Status::Todo)?;

        let task = Task::new(id, title);
        self.tasks.push(task.clone());
        info!("event=task_add module=service status=ok task_id={id}");
        Ok(task)
    }

    /// Replaces one task's status, preserving every other field.
    ///
    /// Returns `Ok(None)` without touching storage when the id is unknown.
    pub fn set_status(&mut self, id: TaskId, status: Status) -> ServiceResult<Option<Task>> {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            return Ok(None);
        };

        let affected = self.repo.update_status(id, status)?;
        if !affected {
            // Session list stays canonical; record that the durable row was
            // missing instead of failing the interaction.
            warn!("event=task_set_status module=service status=row_missing task_id={id}");
        }

        self.tasks[index].status = status;
        info!(
            "event=task_set_status module=service status=ok task_id={id} new_status={}",
            status.label()
        );
        Ok(Some(self.tasks[index].clone()))
    }

    /// Applies a released drag gesture to one task.
    ///
    /// Returns `Ok(None)` when the id is unknown, the displacement stays
    /// below the drag threshold, or the task is already at the end of the
    /// sequence in the drag direction.
    pub fn apply_drag(&mut self, id: TaskId, delta_x: f64) -> ServiceResult<Option<Task>> {
        let Some(current) = self
            .tasks
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.status)
        else {
            return Ok(None);
        };

        match interpret_drag(current, delta_x) {
            Some(next_status) => self.set_status(id, next_status),
            None => Ok(None),
        }
    }

    /// Removes one task from storage and the session list.
    ///
    /// Returns whether a durable row was affected. No UI action reaches this
    /// today; it serves the maintenance surface and keeps the adapter's
    /// delete path exercised.
    pub fn remove_task(&mut self, id: TaskId) -> ServiceResult<bool> {
        let affected = self.repo.delete(id)?;
        self.tasks.retain(|task| task.id != id);
        Ok(affected)
    }

    /// Partitions the session list by status, original order preserved.
    pub fn group_by_status(&self) -> StatusGroups {
        StatusGroups::from_tasks(&self.tasks)
    }
}
