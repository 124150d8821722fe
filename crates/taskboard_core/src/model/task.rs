//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by list and board projections.
//! - Define the ordered workflow status sequence and its neighbor arithmetic.
//!
//! # Invariants
//! - `id` is unique and monotonically assigned by storage.
//! - `title` is non-empty after trimming.
//! - `status` is always one of the three workflow stages.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable storage-assigned identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// Workflow stage of a task.
///
/// The declaration order is load-bearing: it is the fixed display order of
/// list sections and board columns, and drag gestures move a task one step
/// along this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Created but not started.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Finished successfully.
    Completed,
}

impl Status {
    /// Every status in fixed workflow order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Completed];

    /// Human-readable label, also the literal string persisted in storage.
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Parses a storage/display label back into a status.
    pub fn parse_label(value: &str) -> Option<Self> {
        match value {
            "To Do" => Some(Self::Todo),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// The following stage, or `None` when already at `Completed`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Todo => Some(Self::InProgress),
            Self::InProgress => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// The preceding stage, or `None` when already at `Todo`.
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Todo => None,
            Self::InProgress => Some(Self::Todo),
            Self::Completed => Some(Self::InProgress),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation failure for task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only after trimming.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Storage-assigned id, unique for the lifetime of the database.
    pub id: TaskId,
    /// Display title. Immutable after creation.
    pub title: String,
    /// Current workflow stage.
    pub status: Status,
}

impl Task {
    /// Creates a freshly added task; new tasks always start in `To Do`.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: Status::Todo,
        }
    }

    /// Checks the record against domain invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Trims raw title input and rejects empty results.
///
/// Shared by every write path so stored titles never carry framing
/// whitespace.
pub fn normalize_title(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}
