//! Core domain logic for the Taskboard mobile app.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod gesture;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use gesture::{interpret_drag, DRAG_THRESHOLD};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_title, Status, Task, TaskId, TaskValidationError};
pub use repo::task_repo::{
    RepoError, RepoResult, SeedTask, SqliteTaskRepository, StatusCounts, TaskRepository,
    DEFAULT_TASKS,
};
pub use service::projection::{board_columns, list_sections, BoardColumn, ListSection, StatusGroups};
pub use service::task_service::{ServiceResult, TaskService, TaskServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
