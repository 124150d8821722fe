//! FFI use-case API for app-shell-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the shell via FRB.
//! - Keep error semantics simple for UI integration: failures come back as
//!   safe default envelopes with the detail in the message and the logs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Status values cross the boundary as their display labels.

use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;
use taskboard_core::{
    board_columns, core_version as core_version_inner, init_logging as init_logging_inner,
    list_sections, ping as ping_inner, SqliteTaskRepository, Status, Task, TaskRepository,
    TaskService, TaskServiceError, DEFAULT_TASKS,
};

const BOARD_DB_FILE_NAME: &str = "taskboard.sqlite3";
static BOARD_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

// TODO: expose a task_delete function once the board UI gets a delete
// affordance; the core delete path already exists and is tested.

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task record crossing the FFI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Stable storage-assigned id.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Status display label (`To Do|In Progress|Completed`).
    pub status: String,
}

/// One board column in fixed status order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumnView {
    /// Column status label.
    pub status: String,
    /// Tasks in original order; may be empty (shell renders a placeholder).
    pub tasks: Vec<TaskView>,
}

/// Board-mode snapshot envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshotResponse {
    /// One column per status; empty on load failure.
    pub columns: Vec<BoardColumnView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// One list section; empty statuses are omitted from the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSectionView {
    /// Section status label.
    pub status: String,
    /// Tasks in original order; never empty.
    pub tasks: Vec<TaskView>,
}

/// List-mode snapshot envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshotResponse {
    /// Non-empty sections in fixed status order; empty on load failure.
    pub sections: Vec<ListSectionView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// The task after the mutation, when one applies.
    pub task: Option<TaskView>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task: Option<TaskView>) -> Self {
        Self {
            ok: true,
            task,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task: None,
            message: message.into(),
        }
    }
}

/// Returns the board-mode projection of the current task list.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - On storage failure returns an empty column list with the detail in
///   `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot() -> BoardSnapshotResponse {
    match with_task_service(|service| Ok(board_columns(service.tasks()))) {
        Ok(columns) => {
            let total: usize = columns.iter().map(|column| column.tasks.len()).sum();
            BoardSnapshotResponse {
                columns: columns
                    .into_iter()
                    .map(|column| BoardColumnView {
                        status: column.status.label().to_owned(),
                        tasks: column.tasks.iter().map(to_task_view).collect(),
                    })
                    .collect(),
                message: format!("Board holds {total} task(s)."),
            }
        }
        Err(err) => {
            warn!("event=board_snapshot module=ffi status=error error={err}");
            BoardSnapshotResponse {
                columns: Vec::new(),
                message: format!("board_snapshot failed: {err}"),
            }
        }
    }
}

/// Returns the list-mode projection of the current task list.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - On storage failure returns an empty section list with the detail in
///   `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn list_snapshot() -> ListSnapshotResponse {
    match with_task_service(|service| Ok(list_sections(service.tasks()))) {
        Ok(sections) => {
            let total: usize = sections.iter().map(|section| section.tasks.len()).sum();
            ListSnapshotResponse {
                sections: sections
                    .into_iter()
                    .map(|section| ListSectionView {
                        status: section.status.label().to_owned(),
                        tasks: section.tasks.iter().map(to_task_view).collect(),
                    })
                    .collect(),
                message: format!("List holds {total} task(s)."),
            }
        }
        Err(err) => {
            warn!("event=list_snapshot module=ffi status=error error={err}");
            ListSnapshotResponse {
                sections: Vec::new(),
                message: format!("list_snapshot failed: {err}"),
            }
        }
    }
}

/// Seeds the starter tasks on first launch, when the board is empty.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Idempotent: a populated board is left untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn board_seed_defaults() -> TaskActionResponse {
    let mut repo = SqliteTaskRepository::at_path(resolve_board_db_path());
    let seeded = repo
        .initialize()
        .and_then(|()| repo.seed_if_empty(DEFAULT_TASKS));
    match seeded {
        Ok(0) => TaskActionResponse::success("Board already has tasks; seeding skipped.", None),
        Ok(inserted) => {
            TaskActionResponse::success(format!("Seeded {inserted} starter task(s)."), None)
        }
        Err(err) => {
            warn!("event=board_seed module=ffi status=error error={err}");
            TaskActionResponse::failure(format!("board_seed_defaults failed: {err}"))
        }
    }
}

/// Adds a task with status `To Do`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Empty/whitespace titles fail validation without touching the board.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(title: String) -> TaskActionResponse {
    match with_task_service(|service| service.add_task(&title)) {
        Ok(task) => TaskActionResponse::success("Task created.", Some(to_task_view(&task))),
        Err(err) => {
            warn!("event=task_add module=ffi status=error error={err}");
            TaskActionResponse::failure(format!("task_add failed: {err}"))
        }
    }
}

/// Replaces one task's status from a button tap.
///
/// `status` must be one of the display labels
/// (`To Do|In Progress|Completed`).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Unknown ids come back as `ok=false` without touching the board.
#[flutter_rust_bridge::frb(sync)]
pub fn task_set_status(id: i64, status: String) -> TaskActionResponse {
    let Some(parsed) = Status::parse_label(&status) else {
        return TaskActionResponse::failure(format!(
            "unknown status `{status}`; expected To Do|In Progress|Completed"
        ));
    };

    match with_task_service(|service| service.set_status(id, parsed)) {
        Ok(Some(task)) => TaskActionResponse::success(
            format!("Task moved to {}.", task.status),
            Some(to_task_view(&task)),
        ),
        Ok(None) => TaskActionResponse::failure(format!("No task with id {id}.")),
        Err(err) => {
            warn!("event=task_set_status module=ffi status=error error={err}");
            TaskActionResponse::failure(format!("task_set_status failed: {err}"))
        }
    }
}

/// Applies a released drag gesture to one task.
///
/// `delta_x` is the accumulated horizontal displacement at release, in
/// display units. The shell snaps the card back to its origin regardless of
/// the outcome.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Discarded or clamped gestures come back `ok=true` with no task, so the
///   shell treats them as a plain snap-back.
#[flutter_rust_bridge::frb(sync)]
pub fn task_drag_release(id: i64, delta_x: f64) -> TaskActionResponse {
    match with_task_service(|service| {
        let known = service.tasks().iter().any(|task| task.id == id);
        if !known {
            return Ok(DragOutcome::UnknownTask);
        }
        Ok(match service.apply_drag(id, delta_x)? {
            Some(task) => DragOutcome::Moved(task),
            None => DragOutcome::NoChange,
        })
    }) {
        Ok(DragOutcome::Moved(task)) => TaskActionResponse::success(
            format!("Task moved to {}.", task.status),
            Some(to_task_view(&task)),
        ),
        Ok(DragOutcome::NoChange) => TaskActionResponse::success("No status change.", None),
        Ok(DragOutcome::UnknownTask) => {
            TaskActionResponse::failure(format!("No task with id {id}."))
        }
        Err(err) => {
            warn!("event=task_drag_release module=ffi status=error error={err}");
            TaskActionResponse::failure(format!("task_drag_release failed: {err}"))
        }
    }
}

enum DragOutcome {
    Moved(Task),
    NoChange,
    UnknownTask,
}

fn resolve_board_db_path() -> PathBuf {
    BOARD_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TASKBOARD_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(BOARD_DB_FILE_NAME)
        })
        .clone()
}

fn with_task_service<T>(
    f: impl FnOnce(&mut TaskService<SqliteTaskRepository>) -> Result<T, TaskServiceError>,
) -> Result<T, String> {
    let mut repo = SqliteTaskRepository::at_path(resolve_board_db_path());
    repo.initialize()
        .map_err(|err| format!("board DB open failed: {err}"))?;
    let mut service =
        TaskService::new(repo).map_err(|err| format!("board load failed: {err}"))?;
    f(&mut service).map_err(|err| err.to_string())
}

fn to_task_view(task: &Task) -> TaskView {
    TaskView {
        id: task.id,
        title: task.title.clone(),
        status: task.status.label().to_owned(),
    }
}
