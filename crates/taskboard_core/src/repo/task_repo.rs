//! Task persistence adapter contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `tasks` table.
//! - Own the adapter lifecycle: uninitialized, ready, closed.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Data operations outside the ready state fail with `NotInitialized`.
//! - Write paths validate titles before SQL mutations.
//! - Read paths reject invalid persisted status strings instead of masking
//!   them.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::task::{normalize_title, Status, Task, TaskId, TaskValidationError};
use log::info;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const TASK_SELECT_SQL: &str = "SELECT id, title, status FROM tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Adapter error for task persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// A data operation ran before `initialize` or after `close`.
    NotInitialized,
    /// The storage engine could not be opened or bootstrapped.
    StorageUnavailable(DbError),
    /// A data operation failed inside the storage engine.
    Db(DbError),
    /// Title input failed validation.
    Validation(TaskValidationError),
    /// A persisted row does not decode into a valid task.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => {
                write!(f, "task storage is not initialized; call initialize first")
            }
            Self::StorageUnavailable(err) => write!(f, "task storage unavailable: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotInitialized => None,
            Self::StorageUnavailable(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// One entry of a seeding default set.
#[derive(Debug, Clone, Copy)]
pub struct SeedTask<'a> {
    pub title: &'a str,
    pub status: Status,
}

/// Starter tasks inserted into an empty board.
pub const DEFAULT_TASKS: &[SeedTask<'static>] = &[
    SeedTask {
        title: "Plan weekly meal prep",
        status: Status::Todo,
    },
    SeedTask {
        title: "Debug ant trail AI",
        status: Status::InProgress,
    },
    SeedTask {
        title: "Send out team retrospective summary",
        status: Status::Completed,
    },
    SeedTask {
        title: "Buy more honey dew drops",
        status: Status::Todo,
    },
];

/// Per-status row counts with every status always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub todo: u32,
    pub in_progress: u32,
    pub completed: u32,
}

impl StatusCounts {
    /// Count for one status; absent statuses are zero by construction.
    pub fn for_status(self, status: Status) -> u32 {
        match status {
            Status::Todo => self.todo,
            Status::InProgress => self.in_progress,
            Status::Completed => self.completed,
        }
    }

    /// Total rows across all statuses.
    pub fn total(self) -> u32 {
        self.todo + self.in_progress + self.completed
    }
}

/// Persistence adapter contract for task storage.
pub trait TaskRepository {
    /// Idempotently opens the storage and ensures the schema exists.
    fn initialize(&mut self) -> RepoResult<()>;
    /// Inserts the default set in order when the table is empty.
    /// Returns the number of rows inserted (zero when already populated).
    fn seed_if_empty(&self, defaults: &[SeedTask<'_>]) -> RepoResult<u32>;
    /// Inserts one task and returns the storage-assigned id.
    fn insert(&self, title: &str, status: Status) -> RepoResult<TaskId>;
    /// Replaces one task's status. Returns whether a row was affected.
    fn update_status(&self, id: TaskId, status: Status) -> RepoResult<bool>;
    /// Deletes one task. Returns whether a row was affected.
    fn delete(&self, id: TaskId) -> RepoResult<bool>;
    /// All tasks ordered by id ascending.
    fn select_all(&self) -> RepoResult<Vec<Task>>;
    /// Tasks in one status, ordered by id ascending.
    fn select_by_status(&self, status: Status) -> RepoResult<Vec<Task>>;
    /// Row counts per status, absent statuses reported as zero.
    fn count_by_status(&self) -> RepoResult<StatusCounts>;
    /// Deletes every row. Returns the number of rows removed.
    fn clear_all(&self) -> RepoResult<u32>;
    /// Releases the connection. Data operations fail with `NotInitialized`
    /// until `initialize` runs again.
    fn close(&mut self) -> RepoResult<()>;
}

#[derive(Debug, Clone)]
enum StorageTarget {
    File(PathBuf),
    Memory,
}

/// SQLite-backed task adapter owning its connection.
///
/// The adapter is an explicitly owned value handed down to its callers; one
/// instance wraps one connection, and sharing an instance across threads is
/// unsupported.
pub struct SqliteTaskRepository {
    target: StorageTarget,
    conn: Option<Connection>,
}

impl SqliteTaskRepository {
    /// Creates an uninitialized adapter over a database file.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            target: StorageTarget::File(path.into()),
            conn: None,
        }
    }

    /// Creates an uninitialized adapter over an in-memory database.
    ///
    /// In-memory contents do not survive `close`.
    pub fn in_memory() -> Self {
        Self {
            target: StorageTarget::Memory,
            conn: None,
        }
    }

    /// Convenience constructor: an in-memory adapter that is already ready.
    pub fn open_in_memory() -> RepoResult<Self> {
        let mut repo = Self::in_memory();
        repo.initialize()?;
        Ok(repo)
    }

    fn conn(&self) -> RepoResult<&Connection> {
        self.conn.as_ref().ok_or(RepoError::NotInitialized)
    }
}

impl TaskRepository for SqliteTaskRepository {
    fn initialize(&mut self) -> RepoResult<()> {
        if self.conn.is_some() {
            return Ok(());
        }

        let conn = match &self.target {
            StorageTarget::File(path) => open_db(path),
            StorageTarget::Memory => open_db_in_memory(),
        }
        .map_err(RepoError::StorageUnavailable)?;

        self.conn = Some(conn);
        Ok(())
    }

    fn seed_if_empty(&self, defaults: &[SeedTask<'_>]) -> RepoResult<u32> {
        let conn = self.conn()?;
        let existing: i64 = conn.query_row("SELECT COUNT(*) FROM tasks;", [], |row| row.get(0))?;
        if existing > 0 {
            return Ok(0);
        }

        let tx = conn.unchecked_transaction()?;
        let mut inserted = 0u32;
        for seed in defaults {
            let title = normalize_title(seed.title)?;
            tx.execute(
                "INSERT INTO tasks (title, status) VALUES (?1, ?2);",
                params![title, seed.status.label()],
            )?;
            inserted += 1;
        }
        tx.commit()?;

        info!("event=board_seed module=repo status=ok inserted={inserted}");
        Ok(inserted)
    }

    fn insert(&self, title: &str, status: Status) -> RepoResult<TaskId> {
        let conn = self.conn()?;
        let title = normalize_title(title)?;

        conn.execute(
            "INSERT INTO tasks (title, status) VALUES (?1, ?2);",
            params![title, status.label()],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn update_status(&self, id: TaskId, status: Status) -> RepoResult<bool> {
        let changed = self.conn()?.execute(
            "UPDATE tasks SET status = ?1 WHERE id = ?2;",
            params![status.label(), id],
        )?;
        Ok(changed > 0)
    }

    fn delete(&self, id: TaskId) -> RepoResult<bool> {
        let changed = self
            .conn()?
            .execute("DELETE FROM tasks WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn select_all(&self) -> RepoResult<Vec<Task>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{TASK_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }

    fn select_by_status(&self, status: Status) -> RepoResult<Vec<Task>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare(&format!("{TASK_SELECT_SQL} WHERE status = ?1 ORDER BY id ASC;"))?;
        let mut rows = stmt.query([status.label()])?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }

    fn count_by_status(&self) -> RepoResult<StatusCounts> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT status, COUNT(*) FROM tasks GROUP BY status;")?;
        let mut rows = stmt.query([])?;

        let mut counts = StatusCounts::default();
        while let Some(row) = rows.next()? {
            let label: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            let count = u32::try_from(count).map_err(|_| {
                RepoError::InvalidData(format!("negative row count `{count}` for `{label}`"))
            })?;
            match Status::parse_label(&label) {
                Some(Status::Todo) => counts.todo = count,
                Some(Status::InProgress) => counts.in_progress = count,
                Some(Status::Completed) => counts.completed = count,
                None => {
                    return Err(RepoError::InvalidData(format!(
                        "invalid status value `{label}` in tasks.status"
                    )));
                }
            }
        }
        Ok(counts)
    }

    fn clear_all(&self) -> RepoResult<u32> {
        let removed = self.conn()?.execute("DELETE FROM tasks;", [])?;
        let removed = u32::try_from(removed)
            .map_err(|_| RepoError::InvalidData(format!("invalid delete count `{removed}`")))?;
        info!("event=board_clear module=repo status=ok removed={removed}");
        Ok(removed)
    }

    fn close(&mut self) -> RepoResult<()> {
        self.conn = None;
        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let status_text: String = row.get("status")?;
    let status = Status::parse_label(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status value `{status_text}` in tasks.status"
        ))
    })?;

    let task = Task {
        id: row.get("id")?,
        title: row.get("title")?,
        status,
    };
    task.validate()
        .map_err(|err| RepoError::InvalidData(err.to_string()))?;
    Ok(task)
}
