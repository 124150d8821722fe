//! Read-only view projections over the task list.
//!
//! # Responsibility
//! - Partition tasks by status for the list and board presentation modes.
//! - Keep projection logic pure so every caller recomputes from current
//!   state; there is no cached projection to go stale.
//!
//! # Invariants
//! - Statuses appear in fixed workflow order.
//! - Tasks keep their original relative order inside each group.
//! - List mode omits empty sections; board mode keeps empty columns.

use crate::model::task::{Status, Task};

/// Tasks partitioned by status, original order preserved within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusGroups {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    completed: Vec<Task>,
}

impl StatusGroups {
    /// Partitions a task slice in one pass.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut groups = Self::default();
        for task in tasks {
            match task.status {
                Status::Todo => groups.todo.push(task.clone()),
                Status::InProgress => groups.in_progress.push(task.clone()),
                Status::Completed => groups.completed.push(task.clone()),
            }
        }
        groups
    }

    /// The ordered tasks currently in one status.
    pub fn for_status(&self, status: Status) -> &[Task] {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Completed => &self.completed,
        }
    }

    /// Total tasks across all groups.
    pub fn total(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.completed.len()
    }
}

/// One labeled section of the list presentation mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSection {
    pub status: Status,
    pub tasks: Vec<Task>,
}

/// One column of the board presentation mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    pub status: Status,
    pub tasks: Vec<Task>,
}

/// List-mode projection: sections in fixed status order, empty ones omitted.
pub fn list_sections(tasks: &[Task]) -> Vec<ListSection> {
    let groups = StatusGroups::from_tasks(tasks);
    Status::ALL
        .into_iter()
        .filter_map(|status| {
            let tasks = groups.for_status(status);
            if tasks.is_empty() {
                return None;
            }
            Some(ListSection {
                status,
                tasks: tasks.to_vec(),
            })
        })
        .collect()
}

/// Board-mode projection: one column per status, empty columns kept so the
/// shell can render placeholders.
pub fn board_columns(tasks: &[Task]) -> Vec<BoardColumn> {
    let groups = StatusGroups::from_tasks(tasks);
    Status::ALL
        .into_iter()
        .map(|status| BoardColumn {
            status,
            tasks: groups.for_status(status).to_vec(),
        })
        .collect()
}
