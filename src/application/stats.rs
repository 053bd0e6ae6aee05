//! Statistics aggregation.
//!
//! Reduces a project's tasks to three integers. This is a pure function:
//! statistics are never stored, never cached, and recomputed on every
//! project read, so they can never go stale — at the cost of an
//! O(tasks-per-project) scan per read.

use serde::Serialize;

use crate::domain::StoredTask;

/// Derived task-completion figures for one project.
///
/// `pending` is always `total - completed`. Wire keys keep the original's
/// Spanish names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    /// Number of associated tasks.
    pub total: u64,
    /// Number of associated tasks with the completion flag set.
    #[serde(rename = "completadas")]
    pub completed: u64,
    /// Remainder.
    #[serde(rename = "pendientes")]
    pub pending: u64,
}

/// Computes `{total, completed, pending}` over a set of tasks.
///
/// A task counts as completed only when its `completada` flag is present
/// and `true`; a missing flag counts as not completed, mirroring how the
/// original read raw documents. Input order is irrelevant.
pub fn aggregate<'a, I>(tasks: I) -> TaskStats
where
    I: IntoIterator<Item = &'a StoredTask>,
{
    let mut total = 0;
    let mut completed = 0;

    for task in tasks {
        total += 1;
        if task.is_completed == Some(true) {
            completed += 1;
        }
    }

    TaskStats {
        total,
        completed,
        pending: total - completed,
    }
}
