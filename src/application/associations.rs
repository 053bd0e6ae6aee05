//! Association resolution.
//!
//! Matches tasks to their owning project through the denormalized
//! `project_id` reference. Resolution is *exact string equality* between
//! the queried id and each task's stored reference — no parsing, no
//! normalization, no structural join. A differently formatted id silently
//! yields zero matches rather than an error; callers that need a 400 on
//! malformed ids validate before getting here. The invariant making this
//! work is that both sides always carry the canonical
//! [`DocumentId`](crate::domain::DocumentId) rendering.

use std::sync::Arc;

use crate::domain::StoredTask;
use crate::infrastructure::{COLLECTION_TASKS, DocumentStore, StoreError};

/// A task together with its own document id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    /// Canonical string form of the task's id.
    pub id: String,
    /// The decoded task document.
    pub task: StoredTask,
}

/// Returns every task whose stored `project_id` equals `project_id`.
///
/// Tasks referencing a project that no longer exists are still returned by
/// their own id — orphaning is the caller-visible consequence of deleting
/// a project non-atomically, not an error.
///
/// # Errors
///
/// Returns `StoreError` when the underlying store is unreachable or a
/// matched document fails to decode.
pub async fn tasks_for_project(
    store: &Arc<dyn DocumentStore>,
    project_id: &str,
) -> Result<Vec<TaskRecord>, StoreError> {
    let documents = store
        .find_by_field(COLLECTION_TASKS, "project_id", project_id)
        .await?;

    documents
        .into_iter()
        .map(|document| {
            serde_json::from_value(document.body)
                .map(|task| TaskRecord {
                    id: document.id,
                    task,
                })
                .map_err(|error| StoreError::Serialization(error.to_string()))
        })
        .collect()
}
