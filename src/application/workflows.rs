//! Multi-step store workflows.
//!
//! The only operation spanning more than one store call is the cascading
//! project delete. It is deliberately not atomic: the store exposes no
//! transaction across collections, and the documented failure bias is that
//! a crash between the two steps leaves a project with zero tasks — a
//! valid state — rather than tasks referencing a deleted project.

use std::sync::Arc;

use crate::domain::DocumentId;
use crate::infrastructure::{COLLECTION_PROJECTS, COLLECTION_TASKS, DocumentStore, StoreError};

/// Deletes a project and every task referencing it.
///
/// Tasks go first, keyed by the project id's canonical string form; this
/// also sweeps up tasks whose project vanished earlier. The project itself
/// is deleted second, and the return value says whether it existed.
///
/// # Errors
///
/// Returns `StoreError` if either store call fails. When the task deletion
/// succeeded but the project deletion fails, the tasks stay gone — the
/// accepted degraded state.
pub async fn delete_project_cascade(
    store: &Arc<dyn DocumentStore>,
    project_id: &DocumentId,
) -> Result<bool, StoreError> {
    let reference = project_id.to_string();

    let removed_tasks = store
        .delete_by_field(COLLECTION_TASKS, "project_id", &reference)
        .await?;
    tracing::debug!(project_id = %reference, removed_tasks, "cascade removed associated tasks");

    store.delete(COLLECTION_PROJECTS, project_id).await
}
