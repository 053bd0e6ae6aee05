//! Application layer.
//!
//! The core read path lives here: the association resolver fetches a
//! project's tasks, the aggregator reduces them to statistics, and the
//! projection merges the result with the defaulted project fields. All
//! three are pure transforms apart from the resolver's store read;
//! `workflows` holds the one multi-step mutation (cascading delete).

pub mod associations;
pub mod projection;
pub mod stats;
pub mod workflows;

pub use associations::{TaskRecord, tasks_for_project};
pub use projection::{ProjectView, TaskView, UserView, to_project_view, to_task_view, to_user_view};
pub use stats::{TaskStats, aggregate};
pub use workflows::delete_project_cascade;
