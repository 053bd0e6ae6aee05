//! Domain layer.
//!
//! Entity types for the three collections plus the shared id value object.
//! These are persistence shapes, not response shapes: every optional field
//! stays `Option` here and defaulting is deferred to the projection layer.

pub mod project;
pub mod task;
pub mod user;
pub mod value_objects;

pub use project::{ProjectStatus, StoredProject};
pub use task::{StoredTask, TaskPriority, TaskState};
pub use user::StoredUser;
pub use value_objects::{DocumentId, IdValidationError};
