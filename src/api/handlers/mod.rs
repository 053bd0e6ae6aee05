//! HTTP request handlers.

pub mod common;
pub mod projects;
pub mod tasks;
pub mod users;
