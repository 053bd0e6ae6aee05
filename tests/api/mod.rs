//! API integration tests for the project management application.

pub mod health_tests;
pub mod tasks_tests;
pub mod users_tests;
