//! API middleware.

pub mod error_handler;
