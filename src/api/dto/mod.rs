//! Data transfer objects for the HTTP API.

pub mod requests;
pub mod responses;
