//! Document ID value object.
//!
//! Provides the opaque, store-assigned identifier shared by all collections.
//! Uses UUID v7, which is time-ordered and suitable for database indexing.
//!
//! # Canonical Rendering
//!
//! Tasks reference their owning project by a *string copy* of the project's
//! id, and association is resolved by exact string comparison. For that to
//! work, every place an id crosses into a string must use the same rendering.
//! [`DocumentId::to_string`] (lowercase, hyphenated) is that canonical form;
//! nothing else may be stored in a `project_id` field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors for [`DocumentId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdValidationError {
    /// The provided string is not decodable as a document id.
    InvalidFormat(String),
}

impl fmt::Display for IdValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(value) => {
                write!(formatter, "Invalid document id: {value}")
            }
        }
    }
}

impl std::error::Error for IdValidationError {}

/// An opaque identifier for a stored document.
///
/// `DocumentId` is never interpreted by any component except for equality
/// comparison. It provides:
///
/// - **Type safety**: a parsed id cannot be confused with a raw path segment
/// - **Smart constructor**: [`DocumentId::parse`] validates before construction,
///   which is what distinguishes a 400 (malformed) from a 404 (absent)
/// - **Time ordering**: UUID v7 is chronologically sortable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Parses a `DocumentId` from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `IdValidationError::InvalidFormat` if the string is empty or
    /// not decodable as a UUID.
    pub fn parse(value: &str) -> Result<Self, IdValidationError> {
        Uuid::from_str(value)
            .map(Self)
            .map_err(|_| IdValidationError::InvalidFormat(value.to_string()))
    }

    /// Generates a fresh `DocumentId` using UUID v7.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<Uuid> for DocumentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
