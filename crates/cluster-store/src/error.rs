//! Store errors

use thiserror::Error;

/// Errors that can occur when reading or writing persisted entities
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No entity of this kind has the requested id
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// The entity violates a persistence invariant (e.g. empty required credential fields)
    #[error("invalid {entity}: missing {}", .missing_fields.join(", "))]
    InvalidRecord {
        entity: &'static str,
        missing_fields: Vec<&'static str>,
    },

    /// The storage backend failed
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// True for [`StoreError::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
