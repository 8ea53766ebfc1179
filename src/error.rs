//! Error types.
//!
//! Store operations fail with the typed [`StoreError`] so callers can match
//! on what went wrong. Application plumbing (config, CLI handlers) uses
//! `anyhow` through the crate-level [`Result`] alias; a `StoreError` crossing
//! that boundary converts losslessly via `?`.

use crate::model::DonationId;

/// The crate-level result alias for application plumbing.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// The result alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// The failure modes of donation store operations.
///
/// Every variant propagates to the caller; none are swallowed. A failed
/// operation never leaves the store partially mutated.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A create or update input broke a validation rule. `field` uses the
    /// wire spelling, e.g. `organizationName`.
    #[error("{field} {message}")]
    InvalidInput { field: &'static str, message: String },

    /// The target id does not exist in the canonical collection. Reportable
    /// but non-fatal: callers that want delete-if-present can match this
    /// variant and move on.
    #[error("no donation found with id {id}")]
    NotFound { id: DonationId },

    /// An operation that needs an owner was attempted with no identity
    /// bound.
    #[error("no donor is active")]
    NotAuthenticated,

    /// The persistence collaborator failed. The underlying cause is carried
    /// unchanged.
    #[error("persistence collaborator failed: {0}")]
    Collaborator(anyhow::Error),
}

impl StoreError {
    pub(crate) fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        StoreError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn not_found(id: DonationId) -> Self {
        StoreError::NotFound { id }
    }

    pub(crate) fn collaborator(source: anyhow::Error) -> Self {
        StoreError::Collaborator(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_texts() {
        let err = StoreError::invalid_input("amount", "must be greater than zero");
        assert_eq!(err.to_string(), "amount must be greater than zero");

        let id = DonationId::from_str("6f2f3d24-6bb4-4f62-9f82-2c9c1f2b5a10").unwrap();
        let err = StoreError::not_found(id);
        assert_eq!(
            err.to_string(),
            "no donation found with id 6f2f3d24-6bb4-4f62-9f82-2c9c1f2b5a10"
        );

        assert_eq!(StoreError::NotAuthenticated.to_string(), "no donor is active");
    }

    #[test]
    fn test_collaborator_preserves_cause() {
        let cause = anyhow::anyhow!("disk full");
        let err = StoreError::collaborator(cause);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_converts_into_anyhow() {
        fn plumbing() -> crate::Result<()> {
            let outcome: std::result::Result<(), StoreError> = Err(StoreError::NotAuthenticated);
            outcome?;
            Ok(())
        }
        let err = plumbing().unwrap_err();
        assert!(err.to_string().contains("no donor is active"));
    }
}
