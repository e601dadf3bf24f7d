//! Graph engine error types

use crate::validator::RejectionReason;
use thiserror::Error;

/// Errors that can occur during graph operations
///
/// Everything here is recoverable and user-facing; nothing is fatal to the
/// process.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Store error during validation or mutation
    #[error("Store error: {0}")]
    Store(String),

    /// The proposed relationship failed validation
    #[error("Relationship rejected: {0}")]
    Rejected(RejectionReason),

    /// No relationship exists for the ordered pair being removed
    #[error("No relationship exists for this ordered pair")]
    RelationshipNotFound,

    /// The relation type is the Unknown sentinel and cannot be mirrored
    #[error("Relation type is not in the registry")]
    UnknownRelation,
}

impl GraphError {
    /// Wrap a store-layer error
    pub(crate) fn store<E: std::fmt::Display>(err: E) -> Self {
        GraphError::Store(err.to_string())
    }
}
