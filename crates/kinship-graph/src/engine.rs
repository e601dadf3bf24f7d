//! Edge mutation engine - the facade for adding and removing relationships

use crate::{GraphError, ValidationResult, Validator};
use kinship_domain::traits::{ProfileStore, RelationStore};
use kinship_domain::{EdgeId, PersonId, RelationType};
use std::fmt;

/// The relationship-graph facade
///
/// Owns the store handle for the duration of a logical operation and routes
/// every mutation through the validator and the store's atomic pair
/// operations. No state is held between calls beyond the handle itself.
pub struct FamilyGraph<S> {
    store: S,
    validator: Validator,
}

impl<S> FamilyGraph<S>
where
    S: ProfileStore + RelationStore,
    <S as ProfileStore>::Error: fmt::Display,
    <S as RelationStore>::Error: fmt::Display,
{
    /// Create a facade with the default validation configuration
    pub fn new(store: S) -> Self {
        Self::with_validator(store, Validator::default_config())
    }

    /// Create a facade with a custom validator
    pub fn with_validator(store: S, validator: Validator) -> Self {
        Self { store, validator }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store (person/profile management)
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consume the facade, returning the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validate a proposed relationship without mutating anything
    pub fn validate(
        &self,
        subject: PersonId,
        target: PersonId,
        relation: RelationType,
    ) -> Result<ValidationResult, GraphError> {
        self.validator.validate(&self.store, subject, target, relation)
    }

    /// Validate and add a relationship, creating forward and mirror edges
    ///
    /// Both rows commit in one storage transaction or neither does. The
    /// validator runs first; its checks are not inside that transaction, so
    /// the store's ordered-pair uniqueness constraint remains the final
    /// arbiter under concurrency.
    ///
    /// # Errors
    ///
    /// `GraphError::Rejected(reason)` when validation fails,
    /// `GraphError::UnknownRelation` for the sentinel type, or
    /// `GraphError::Store` when persistence fails.
    pub fn add_relationship(
        &mut self,
        subject: PersonId,
        target: PersonId,
        relation: RelationType,
    ) -> Result<(EdgeId, EdgeId), GraphError> {
        match self.validate(subject, target, relation)? {
            ValidationResult::Rejected(reason) => Err(GraphError::Rejected(reason)),
            ValidationResult::Accepted => {
                let ids = self
                    .store
                    .insert_edge_pair(subject, target, relation, relation.reverse())
                    .map_err(GraphError::store)?;
                tracing::info!(%subject, %target, %relation, "relationship added");
                Ok(ids)
            }
        }
    }

    /// Remove the relationship recorded for an ordered pair
    ///
    /// Deletes the forward edge and its mirror in one transaction. A missing
    /// mirror is logged and tolerated so previously inconsistent state heals
    /// itself instead of blocking the deletion; a missing forward edge fails
    /// with `RelationshipNotFound` and mutates nothing.
    pub fn remove_relationship(
        &mut self,
        subject: PersonId,
        target: PersonId,
    ) -> Result<(), GraphError> {
        let outcome = self
            .store
            .delete_edge_pair(subject, target)
            .map_err(GraphError::store)?;

        if !outcome.forward_deleted {
            return Err(GraphError::RelationshipNotFound);
        }
        if !outcome.mirror_deleted {
            tracing::warn!(
                %subject,
                %target,
                "mirror edge was already missing; forward edge removed anyway"
            );
        }
        tracing::info!(%subject, %target, "relationship removed");
        Ok(())
    }
}
