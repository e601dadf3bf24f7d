//! Relationship query facade - direct-relative listing with display data

use crate::{FamilyGraph, GraphError};
use kinship_domain::traits::{MediaResolver, ProfileStore, RelationStore};
use kinship_domain::PersonId;
use serde::Serialize;
use std::fmt;

/// Display-ready description of one direct relative
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelativeDescriptor {
    /// The relative's person id (UUID string form)
    pub relative_id: String,

    /// Given name
    pub first_name: String,

    /// Optional middle name
    pub middle_name: Option<String>,

    /// Family name
    pub last_name: String,

    /// Relation type label (e.g. "PARENT")
    pub relation: String,

    /// Resolved avatar URL, placeholder when no picture is stored
    pub avatar_url: String,
}

impl RelativeDescriptor {
    /// Full display name, with the middle name when present
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

impl<S> FamilyGraph<S>
where
    S: ProfileStore + RelationStore,
    <S as ProfileStore>::Error: fmt::Display,
    <S as RelationStore>::Error: fmt::Display,
{
    /// List a person's direct relatives in insertion order
    ///
    /// One descriptor per outgoing edge. Edges whose target lacks a profile
    /// are silently skipped: the validator prevents such edges, but manual
    /// data edits can leave them behind and a listing should not fail over
    /// them.
    pub fn list_relatives<M: MediaResolver>(
        &self,
        person: PersonId,
        media: &M,
    ) -> Result<Vec<RelativeDescriptor>, GraphError> {
        let edges = self.store().edges_from(person).map_err(GraphError::store)?;

        let mut relatives = Vec::with_capacity(edges.len());
        for edge in edges {
            let profile = match self
                .store()
                .get_profile(edge.target)
                .map_err(GraphError::store)?
            {
                Some(profile) => profile,
                None => {
                    tracing::debug!(target_id = %edge.target, "skipping edge to person without profile");
                    continue;
                }
            };
            let picture = self
                .store()
                .picture_filename(edge.target)
                .map_err(GraphError::store)?;

            relatives.push(RelativeDescriptor {
                relative_id: edge.target.to_string(),
                first_name: profile.first_name,
                middle_name: profile.middle_name,
                last_name: profile.last_name,
                relation: edge.relation.to_string(),
                avatar_url: media.avatar_url(picture.as_deref()),
            });
        }

        Ok(relatives)
    }
}
