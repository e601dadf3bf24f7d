//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates (kinship-store for
//! persistence, the CLI layer for media resolution).

use crate::{EdgeId, Person, PersonId, Profile, RelationType, RelationshipEdge};

/// Trait for storing and retrieving persons and their profiles
///
/// Implemented by the infrastructure layer (kinship-store). Person deletion
/// cascades to profiles, pictures, and every edge touching the person; the
/// cascade is the implementation's responsibility (schema-level in SQLite).
pub trait ProfileStore {
    /// Error type for store operations
    type Error;

    /// Register a new person
    fn add_person(&mut self, person: &Person) -> Result<(), Self::Error>;

    /// Whether a person with this id is registered
    fn person_exists(&self, id: PersonId) -> Result<bool, Self::Error>;

    /// Get a person's profile, if one is attached
    fn get_profile(&self, id: PersonId) -> Result<Option<Profile>, Self::Error>;

    /// Attach or replace a person's profile
    fn upsert_profile(&mut self, id: PersonId, profile: &Profile) -> Result<(), Self::Error>;

    /// Delete a person and everything attached to them
    ///
    /// Returns false when no such person exists.
    fn remove_person(&mut self, id: PersonId) -> Result<bool, Self::Error>;

    /// List all persons with their profiles, in registration order
    fn list_persons(&self) -> Result<Vec<(Person, Option<Profile>)>, Self::Error>;

    /// Get a person's stored profile-picture filename, if any
    fn picture_filename(&self, id: PersonId) -> Result<Option<String>, Self::Error>;

    /// Set or replace a person's profile-picture filename
    fn set_picture(&mut self, id: PersonId, filename: &str) -> Result<(), Self::Error>;
}

/// Outcome of an atomic pair deletion
///
/// Reports which of the two rows actually existed so the caller can apply
/// its tolerance policy (a missing mirror is logged, not an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairDeletion {
    /// The forward edge (source -> target) was found and deleted
    pub forward_deleted: bool,

    /// The mirror edge (target -> source) was found and deleted
    pub mirror_deleted: bool,
}

/// Trait for storing and retrieving relationship edges
///
/// Implemented by the infrastructure layer (kinship-store). The pair
/// operations are contractually atomic: both rows commit or neither does.
/// Implementations must also enforce uniqueness of the ordered pair
/// (source, target) regardless of type; that constraint, not the validator,
/// is the correctness boundary for concurrent inserts.
pub trait RelationStore {
    /// Error type for store operations
    type Error;

    /// Find the edge for an ordered pair, whatever its type
    fn find_edge(
        &self,
        source: PersonId,
        target: PersonId,
    ) -> Result<Option<RelationshipEdge>, Self::Error>;

    /// All outgoing edges of a person, in insertion order
    fn edges_from(&self, source: PersonId) -> Result<Vec<RelationshipEdge>, Self::Error>;

    /// Outgoing edges of a person restricted to one relation type
    fn edges_of_type(
        &self,
        source: PersonId,
        relation: RelationType,
    ) -> Result<Vec<RelationshipEdge>, Self::Error>;

    /// Insert a single directed edge row
    ///
    /// Row-level primitive for repair tooling; normal writes go through
    /// [`RelationStore::insert_edge_pair`] so the mirror cannot be skipped.
    fn insert_edge(
        &mut self,
        source: PersonId,
        target: PersonId,
        relation: RelationType,
    ) -> Result<EdgeId, Self::Error>;

    /// Delete a single directed edge row, reporting whether it existed
    fn delete_edge(&mut self, source: PersonId, target: PersonId) -> Result<bool, Self::Error>;

    /// Insert the forward edge and its mirror in one transaction
    ///
    /// Returns the surrogate ids of (forward, mirror).
    fn insert_edge_pair(
        &mut self,
        source: PersonId,
        target: PersonId,
        relation: RelationType,
        mirror_relation: RelationType,
    ) -> Result<(EdgeId, EdgeId), Self::Error>;

    /// Delete the forward edge and, when present, its mirror in one transaction
    ///
    /// When the forward edge does not exist nothing is deleted at all, a
    /// stray mirror row included.
    fn delete_edge_pair(
        &mut self,
        source: PersonId,
        target: PersonId,
    ) -> Result<PairDeletion, Self::Error>;
}

/// Trait for resolving a person's avatar URL
///
/// Implemented outside the core; supplies a default placeholder URL when
/// the person has no stored picture.
pub trait MediaResolver {
    /// Resolve the avatar URL for a stored picture filename, or the
    /// placeholder when none is stored
    fn avatar_url(&self, picture: Option<&str>) -> String;
}
