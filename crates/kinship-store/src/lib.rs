//! Kinship Storage Layer
//!
//! Implements the ProfileStore and RelationStore traits over SQLite.
//!
//! # Architecture
//!
//! - One `relatives` row per directed edge; a relationship is two rows
//! - `UNIQUE(source_id, target_id)` enforces ordered-pair uniqueness
//! - Foreign keys with `ON DELETE CASCADE` own person-deletion cleanup
//! - The paired insert/delete operations run inside one transaction
//!
//! # Examples
//!
//! ```no_run
//! use kinship_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for person and relationship operations
//! ```

#![warn(missing_docs)]

use kinship_domain::traits::{PairDeletion, ProfileStore, RelationStore};
use kinship_domain::{EdgeId, Gender, Person, PersonId, Profile, RelationType, RelationshipEdge};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// An edge for this ordered pair already exists
    #[error("An edge for this ordered pair already exists")]
    DuplicateEdge,

    /// Referenced person is not registered
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),
}

/// SQLite-based implementation of ProfileStore and RelationStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// SqliteStore instance; the ordered-pair UNIQUE constraint keeps concurrent
/// writers consistent across instances.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kinship_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("kinship.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        // Cascade deletion lives in the schema; it only fires with FK
        // enforcement on.
        conn.pragma_update(None, "foreign_keys", true)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Convert PersonId to bytes for storage
    fn person_id_to_bytes(id: PersonId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes to PersonId
    fn bytes_to_person_id(bytes: &[u8]) -> Result<PersonId, StoreError> {
        if bytes.len() != 16 {
            return Err(StoreError::InvalidData(format!(
                "Expected 16 bytes for PersonId, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(PersonId::from_value(u128::from_be_bytes(arr)))
    }

    /// Convert string to Gender
    fn str_to_gender(s: &str) -> Result<Gender, StoreError> {
        Gender::parse(s).ok_or_else(|| StoreError::InvalidData(format!("Unknown gender: {}", s)))
    }

    /// Map a profile row (gender, first, middle, last) starting at `offset`
    fn profile_from_row(row: &Row<'_>, offset: usize) -> Result<Option<Profile>, rusqlite::Error> {
        let gender: Option<String> = row.get(offset)?;
        match gender {
            None => Ok(None),
            Some(gender) => {
                let gender = Self::str_to_gender(&gender).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        offset,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                Ok(Some(Profile {
                    first_name: row.get(offset + 1)?,
                    middle_name: row.get(offset + 2)?,
                    last_name: row.get(offset + 3)?,
                    gender,
                }))
            }
        }
    }

    /// Map an edge row (id, source_id, target_id, relation_type)
    fn edge_from_row(row: &Row<'_>) -> Result<RelationshipEdge, rusqlite::Error> {
        let source_bytes: Vec<u8> = row.get(1)?;
        let target_bytes: Vec<u8> = row.get(2)?;
        let relation: String = row.get(3)?;

        let source = Self::bytes_to_person_id(&source_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Blob, Box::new(e))
        })?;
        let target = Self::bytes_to_person_id(&target_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Blob, Box::new(e))
        })?;

        Ok(RelationshipEdge {
            id: EdgeId::from_value(row.get(0)?),
            source,
            target,
            // Unrecognized stored values surface as the Unknown sentinel
            // instead of aborting the whole query.
            relation: RelationType::parse(&relation),
        })
    }

    /// Map constraint failures on edge insertion to domain errors
    ///
    /// `endpoint` is the person reported when a foreign key fails; callers
    /// pass the end they did not just resolve.
    fn map_edge_insert_error(endpoint: PersonId, err: rusqlite::Error) -> StoreError {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                StoreError::DuplicateEdge
            }
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
            {
                StoreError::PersonNotFound(endpoint)
            }
            _ => StoreError::Database(err),
        }
    }

    /// Map a foreign-key failure on a person-scoped write
    fn map_person_fk_error(id: PersonId, err: rusqlite::Error) -> StoreError {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
            {
                StoreError::PersonNotFound(id)
            }
            _ => StoreError::Database(err),
        }
    }
}

impl ProfileStore for SqliteStore {
    type Error = StoreError;

    fn add_person(&mut self, person: &Person) -> Result<(), Self::Error> {
        self.conn.execute(
            "INSERT INTO persons (id, created_at) VALUES (?1, ?2)",
            params![
                Self::person_id_to_bytes(person.id),
                person.created_at as i64
            ],
        )?;
        Ok(())
    }

    fn person_exists(&self, id: PersonId) -> Result<bool, Self::Error> {
        let exists: Option<bool> = self
            .conn
            .query_row(
                "SELECT 1 FROM persons WHERE id = ?1",
                params![Self::person_id_to_bytes(id)],
                |_| Ok(true),
            )
            .optional()?;
        Ok(exists.unwrap_or(false))
    }

    fn get_profile(&self, id: PersonId) -> Result<Option<Profile>, Self::Error> {
        let profile = self
            .conn
            .query_row(
                "SELECT gender, first_name, middle_name, last_name
                 FROM profiles WHERE person_id = ?1",
                params![Self::person_id_to_bytes(id)],
                |row| Self::profile_from_row(row, 0),
            )
            .optional()?;
        Ok(profile.flatten())
    }

    fn upsert_profile(&mut self, id: PersonId, profile: &Profile) -> Result<(), Self::Error> {
        self.conn
            .execute(
                "INSERT INTO profiles (person_id, gender, first_name, middle_name, last_name)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(person_id) DO UPDATE SET
                 gender = excluded.gender, first_name = excluded.first_name,
                 middle_name = excluded.middle_name, last_name = excluded.last_name",
                params![
                    Self::person_id_to_bytes(id),
                    profile.gender.as_str(),
                    profile.first_name,
                    profile.middle_name,
                    profile.last_name,
                ],
            )
            .map_err(|e| Self::map_person_fk_error(id, e))?;
        Ok(())
    }

    fn remove_person(&mut self, id: PersonId) -> Result<bool, Self::Error> {
        // Profiles, pictures, and edges in both directions go with the
        // person via ON DELETE CASCADE.
        let deleted = self.conn.execute(
            "DELETE FROM persons WHERE id = ?1",
            params![Self::person_id_to_bytes(id)],
        )?;
        Ok(deleted > 0)
    }

    fn list_persons(&self) -> Result<Vec<(Person, Option<Profile>)>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.created_at, pr.gender, pr.first_name, pr.middle_name, pr.last_name
             FROM persons p
             LEFT JOIN profiles pr ON pr.person_id = p.id
             ORDER BY p.id",
        )?;

        let persons = stmt
            .query_map([], |row| {
                let id_bytes: Vec<u8> = row.get(0)?;
                let id = Self::bytes_to_person_id(&id_bytes).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        0,
                        rusqlite::types::Type::Blob,
                        Box::new(e),
                    )
                })?;
                let person = Person {
                    id,
                    created_at: row.get::<_, i64>(1)? as u64,
                };
                let profile = Self::profile_from_row(row, 2)?;
                Ok((person, profile))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(persons)
    }

    fn picture_filename(&self, id: PersonId) -> Result<Option<String>, Self::Error> {
        let filename = self
            .conn
            .query_row(
                "SELECT filename FROM pictures WHERE person_id = ?1",
                params![Self::person_id_to_bytes(id)],
                |row| row.get(0),
            )
            .optional()?;
        Ok(filename)
    }

    fn set_picture(&mut self, id: PersonId, filename: &str) -> Result<(), Self::Error> {
        self.conn
            .execute(
                "INSERT INTO pictures (person_id, filename) VALUES (?1, ?2)
                 ON CONFLICT(person_id) DO UPDATE SET filename = excluded.filename",
                params![Self::person_id_to_bytes(id), filename],
            )
            .map_err(|e| Self::map_person_fk_error(id, e))?;
        Ok(())
    }
}

impl RelationStore for SqliteStore {
    type Error = StoreError;

    fn find_edge(
        &self,
        source: PersonId,
        target: PersonId,
    ) -> Result<Option<RelationshipEdge>, Self::Error> {
        let edge = self
            .conn
            .query_row(
                "SELECT id, source_id, target_id, relation_type
                 FROM relatives WHERE source_id = ?1 AND target_id = ?2",
                params![
                    Self::person_id_to_bytes(source),
                    Self::person_id_to_bytes(target)
                ],
                Self::edge_from_row,
            )
            .optional()?;
        Ok(edge)
    }

    fn edges_from(&self, source: PersonId) -> Result<Vec<RelationshipEdge>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, source_id, target_id, relation_type
             FROM relatives WHERE source_id = ?1 ORDER BY id",
        )?;
        let edges = stmt
            .query_map(params![Self::person_id_to_bytes(source)], Self::edge_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(edges)
    }

    fn edges_of_type(
        &self,
        source: PersonId,
        relation: RelationType,
    ) -> Result<Vec<RelationshipEdge>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, source_id, target_id, relation_type
             FROM relatives WHERE source_id = ?1 AND relation_type = ?2 ORDER BY id",
        )?;
        let edges = stmt
            .query_map(
                params![Self::person_id_to_bytes(source), relation.as_str()],
                Self::edge_from_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(edges)
    }

    fn insert_edge(
        &mut self,
        source: PersonId,
        target: PersonId,
        relation: RelationType,
    ) -> Result<EdgeId, Self::Error> {
        self.conn
            .execute(
                "INSERT INTO relatives (source_id, target_id, relation_type) VALUES (?1, ?2, ?3)",
                params![
                    Self::person_id_to_bytes(source),
                    Self::person_id_to_bytes(target),
                    relation.as_str()
                ],
            )
            .map_err(|e| Self::map_edge_insert_error(target, e))?;
        Ok(EdgeId::from_value(self.conn.last_insert_rowid()))
    }

    fn delete_edge(&mut self, source: PersonId, target: PersonId) -> Result<bool, Self::Error> {
        let deleted = self.conn.execute(
            "DELETE FROM relatives WHERE source_id = ?1 AND target_id = ?2",
            params![
                Self::person_id_to_bytes(source),
                Self::person_id_to_bytes(target)
            ],
        )?;
        Ok(deleted > 0)
    }

    fn insert_edge_pair(
        &mut self,
        source: PersonId,
        target: PersonId,
        relation: RelationType,
        mirror_relation: RelationType,
    ) -> Result<(EdgeId, EdgeId), Self::Error> {
        let source_bytes = Self::person_id_to_bytes(source);
        let target_bytes = Self::person_id_to_bytes(target);

        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO relatives (source_id, target_id, relation_type) VALUES (?1, ?2, ?3)",
            params![source_bytes, target_bytes, relation.as_str()],
        )
        .map_err(|e| Self::map_edge_insert_error(target, e))?;
        let forward_id = EdgeId::from_value(tx.last_insert_rowid());

        tx.execute(
            "INSERT INTO relatives (source_id, target_id, relation_type) VALUES (?1, ?2, ?3)",
            params![target_bytes, source_bytes, mirror_relation.as_str()],
        )
        .map_err(|e| Self::map_edge_insert_error(source, e))?;
        let mirror_id = EdgeId::from_value(tx.last_insert_rowid());

        tx.commit()?;
        Ok((forward_id, mirror_id))
    }

    fn delete_edge_pair(
        &mut self,
        source: PersonId,
        target: PersonId,
    ) -> Result<PairDeletion, Self::Error> {
        let source_bytes = Self::person_id_to_bytes(source);
        let target_bytes = Self::person_id_to_bytes(target);

        let tx = self.conn.transaction()?;

        let forward = tx.execute(
            "DELETE FROM relatives WHERE source_id = ?1 AND target_id = ?2",
            params![source_bytes, target_bytes],
        )?;
        // A stray mirror without its forward edge stays untouched; callers
        // that were refused the forward deletion must see zero mutations.
        let mirror = if forward > 0 {
            tx.execute(
                "DELETE FROM relatives WHERE source_id = ?1 AND target_id = ?2",
                params![target_bytes, source_bytes],
            )?
        } else {
            0
        };

        tx.commit()?;
        Ok(PairDeletion {
            forward_deleted: forward > 0,
            mirror_deleted: mirror > 0,
        })
    }
}
