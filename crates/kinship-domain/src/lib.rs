//! Kinship Domain Layer
//!
//! This crate contains the core domain model for the Kinship relationship
//! engine. It has ZERO external dependencies beyond the `uuid` identifier
//! primitive and defines the fundamental concepts, value objects, and trait
//! interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Person**: a registered identity that may carry a Profile
//! - **Profile**: the demographic record (name, gender) a person must have
//!   before participating in any relationship
//! - **RelationType**: the registry of relationship types and their
//!   canonical reverse types
//! - **RelationshipEdge**: one typed directed link between two persons;
//!   every accepted relationship is stored as two independent edges
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - Pure domain logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod edge;
pub mod person;
pub mod relation;
pub mod traits;

// Re-exports for convenience
pub use edge::{EdgeId, RelationshipEdge};
pub use person::{Gender, Person, PersonId, Profile};
pub use relation::RelationType;
