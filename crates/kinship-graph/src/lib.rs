//! Kinship Graph Engine
//!
//! The relationship-graph consistency core: decides whether a proposed
//! relationship between two persons may be added, maintains the paired
//! directed edges representing accepted relationships, and answers queries
//! over a person's direct relatives.
//!
//! The engine provides:
//! - Constraint validation (existence, self-relation, ordered-pair
//!   uniqueness, profile completeness, parent/spouse cardinality)
//! - Atomic forward+mirror edge mutation with tolerant deletion
//! - Relative listing enriched with profile and avatar data
//!
//! # Examples
//!
//! ```no_run
//! use kinship_graph::FamilyGraph;
//! use kinship_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! let mut graph = FamilyGraph::new(store);
//!
//! // Validate and add relationships through the facade
//! // let ids = graph.add_relationship(alice, bob, RelationType::Parent)?;
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod media;
mod query;
mod validator;

pub use config::ValidationConfig;
pub use engine::FamilyGraph;
pub use error::GraphError;
pub use media::StaticMediaResolver;
pub use query::RelativeDescriptor;
pub use validator::{RejectionReason, ValidationResult, Validator};
