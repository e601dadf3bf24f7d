//! Relationship edge module - typed directed links between persons

use super::{PersonId, RelationType};

/// Surrogate identifier assigned by the store when an edge row is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(i64);

impl EdgeId {
    /// Wrap a raw storage row id
    pub fn from_value(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw row id
    pub fn value(&self) -> i64 {
        self.0
    }
}

/// A typed directed link from one person to another
///
/// Every accepted relationship is stored as TWO of these: the forward edge
/// and a mirror edge in the opposite direction carrying the reverse type.
/// The two rows are independent storage records, not one logical undirected
/// edge; deletion handles a missing mirror tolerantly rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipEdge {
    /// Surrogate row id
    pub id: EdgeId,

    /// Person the edge points from
    pub source: PersonId,

    /// Person the edge points to
    pub target: PersonId,

    /// How the target relates to the source
    pub relation: RelationType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_roundtrip() {
        let id = EdgeId::from_value(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_edge_equality_includes_relation() {
        let source = PersonId::new();
        let target = PersonId::new();
        let parent = RelationshipEdge {
            id: EdgeId::from_value(1),
            source,
            target,
            relation: RelationType::Parent,
        };
        let spouse = RelationshipEdge {
            relation: RelationType::Spouse,
            ..parent.clone()
        };
        assert_ne!(parent, spouse);
    }
}
