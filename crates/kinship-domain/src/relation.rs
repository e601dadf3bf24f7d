//! Relation type registry - valid relationship types and their reverses

use std::fmt;

/// Type of relationship between two persons
///
/// Every stored edge carries one of these. `Unknown` is a sentinel for
/// stored values outside the enumerated set: it signals a data-integrity
/// problem to the caller instead of crashing, and must never be used as the
/// type of a new edge or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationType {
    /// Target is a parent of the source
    Parent,

    /// Target is a step-parent of the source
    StepParent,

    /// Target is a child of the source
    Child,

    /// Target is a step-child of the source
    StepChild,

    /// Target is a full sibling of the source
    Sibling,

    /// Target is a half sibling of the source
    HalfSibling,

    /// Target is a step-sibling of the source
    StepSibling,

    /// Target is the spouse of the source
    Spouse,

    /// Target is a former spouse of the source
    ExSpouse,

    /// Sentinel for an unrecognized stored value; never valid for mirroring
    Unknown,
}

impl RelationType {
    /// All relation types that may be attached to a new edge
    pub const KNOWN: [RelationType; 9] = [
        RelationType::Parent,
        RelationType::StepParent,
        RelationType::Child,
        RelationType::StepChild,
        RelationType::Sibling,
        RelationType::HalfSibling,
        RelationType::StepSibling,
        RelationType::Spouse,
        RelationType::ExSpouse,
    ];

    /// The canonical reverse type used for the mirror edge
    ///
    /// Parent/child and step-parent/step-child invert; every other type is
    /// its own reverse. `Unknown` stays `Unknown` so a corrupt row can never
    /// produce a plausible-looking mirror.
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::RelationType;
    ///
    /// assert_eq!(RelationType::Parent.reverse(), RelationType::Child);
    /// assert_eq!(RelationType::Spouse.reverse(), RelationType::Spouse);
    /// ```
    pub fn reverse(&self) -> RelationType {
        match self {
            RelationType::Parent => RelationType::Child,
            RelationType::StepParent => RelationType::StepChild,
            RelationType::Child => RelationType::Parent,
            RelationType::StepChild => RelationType::StepParent,
            RelationType::Sibling => RelationType::Sibling,
            RelationType::HalfSibling => RelationType::HalfSibling,
            RelationType::StepSibling => RelationType::StepSibling,
            RelationType::Spouse => RelationType::Spouse,
            RelationType::ExSpouse => RelationType::ExSpouse,
            RelationType::Unknown => RelationType::Unknown,
        }
    }

    /// Get the relation name as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Parent => "PARENT",
            RelationType::StepParent => "STEPPARENT",
            RelationType::Child => "CHILD",
            RelationType::StepChild => "STEPCHILD",
            RelationType::Sibling => "SIBLING",
            RelationType::HalfSibling => "HALFSIBLING",
            RelationType::StepSibling => "STEPSIBLING",
            RelationType::Spouse => "SPOUSE",
            RelationType::ExSpouse => "EXSPOUSE",
            RelationType::Unknown => "UNKNOWN",
        }
    }

    /// Parse a relation from its stored string form
    ///
    /// Any value outside the enumerated set maps to [`RelationType::Unknown`]
    /// rather than failing, so a bad row surfaces as a sentinel the engine
    /// refuses to mirror instead of aborting a whole query.
    pub fn parse(s: &str) -> RelationType {
        match s.to_uppercase().as_str() {
            "PARENT" => RelationType::Parent,
            "STEPPARENT" => RelationType::StepParent,
            "CHILD" => RelationType::Child,
            "STEPCHILD" => RelationType::StepChild,
            "SIBLING" => RelationType::Sibling,
            "HALFSIBLING" => RelationType::HalfSibling,
            "STEPSIBLING" => RelationType::StepSibling,
            "SPOUSE" => RelationType::Spouse,
            "EXSPOUSE" => RelationType::ExSpouse,
            _ => RelationType::Unknown,
        }
    }

    /// Whether this is a member of the enumerated set (not the sentinel)
    pub fn is_known(&self) -> bool {
        !matches!(self, RelationType::Unknown)
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
