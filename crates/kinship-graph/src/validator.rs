//! Relationship validation logic

use crate::{GraphError, ValidationConfig};
use kinship_domain::traits::{ProfileStore, RelationStore};
use kinship_domain::{Gender, PersonId, RelationType};
use std::fmt;

/// Result of validating a proposed relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    /// The relationship may be added
    Accepted,

    /// The relationship was rejected
    Rejected(RejectionReason),
}

impl ValidationResult {
    /// Whether the proposal passed every check
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    /// The rejection reason, if any
    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            ValidationResult::Accepted => None,
            ValidationResult::Rejected(reason) => Some(*reason),
        }
    }
}

/// Reason codes for rejecting a proposed relationship
///
/// These are stable codes; human-readable text is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The target person is not registered
    TargetNotFound,

    /// Subject and target are the same person
    SelfRelation,

    /// An edge already exists for this ordered pair, whatever its type
    DuplicateRelationship,

    /// One or both endpoints lack a completed profile
    IncompleteProfile,

    /// The subject already has two parents
    TooManyParents,

    /// The subject already has a parent of the same gender category
    DuplicateGenderParent,

    /// The subject already has a spouse
    MultipleSpouses,
}

impl RejectionReason {
    /// Stable machine-readable code for this reason
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::TargetNotFound => "TARGET_NOT_FOUND",
            RejectionReason::SelfRelation => "SELF_RELATION",
            RejectionReason::DuplicateRelationship => "DUPLICATE_RELATIONSHIP",
            RejectionReason::IncompleteProfile => "INCOMPLETE_PROFILE",
            RejectionReason::TooManyParents => "TOO_MANY_PARENTS",
            RejectionReason::DuplicateGenderParent => "DUPLICATE_GENDER_PARENT",
            RejectionReason::MultipleSpouses => "MULTIPLE_SPOUSES",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The constraint validator for proposed relationships
///
/// A pure decision function over current stored state; it never mutates
/// anything. Checks run in a fixed order and short-circuit at the first
/// failure:
///
/// 1. target exists
/// 2. subject differs from target
/// 3. no edge exists for the ordered pair (any type)
/// 4. both endpoints have profiles
/// 5. type-specific cardinality/exclusivity rules
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a validator with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Validate a proposed relationship against the current store state
    ///
    /// # Arguments
    ///
    /// * `store` - the profile and edge store to consult
    /// * `subject` - the person the relationship is recorded for
    /// * `target` - the relative being linked
    /// * `relation` - how the target relates to the subject
    ///
    /// # Errors
    ///
    /// Returns `GraphError::UnknownRelation` for the `Unknown` sentinel and
    /// `GraphError::Store` when the store fails; every domain-rule failure
    /// comes back as `Ok(Rejected(reason))`.
    pub fn validate<S>(
        &self,
        store: &S,
        subject: PersonId,
        target: PersonId,
        relation: RelationType,
    ) -> Result<ValidationResult, GraphError>
    where
        S: ProfileStore + RelationStore,
        <S as ProfileStore>::Error: fmt::Display,
        <S as RelationStore>::Error: fmt::Display,
    {
        if !relation.is_known() {
            return Err(GraphError::UnknownRelation);
        }

        // 1. Target person exists
        if !store.person_exists(target).map_err(GraphError::store)? {
            return Ok(ValidationResult::Rejected(RejectionReason::TargetNotFound));
        }

        // 2. No self-relations
        if subject == target {
            return Ok(ValidationResult::Rejected(RejectionReason::SelfRelation));
        }

        // 3. At most one edge per ordered pair, regardless of type. The
        // reverse ordered pair is deliberately not consulted here.
        if store
            .find_edge(subject, target)
            .map_err(GraphError::store)?
            .is_some()
        {
            return Ok(ValidationResult::Rejected(
                RejectionReason::DuplicateRelationship,
            ));
        }

        // 4. Both endpoints need completed profiles
        let target_profile = store.get_profile(target).map_err(GraphError::store)?;
        if self.config.require_profiles {
            let subject_profile = store.get_profile(subject).map_err(GraphError::store)?;
            if subject_profile.is_none() || target_profile.is_none() {
                return Ok(ValidationResult::Rejected(
                    RejectionReason::IncompleteProfile,
                ));
            }
        }

        // 5. Type-specific rules
        match relation {
            RelationType::Parent if self.config.enforce_parent_limit => {
                self.check_parent_rule(store, subject, target_profile.map(|p| p.gender))
            }
            RelationType::Spouse if self.config.enforce_spouse_limit => {
                let spouses = store
                    .edges_of_type(subject, RelationType::Spouse)
                    .map_err(GraphError::store)?;
                if spouses.is_empty() {
                    Ok(ValidationResult::Accepted)
                } else {
                    Ok(ValidationResult::Rejected(RejectionReason::MultipleSpouses))
                }
            }
            // STEPPARENT, CHILD, STEPCHILD, the sibling variants, and
            // EXSPOUSE carry no further semantic rule.
            _ => Ok(ValidationResult::Accepted),
        }
    }

    /// Parent cardinality and second-parent gender exclusivity
    fn check_parent_rule<S>(
        &self,
        store: &S,
        subject: PersonId,
        new_parent_gender: Option<Gender>,
    ) -> Result<ValidationResult, GraphError>
    where
        S: ProfileStore + RelationStore,
        <S as ProfileStore>::Error: fmt::Display,
        <S as RelationStore>::Error: fmt::Display,
    {
        let parents = store
            .edges_of_type(subject, RelationType::Parent)
            .map_err(GraphError::store)?;

        match parents.as_slice() {
            [] => Ok(ValidationResult::Accepted),
            [existing] => {
                let existing_gender = store
                    .get_profile(existing.target)
                    .map_err(GraphError::store)?
                    .map(|p| p.gender);
                // Only exact MALE/MALE or FEMALE/FEMALE collide. Two
                // OTHER-gender parents are accepted; kept as-is from the
                // original rule set.
                match (existing_gender, new_parent_gender) {
                    (Some(Gender::Male), Some(Gender::Male))
                    | (Some(Gender::Female), Some(Gender::Female)) => Ok(
                        ValidationResult::Rejected(RejectionReason::DuplicateGenderParent),
                    ),
                    _ => Ok(ValidationResult::Accepted),
                }
            }
            _ => Ok(ValidationResult::Rejected(RejectionReason::TooManyParents)),
        }
    }
}
