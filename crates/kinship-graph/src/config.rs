//! Validation configuration

/// Configuration for the constraint validator
///
/// The structural checks (target existence, self-relation, ordered-pair
/// duplicate) always run; the toggles below cover the rules that data-repair
/// tooling sometimes needs to relax when importing legacy trees.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Require both endpoints to carry a completed profile
    pub require_profiles: bool,

    /// Enforce the two-parent limit and the second-parent gender rule
    pub enforce_parent_limit: bool,

    /// Enforce the single-spouse limit (EXSPOUSE is never limited)
    pub enforce_spouse_limit: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_profiles: true,
            enforce_parent_limit: true,
            enforce_spouse_limit: true,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (structural checks only)
    pub fn permissive() -> Self {
        Self {
            require_profiles: false,
            enforce_parent_limit: false,
            enforce_spouse_limit: false,
        }
    }
}
