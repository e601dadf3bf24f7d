//! Person module - registered identities and their demographic profiles

use std::fmt;

/// Unique identifier for a person based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability (persons list in registration order)
/// - 128-bit uniqueness
/// - RFC 9562-standard format with broad ecosystem support
/// - No coordination required for distributed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(u128);

impl PersonId {
    /// Generate a new UUIDv7-based PersonId
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::PersonId;
    ///
    /// let id = PersonId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a PersonId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a PersonId from a UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::PersonId;
    ///
    /// let id = PersonId::new();
    /// let parsed = PersonId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid person id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Gender category carried by a profile
///
/// Only used by the second-parent exclusivity rule; everything else in the
/// engine is gender-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Any other or undisclosed gender
    Other,
}

impl Gender {
    /// Get the gender name as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    /// Parse a gender from its stored string form
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            "OTHER" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid gender: {}", s))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered person
///
/// A person is just an identity. Until a [`Profile`] is attached the person
/// cannot participate in any relationship.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Registration time (seconds since Unix epoch)
    pub created_at: u64,
}

impl Person {
    /// Create a new person registered at the given time
    pub fn new(created_at: u64) -> Self {
        Self {
            id: PersonId::new(),
            created_at,
        }
    }
}

/// Demographic profile attached to a person
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Given name
    pub first_name: String,

    /// Optional middle name
    pub middle_name: Option<String>,

    /// Family name
    pub last_name: String,

    /// Gender category
    pub gender: Gender,
}

impl Profile {
    /// Full display name, with the middle name when present
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_id_roundtrip() {
        let id = PersonId::new();
        let parsed = PersonId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_person_id_rejects_garbage() {
        assert!(PersonId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_person_ids_sort_chronologically() {
        let a = PersonId::new();
        let b = PersonId::new();
        assert!(a <= b);
    }

    #[test]
    fn test_gender_roundtrip() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(Gender::parse(gender.as_str()), Some(gender));
        }
    }

    #[test]
    fn test_gender_parse_is_case_insensitive() {
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(Gender::parse("nonbinary"), None);
    }

    #[test]
    fn test_full_name() {
        let profile = Profile {
            first_name: "Alice".to_string(),
            middle_name: None,
            last_name: "Hargreaves".to_string(),
            gender: Gender::Female,
        };
        assert_eq!(profile.full_name(), "Alice Hargreaves");

        let with_middle = Profile {
            middle_name: Some("Pleasance".to_string()),
            ..profile
        };
        assert_eq!(with_middle.full_name(), "Alice Pleasance Hargreaves");
    }
}
