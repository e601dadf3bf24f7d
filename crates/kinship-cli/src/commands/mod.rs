//! Command implementations.

mod person;
mod picture;
mod profile;
mod relate;

pub use person::execute_person;
pub use picture::execute_picture;
pub use profile::execute_profile;
pub use relate::execute_relate;

use crate::error::{CliError, Result};
use kinship_domain::PersonId;

/// Parse a person id argument.
pub(crate) fn parse_person_id(input: &str) -> Result<PersonId> {
    PersonId::from_string(input).map_err(CliError::InvalidInput)
}
