//! Profile command implementation.

use super::parse_person_id;
use crate::cli::{ProfileAction, ProfileArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinship_domain::traits::ProfileStore;
use kinship_domain::Profile;
use kinship_graph::FamilyGraph;
use kinship_store::SqliteStore;

/// Execute the profile command.
pub fn execute_profile(
    args: ProfileArgs,
    graph: &mut FamilyGraph<SqliteStore>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ProfileAction::Set {
            id,
            first,
            middle,
            last,
            gender,
        } => {
            let person_id = parse_person_id(&id)?;
            let profile = Profile {
                first_name: first,
                middle_name: middle,
                last_name: last,
                gender: gender.into(),
            };
            graph.store_mut().upsert_profile(person_id, &profile)?;
            println!("{}", formatter.success("Profile saved."));
        }
        ProfileAction::Show { id } => {
            let person_id = parse_person_id(&id)?;
            if !graph.store().person_exists(person_id)? {
                return Err(CliError::PersonNotFound(id));
            }
            match graph.store().get_profile(person_id)? {
                Some(profile) => {
                    println!("{}", formatter.format_profile(&id, &profile)?);
                }
                None => println!("{}", formatter.info("No profile attached yet.")),
            }
        }
    }

    Ok(())
}
