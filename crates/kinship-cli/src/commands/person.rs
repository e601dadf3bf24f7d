//! Person command implementation.

use super::parse_person_id;
use crate::cli::{PersonAction, PersonArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinship_domain::traits::ProfileStore;
use kinship_domain::Person;
use kinship_graph::FamilyGraph;
use kinship_store::SqliteStore;
use std::time::{SystemTime, UNIX_EPOCH};

/// Execute the person command.
pub fn execute_person(
    args: PersonArgs,
    graph: &mut FamilyGraph<SqliteStore>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        PersonAction::Add => {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            let person = Person::new(now);
            graph.store_mut().add_person(&person)?;
            println!("{}", person.id);
            eprintln!(
                "{}",
                formatter.success("Person registered. Attach a profile before relating them.")
            );
        }
        PersonAction::List => {
            let persons = graph.store().list_persons()?;
            println!("{}", formatter.format_persons(&persons)?);
        }
        PersonAction::Remove { id } => {
            let person_id = parse_person_id(&id)?;
            if !graph.store_mut().remove_person(person_id)? {
                return Err(CliError::PersonNotFound(id));
            }
            println!(
                "{}",
                formatter.success("Person removed along with their relationships.")
            );
        }
    }

    Ok(())
}
