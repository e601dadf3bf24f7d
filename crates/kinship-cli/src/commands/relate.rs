//! Relate command implementation.

use super::parse_person_id;
use crate::cli::{RelateAction, RelateArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinship_graph::{FamilyGraph, GraphError, StaticMediaResolver, ValidationResult};
use kinship_store::SqliteStore;

/// Execute the relate command.
pub fn execute_relate(
    args: RelateArgs,
    graph: &mut FamilyGraph<SqliteStore>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        RelateAction::Add {
            subject,
            target,
            relation,
        } => {
            let subject_id = parse_person_id(&subject)?;
            let target_id = parse_person_id(&target)?;
            let relation = relation.into();

            match graph.add_relationship(subject_id, target_id, relation) {
                Ok(_) => {
                    println!(
                        "{}",
                        formatter.success(&format!(
                            "Relationship added: {} and its mirror {}.",
                            relation,
                            relation.reverse()
                        ))
                    );
                }
                Err(GraphError::Rejected(reason)) => {
                    return Err(CliError::Rejected(
                        formatter.rejection_message(reason).to_string(),
                    ));
                }
                Err(e) => return Err(e.into()),
            }
        }
        RelateAction::Remove { subject, target } => {
            let subject_id = parse_person_id(&subject)?;
            let target_id = parse_person_id(&target)?;

            match graph.remove_relationship(subject_id, target_id) {
                Ok(()) => {
                    println!("{}", formatter.success("Relationship removed."));
                }
                Err(GraphError::RelationshipNotFound) => {
                    return Err(CliError::Rejected(format!(
                        "Could not find a relationship from {} to {}.",
                        subject, target
                    )));
                }
                Err(e) => return Err(e.into()),
            }
        }
        RelateAction::List { id } => {
            let person_id = parse_person_id(&id)?;
            let media = StaticMediaResolver::default();
            let relatives = graph.list_relatives(person_id, &media)?;
            println!("{}", formatter.format_relatives(&relatives)?);
        }
        RelateAction::Check {
            subject,
            target,
            relation,
        } => {
            let subject_id = parse_person_id(&subject)?;
            let target_id = parse_person_id(&target)?;

            match graph.validate(subject_id, target_id, relation.into())? {
                ValidationResult::Accepted => {
                    println!("{}", formatter.success("Relationship would be accepted."));
                }
                ValidationResult::Rejected(reason) => {
                    println!(
                        "{}",
                        formatter.info(&format!(
                            "Would be rejected [{}]: {}",
                            reason.code(),
                            formatter.rejection_message(reason)
                        ))
                    );
                }
            }
        }
    }

    Ok(())
}
