//! Picture command implementation.

use super::parse_person_id;
use crate::cli::{PictureAction, PictureArgs};
use crate::error::Result;
use crate::output::Formatter;
use kinship_domain::traits::ProfileStore;
use kinship_graph::FamilyGraph;
use kinship_store::SqliteStore;

/// Execute the picture command.
pub fn execute_picture(
    args: PictureArgs,
    graph: &mut FamilyGraph<SqliteStore>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        PictureAction::Set { id, filename } => {
            let person_id = parse_person_id(&id)?;
            graph.store_mut().set_picture(person_id, &filename)?;
            println!("{}", formatter.success("Picture filename saved."));
        }
    }

    Ok(())
}
