//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use kinship_domain::{Gender, RelationType};
use std::path::PathBuf;

/// Kinship CLI - Record and query family relationships.
#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Database file path (overrides the configured default)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage registered persons
    Person(PersonArgs),

    /// Manage a person's demographic profile
    Profile(ProfileArgs),

    /// Manage a person's profile picture filename
    Picture(PictureArgs),

    /// Add, remove, and list relationships
    Relate(RelateArgs),
}

/// Arguments for person management.
#[derive(Debug, Parser)]
pub struct PersonArgs {
    #[command(subcommand)]
    pub action: PersonAction,
}

/// Person management actions.
#[derive(Debug, Subcommand)]
pub enum PersonAction {
    /// Register a new person and print the assigned id
    Add,

    /// List all registered persons
    List,

    /// Delete a person (their profile, picture, and relationships go too)
    Remove {
        /// Person id
        id: String,
    },
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// Attach or replace a person's profile
    Set {
        /// Person id
        id: String,

        /// Given name
        #[arg(long)]
        first: String,

        /// Middle name
        #[arg(long)]
        middle: Option<String>,

        /// Family name
        #[arg(long)]
        last: String,

        /// Gender category
        #[arg(long, value_enum)]
        gender: GenderArg,
    },

    /// Show a person's profile
    Show {
        /// Person id
        id: String,
    },
}

/// Arguments for picture management.
#[derive(Debug, Parser)]
pub struct PictureArgs {
    #[command(subcommand)]
    pub action: PictureAction,
}

/// Picture management actions.
#[derive(Debug, Subcommand)]
pub enum PictureAction {
    /// Set the stored picture filename for a person
    Set {
        /// Person id
        id: String,

        /// Picture filename as served by the media host
        filename: String,
    },
}

/// Arguments for relationship management.
#[derive(Debug, Parser)]
pub struct RelateArgs {
    #[command(subcommand)]
    pub action: RelateAction,
}

/// Relationship management actions.
#[derive(Debug, Subcommand)]
pub enum RelateAction {
    /// Validate and add a relationship (forward and mirror edges)
    Add {
        /// Subject person id
        subject: String,

        /// Target person id
        target: String,

        /// How the target relates to the subject
        #[arg(value_enum)]
        relation: RelationArg,
    },

    /// Remove the relationship recorded for an ordered pair
    Remove {
        /// Subject person id
        subject: String,

        /// Target person id
        target: String,
    },

    /// List a person's direct relatives
    List {
        /// Person id
        id: String,
    },

    /// Check whether a relationship would be accepted, without adding it
    Check {
        /// Subject person id
        subject: String,

        /// Target person id
        target: String,

        /// How the target relates to the subject
        #[arg(value_enum)]
        relation: RelationArg,
    },
}

/// Gender argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum GenderArg {
    /// Male
    Male,
    /// Female
    Female,
    /// Any other or undisclosed gender
    Other,
}

/// Relation type argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RelationArg {
    /// Target is a parent of the subject
    Parent,
    /// Target is a step-parent of the subject
    Stepparent,
    /// Target is a child of the subject
    Child,
    /// Target is a step-child of the subject
    Stepchild,
    /// Target is a full sibling of the subject
    Sibling,
    /// Target is a half sibling of the subject
    Halfsibling,
    /// Target is a step-sibling of the subject
    Stepsibling,
    /// Target is the spouse of the subject
    Spouse,
    /// Target is a former spouse of the subject
    Exspouse,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<GenderArg> for Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Other => Gender::Other,
        }
    }
}

impl From<RelationArg> for RelationType {
    fn from(relation: RelationArg) -> Self {
        match relation {
            RelationArg::Parent => RelationType::Parent,
            RelationArg::Stepparent => RelationType::StepParent,
            RelationArg::Child => RelationType::Child,
            RelationArg::Stepchild => RelationType::StepChild,
            RelationArg::Sibling => RelationType::Sibling,
            RelationArg::Halfsibling => RelationType::HalfSibling,
            RelationArg::Stepsibling => RelationType::StepSibling,
            RelationArg::Spouse => RelationType::Spouse,
            RelationArg::Exspouse => RelationType::ExSpouse,
        }
    }
}
