//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kinship_domain::{Person, Profile};
use kinship_graph::{RejectionReason, RelativeDescriptor};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a relative listing.
    pub fn format_relatives(&self, relatives: &[RelativeDescriptor]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(relatives)?),
            OutputFormat::Table => self.format_relatives_table(relatives),
            OutputFormat::Quiet => Ok(relatives
                .iter()
                .map(|r| r.relative_id.clone())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_relatives_table(&self, relatives: &[RelativeDescriptor]) -> Result<String> {
        if relatives.is_empty() {
            return Ok(self.colorize("No relatives found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Relation", "Avatar"]);

        for relative in relatives {
            builder.push_record([
                &relative.relative_id[..8], // Truncate ID for readability
                &relative.full_name(),
                &relative.relation,
                &relative.avatar_url,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a person listing.
    pub fn format_persons(&self, persons: &[(Person, Option<Profile>)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_persons: Vec<serde_json::Value> = persons
                    .iter()
                    .map(|(person, profile)| {
                        serde_json::json!({
                            "id": person.id.to_string(),
                            "created_at": person.created_at,
                            "name": profile.as_ref().map(|p| p.full_name()),
                            "gender": profile.as_ref().map(|p| p.gender.as_str()),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_persons)?)
            }
            OutputFormat::Table => self.format_persons_table(persons),
            OutputFormat::Quiet => Ok(persons
                .iter()
                .map(|(person, _)| person.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_persons_table(&self, persons: &[(Person, Option<Profile>)]) -> Result<String> {
        if persons.is_empty() {
            return Ok(self.colorize("No persons registered.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Gender"]);

        for (person, profile) in persons {
            let name = profile
                .as_ref()
                .map(|p| p.full_name())
                .unwrap_or_else(|| "(no profile)".to_string());
            let gender = profile.as_ref().map(|p| p.gender.as_str()).unwrap_or("-");
            builder.push_record([&person.id.to_string()[..8], &name, gender]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a single profile.
    pub fn format_profile(&self, id: &str, profile: &Profile) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "id": id,
                "first_name": profile.first_name,
                "middle_name": profile.middle_name,
                "last_name": profile.last_name,
                "gender": profile.gender.as_str(),
            }))?),
            OutputFormat::Table | OutputFormat::Quiet => Ok(format!(
                "{} ({})",
                profile.full_name(),
                profile.gender.as_str()
            )),
        }
    }

    /// Human-readable text for a rejection reason code.
    ///
    /// The engine only reports codes; rendering them is this layer's job.
    pub fn rejection_message(&self, reason: RejectionReason) -> &'static str {
        match reason {
            RejectionReason::TargetNotFound => "The selected relative does not exist.",
            RejectionReason::SelfRelation => "You cannot add yourself as a relative.",
            RejectionReason::DuplicateRelationship => "This relationship already exists.",
            RejectionReason::IncompleteProfile => {
                "Both persons must have complete profiles to establish a relationship."
            }
            RejectionReason::TooManyParents => "A person cannot have more than two parents.",
            RejectionReason::DuplicateGenderParent => {
                "Cannot add parent as a parent of the same gender already exists."
            }
            RejectionReason::MultipleSpouses => "Cannot add more than one spouse.",
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Apply a color when colored output is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
