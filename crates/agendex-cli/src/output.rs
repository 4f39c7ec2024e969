//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use agendex_domain::{DraftAgendaItem, DraftSpeakerProfile};
use colored::*;
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

    /// Format agenda items.
    pub fn format_agenda(&self, items: &[DraftAgendaItem]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_agenda_json(items),
            OutputFormat::Table => Ok(self.format_agenda_table(items)),
            OutputFormat::Quiet => Ok(items
                .iter()
                .map(|item| item.title.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format speaker profiles.
    pub fn format_speakers(&self, profiles: &[DraftSpeakerProfile]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_speakers_json(profiles),
            OutputFormat::Table => Ok(self.format_speakers_table(profiles)),
            OutputFormat::Quiet => Ok(profiles
                .iter()
                .map(|profile| profile.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_agenda_json(&self, items: &[DraftAgendaItem]) -> Result<String> {
        let json_items: Vec<serde_json::Value> = items
            .iter()
            .map(|item| {
                serde_json::json!({
                    "title": item.title,
                    "description": item.description,
                    "date": item.date,
                    "startTime": item.start_time,
                    "endTime": item.end_time,
                    "speakerIds": item.speaker_ids,
                    "type": item.item_type.as_str(),
                    "moderator": item.moderator,
                    "location": item.location,
                    "section": item.section,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_items)?)
    }

    fn format_speakers_json(&self, profiles: &[DraftSpeakerProfile]) -> Result<String> {
        let json_profiles: Vec<serde_json::Value> = profiles
            .iter()
            .map(|profile| {
                serde_json::json!({
                    "name": profile.name,
                    "specialty": profile.specialty,
                    "bio": profile.bio,
                    "imageHint": profile.image_hint,
                    "qualifications": profile.qualifications,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_profiles)?)
    }

    fn format_agenda_table(&self, items: &[DraftAgendaItem]) -> String {
        if items.is_empty() {
            return self.colorize("No agenda items found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Date", "Start", "End", "Type", "Title", "Speakers", "Section"]);

        for item in items {
            builder.push_record([
                item.date.as_str(),
                item.start_time.as_str(),
                item.end_time.as_str(),
                item.item_type.as_str(),
                item.title.as_str(),
                item.speaker_ids.join(", ").as_str(),
                item.section.as_deref().unwrap_or("-"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_speakers_table(&self, profiles: &[DraftSpeakerProfile]) -> String {
        if profiles.is_empty() {
            return self.colorize("No speakers found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Specialty", "Bio", "Qualifications"]);

        for profile in profiles {
            builder.push_record([
                profile.name.as_str(),
                profile.specialty.as_str(),
                truncate(&profile.bio, 60).as_str(),
                profile.qualifications.len().to_string().as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Shorten text to `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}
